//! Catalog response helpers
//!
//! Responses carrying catalog data are pretty-printed with a four-space
//! indent.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// An indented JSON body with an explicit status.
pub struct PrettyJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let PrettyJson(status, value) = self;
        match to_indented_json(&value) {
            Ok(body) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(%err, "failed to encode response body");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

/// Serializes `value` as JSON indented by four spaces.
pub fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// One-line summary of a batch for log output.
///
/// Example output: `"AAAA-BBBB-CCCC-DDDD Kiwi, EEEE-FFFF-GGGG-HHHH Mango"`.
pub fn format_batch_summary(items: &[super::models::ProduceItem]) -> String {
    items
        .iter()
        .map(|i| format!("{} {}", i.code, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}
