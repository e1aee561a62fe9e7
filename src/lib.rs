//! Produce Catalog Library
//!
//! This library provides an in-memory produce catalog served over HTTP,
//! with format validation and duplicate rejection on bulk insertion.

// Domain modules
pub mod catalog;

// Infrastructure
pub mod config;
pub mod router;
pub mod telemetry;
