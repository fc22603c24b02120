//! Mock servers for integration testing
//!
//! The portfolio REST API is an external service; this mock lets the client
//! and the full router be exercised without a running backend.
#![allow(dead_code)]

pub mod portfolio;

pub use portfolio::{MockPortfolioApi, RecordedRequest, RecordedUpload, MOCK_PASSWORD, MOCK_TOKEN};
