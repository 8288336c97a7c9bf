//! Data models for parsed receipts, transaction drafts and configuration.

pub mod config;
pub mod receipt;
pub mod transaction;
