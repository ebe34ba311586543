//! Core library for invoice-cashflow-core
pub mod config;
pub mod oauth;
pub mod random;
pub mod urgency;
