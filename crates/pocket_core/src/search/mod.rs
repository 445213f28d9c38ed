//! Note search entry points.
//!
//! # Responsibility
//! - Filter an in-memory note collection by free-text query.
//! - Keep matching rules inside core so every caller filters the same way.

pub mod filter;
