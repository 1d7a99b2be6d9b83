//! Shared utilities and common types for the Leave Manager backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Page-number pagination types and helpers

pub mod pagination;
