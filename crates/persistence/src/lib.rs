//! Persistence layer for the Leave Manager backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings) and the entity/model mapper
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod repositories;
