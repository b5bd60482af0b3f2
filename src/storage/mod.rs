//! Storage layer for the football warehouse
//!
//! This module wraps the SQLite database, organized into logical components:
//! - `models`: Row structures
//! - `schema`: Connection and schema management
//! - `queries`: Existence checks, inserts and listings
//! - `summary`: Aggregation for the summary report

pub mod models;
pub mod queries;
pub mod schema;
pub mod summary;


pub use models::*;
pub use schema::Warehouse;
