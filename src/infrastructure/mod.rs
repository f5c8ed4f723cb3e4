//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog files: JSON documents on disk
//! - Card search: HTTP client for the remote card API
//! - HTTP: page shell, REST API routes and sprite files
//! - Pages: registry of open pages and its cleanup worker
//! - Config: Application configuration
//! - State: Shared application state

pub mod card_search;
pub mod catalog_files;
pub mod config;
pub mod http;
pub mod page_registry;
pub mod page_workers;
pub mod state;
