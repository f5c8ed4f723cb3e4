//! Application layer - Use cases and ports
//!
//! This layer contains:
//! - Ports: the catalog documents and the remote card search
//! - Services: sprite resolution, card enrichment, rendering and page lifecycle

pub mod ports;
pub mod services;
