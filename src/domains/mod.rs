//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! MCP server. The tools domain is the only one this server exposes.

pub mod tools;
