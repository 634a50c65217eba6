//! Application-facing plumbing around the ARGO generation core.
//!
//! This crate turns core query results into forms suitable for
//! presentation and interchange: flat CSV and pretty JSON exports, a
//! GeoJSON map document, and the chat session state the UI layer owns.

pub mod export;
pub mod map;
pub mod session;
