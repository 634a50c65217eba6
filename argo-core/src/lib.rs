//! Core types and synthetic profile generation for ARGO float data.
//!
//! This crate holds the ocean region catalog, the query classifier, and the
//! generation engine that synthesizes plausible temperature/salinity depth
//! profiles per region. All generation is synchronous and side-effect free;
//! callers inject the random source.

pub mod classify;
pub mod dates;
pub mod generate;
pub mod narrative;
pub mod profile;
pub mod query;
pub mod region;
pub mod synth;
