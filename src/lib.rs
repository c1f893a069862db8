//! Core entry point for the render_pdf crate.
//!
//! The library turns a report DTO (an opaque JSON document) into a one-page
//! placeholder PDF that reproduces the DTO's pretty-printed text as plain
//! lines. Real layout of the report data is out of scope; the crate exists to
//! prove the rendering pipeline is wired up end to end.

pub mod dto;
pub mod error;
pub mod renderer;
