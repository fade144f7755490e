//! Rendering module for sinsfx.
//!
//! This module handles turning converted documents into JSON text and
//! writing them to disk.

mod json;

pub use json::{to_json_string, to_value, write_document};
