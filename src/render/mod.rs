//! Rendering module for inspecting documents in other formats.

mod json;

pub use json::{to_json, to_json_value, JsonFormat};
