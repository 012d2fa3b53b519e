//! Tool abstraction exposed to the LLM assistant.
//!
//! Tools implement the [`Tool`] trait and are collected in a [`ToolRegistry`]
//! whose schemas are handed to the model as its function-calling surface.

pub mod registry;
pub mod types;

pub use registry::{RegistryError, SharedTool, Tool, ToolRegistry};
pub use types::{FunctionSchema, ToolError, ToolResult, ToolSchema};
