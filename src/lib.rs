/// Public library interface for the Android devices MCP server
///
/// This module exports the server implementation and public types
/// that can be used by other applications or tests.

use thiserror::Error;

// Protocol and tool modules
pub mod adb;
pub mod mcp;
pub mod tools;

// Re-export the main types
pub use adb::{AdbBridge, AdbError, Device};
pub use mcp::McpServer;

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Writer task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
