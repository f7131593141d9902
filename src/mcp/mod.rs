/// MCP protocol implementation
///
/// This module handles the Model Context Protocol communication,
/// including JSON-RPC parsing, message framing and tool routing.

pub mod protocol;
pub mod server;
pub mod transport;

// Re-export main types
pub use server::McpServer;
pub use transport::{FramedWriter, LineReader};
