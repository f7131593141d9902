/// MCP tools for Android device inspection
///
/// This module contains the tools that external clients (like Claude) can
/// call, plus the registry describing them. The registry is fixed at
/// startup; clients see the tools in the order defined here.

use serde_json::json;

use crate::mcp::protocol::ToolDefinition;

// Tool implementations live in separate files
pub mod devices;
pub mod screen;

// Re-export tool functions for easy access
pub use devices::list_devices;
pub use screen::capture_screen;

/// Every tool this server exposes, in the order clients will see them
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_android_devices".to_string(),
            description: "Get a list of connected Android devices and emulators".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "get_android_screen".to_string(),
            description: "Capture a screenshot from an Android device".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "device": {
                        "type": "string",
                        "description": "Device name (e.g., 'emulator-5554'). If not provided, uses the first available device."
                    }
                }
            }),
        },
    ]
}
