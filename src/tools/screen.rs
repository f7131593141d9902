/// Tool for capturing an Android device screenshot
///
/// This module implements the get_android_screen MCP tool.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

use crate::adb::{AdbBridge, AdbError};
use crate::mcp::protocol::ToolCallResult;

/// Capture the screen of the given device (or the default one) as a PNG
///
/// The optional `device` argument selects a specific device via `adb -s`;
/// an absent or empty value falls through to adb's own default selection.
/// The raw capture bytes are base64-encoded into an image content block.
pub async fn capture_screen(
    bridge: &AdbBridge,
    arguments: &HashMap<String, Value>,
) -> Result<ToolCallResult, AdbError> {
    let device = arguments
        .get("device")
        .and_then(|value| value.as_str())
        .filter(|device| !device.is_empty());

    let png = bridge.screencap(device).await?;

    debug!("Encoding {} byte screenshot", png.len());

    Ok(ToolCallResult::image(STANDARD.encode(png)))
}
