/// Tool for listing connected Android devices
///
/// This module implements the get_android_devices MCP tool.

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::debug;

use crate::adb::{parse_devices, AdbBridge, AdbError};
use crate::mcp::protocol::ToolCallResult;

/// List attached devices by running `adb devices -l`
///
/// The result is a single text block holding the JSON-serialized device
/// array. The tool takes no arguments; any that arrive are ignored.
pub async fn list_devices(
    bridge: &AdbBridge,
    _arguments: &HashMap<String, Value>,
) -> Result<ToolCallResult, AdbError> {
    let output = bridge.list_devices().await?;
    let devices = parse_devices(&output);

    debug!("Found {} device(s)", devices.len());

    Ok(ToolCallResult::success(json!(devices).to_string()))
}
