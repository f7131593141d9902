/// Parsing of `adb devices -l` output into device records
///
/// A listing looks like:
///
/// ```text
/// List of devices attached
/// emulator-5554          device product:sdk_gphone64_x86_64 model:sdk_gphone64_x86_64 device:emu64x transport_id:1
/// 0123456789ABCDEF       unauthorized transport_id:2
/// ```

use serde::{Deserialize, Serialize};

/// One attached device or emulator as reported by `adb devices -l`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Product name reported by the device. Kept under `name` for
    /// compatibility with existing clients, mislabeled as it is.
    pub name: String,
    /// Serial number or emulator identifier
    pub device: String,
    /// Hardware model (e.g. "sdk_gphone64_x86_64")
    pub model: String,
    /// Connection state flag ("device", "offline", "unauthorized")
    pub run_status: String,
    /// Transport id assigned by the adb daemon
    pub transport_id: String,
}

/// Parse the raw output of `adb devices -l` into device records
///
/// The first line is the "List of devices attached" header and is
/// discarded. Every remaining line describes one device: identifier,
/// state flag, then `key:value` pairs. Lines with fewer than two fields
/// are skipped; missing keys default to empty strings.
pub fn parse_devices(output: &str) -> Vec<Device> {
    output
        .trim()
        .lines()
        .skip(1)
        .filter_map(parse_device_line)
        .collect()
}

fn parse_device_line(line: &str) -> Option<Device> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return None;
    }

    Some(Device {
        name: field_value(&fields, "product:"),
        device: fields[0].to_string(),
        model: field_value(&fields, "model:"),
        run_status: fields[1].to_string(),
        transport_id: field_value(&fields, "transport_id:"),
    })
}

/// Value of the first `key:value` field matching `key`, or "" when absent
fn field_value(fields: &[&str], key: &str) -> String {
    fields
        .iter()
        .find_map(|field| field.strip_prefix(key))
        .unwrap_or_default()
        .to_string()
}
