/// Tests for parsing `adb devices -l` output
use android_devices_mcp::adb::{parse_devices, Device};

#[cfg(test)]
mod device_parse_unit_tests {
    use super::*;

    const LISTING: &str = "List of devices attached\n\
        emulator-5554          device product:sdk_gphone64_x86_64 model:sdk_gphone64_x86_64 device:emu64x transport_id:1\n\
        0123456789ABCDEF       device usb:1-1 product:raven model:Pixel_6_Pro device:raven transport_id:2\n";

    #[test]
    fn parses_two_devices_from_full_listing() {
        let devices = parse_devices(LISTING);

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].device, "emulator-5554");
        assert_eq!(devices[0].model, "sdk_gphone64_x86_64");
        assert_eq!(devices[0].run_status, "device");
        assert_eq!(devices[0].transport_id, "1");
        assert_eq!(devices[1].device, "0123456789ABCDEF");
        assert_eq!(devices[1].model, "Pixel_6_Pro");
        assert_eq!(devices[1].transport_id, "2");
    }

    #[test]
    fn name_carries_the_product_value() {
        let devices = parse_devices(LISTING);

        assert_eq!(devices[0].name, "sdk_gphone64_x86_64");
        assert_eq!(devices[1].name, "raven");
    }

    #[test]
    fn header_line_is_discarded() {
        // The header itself has more than two whitespace-separated fields,
        // so only the skip keeps it out of the results.
        assert!(parse_devices("List of devices attached").is_empty());
        assert!(parse_devices("List of devices attached\n").is_empty());
    }

    #[test]
    fn short_and_blank_lines_are_skipped() {
        let listing = "List of devices attached\n\nlonely\nemulator-5554 offline\n";
        let devices = parse_devices(listing);

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].device, "emulator-5554");
        assert_eq!(devices[0].run_status, "offline");
    }

    #[test]
    fn missing_keys_default_to_empty_strings() {
        let devices = parse_devices("List of devices attached\n0123456789ABCDEF unauthorized transport_id:3\n");

        assert_eq!(
            devices,
            vec![Device {
                name: String::new(),
                device: "0123456789ABCDEF".to_string(),
                model: String::new(),
                run_status: "unauthorized".to_string(),
                transport_id: "3".to_string(),
            }]
        );
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let listing =
            "List of devices attached\r\nemulator-5554 device product:p model:m transport_id:9\r\n";
        let devices = parse_devices(listing);

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "p");
        assert_eq!(devices[0].transport_id, "9");
    }

    #[test]
    fn empty_output_yields_no_devices() {
        assert!(parse_devices("").is_empty());
        assert!(parse_devices("\n\n").is_empty());
    }
}
