/// Tests for the fixed tool registry
use android_devices_mcp::tools::tool_definitions;
use serde_json::json;

#[cfg(test)]
mod registry_unit_tests {
    use super::*;

    #[test]
    fn devices_tool_is_listed_before_screen_tool() {
        let names: Vec<String> = tool_definitions()
            .into_iter()
            .map(|tool| tool.name)
            .collect();

        assert_eq!(names, vec!["get_android_devices", "get_android_screen"]);
    }

    #[test]
    fn schemas_describe_object_parameters() {
        let tools = tool_definitions();

        for tool in &tools {
            assert_eq!(tool.input_schema["type"], "object");
            assert!(tool.input_schema["properties"].is_object());
            assert!(!tool.description.is_empty());
        }

        // The devices tool takes nothing; the screen tool takes an
        // optional device string.
        assert_eq!(tools[0].input_schema["properties"], json!({}));
        assert_eq!(
            tools[1].input_schema["properties"]["device"]["type"],
            "string"
        );
    }
}
