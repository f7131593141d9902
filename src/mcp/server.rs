/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests line by line from stdin
/// 2. Routes them to the Android device tools
/// 3. Sends Content-Length framed responses to stdout

use serde_json::{json, Value};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::adb::{AdbBridge, AdbError};
use crate::mcp::protocol::*;
use crate::mcp::transport::{FramedWriter, LineReader};
use crate::tools;
use crate::ServerError;

/// MCP server that handles communication with Claude and other MCP clients
pub struct McpServer {
    /// Handle to the adb executable, cloned into each tool task
    bridge: AdbBridge,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(bridge: AdbBridge) -> Self {
        Self { bridge }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        self.run_with_io(tokio::io::stdin(), tokio::io::stdout())
            .await
    }

    /// Run the MCP server over arbitrary streams
    ///
    /// Requests are read line by line; responses go through a channel to a
    /// single writer task, so tool tasks can finish in any order without
    /// interleaving frames. Callers correlate responses by request id.
    pub async fn run_with_io<R, W>(&mut self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let mut reader = LineReader::new(reader);
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        // The writer task is the only owner of the output stream.
        let writer_task = tokio::spawn(async move {
            let mut writer = FramedWriter::new(writer);
            while let Some(response) = rx.recv().await {
                writer.write_response(&response).await?;
            }
            Ok::<(), ServerError>(())
        });

        loop {
            match reader.next_line().await {
                Ok(None) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(Some(line)) => {
                    if let Some(response) = self.process_line(&line, &tx) {
                        if tx.send(response).is_err() {
                            // Writer gone, most likely stdout closed.
                            break;
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        // Dropping our sender lets the writer drain responses from tool
        // tasks still in flight, then exit.
        drop(tx);
        writer_task.await??;

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns the immediate response, or `None` when the request was
    /// handed to a tool task that will reply through the channel.
    fn process_line(
        &self,
        line: &str,
        responses: &mpsc::UnboundedSender<JsonRpcResponse>,
    ) -> Option<JsonRpcResponse> {
        debug!("Processing request: {}", line);

        // Every line must parse, empty ones included; the request id is
        // unknowable here, so error responses carry an explicit null.
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    "Parse error".to_string(),
                    None,
                ));
            }
        };

        self.handle_request(request, responses)
    }

    /// Handle a JSON-RPC request
    fn handle_request(
        &self,
        request: JsonRpcRequest,
        responses: &mpsc::UnboundedSender<JsonRpcResponse>,
    ) -> Option<JsonRpcResponse> {
        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(request)),
            "tools/list" => Some(self.handle_tools_list(request)),
            "tools/call" => self.handle_tools_call(request, responses),
            _ => Some(JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                "Method not found".to_string(),
                None,
            )),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: true }),
            },
            server_info: ServerInfo {
                name: "android-devices-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tools = tools::tool_definitions();
        JsonRpcResponse::success(request.id, json!({"tools": tools}))
    }

    /// Handle tools/call request
    ///
    /// Known tools run as spawned tasks and answer through the channel;
    /// unknown tools are rejected synchronously, before any process starts.
    fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
        responses: &mpsc::UnboundedSender<JsonRpcResponse>,
    ) -> Option<JsonRpcResponse> {
        let params = request.params.unwrap_or_else(|| json!({}));
        let call: ToolCallParams = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => {
                debug!("Malformed tool call params: {}", e);
                return Some(JsonRpcResponse::error(
                    request.id,
                    error_codes::METHOD_NOT_FOUND,
                    "Tool not found".to_string(),
                    None,
                ));
            }
        };

        let ToolCallParams { name, arguments } = call;
        let id = request.id;

        match name.as_str() {
            "get_android_devices" => {
                debug!("Dispatching tool call: {}", name);
                let bridge = self.bridge.clone();
                let responses = responses.clone();
                tokio::spawn(async move {
                    let outcome = tools::list_devices(&bridge, &arguments).await;
                    if responses.send(Self::tool_response(id, outcome)).is_err() {
                        debug!("Response channel closed, dropping device list");
                    }
                });
                None
            }
            "get_android_screen" => {
                debug!("Dispatching tool call: {}", name);
                let bridge = self.bridge.clone();
                let responses = responses.clone();
                tokio::spawn(async move {
                    let outcome = tools::capture_screen(&bridge, &arguments).await;
                    if responses.send(Self::tool_response(id, outcome)).is_err() {
                        debug!("Response channel closed, dropping screenshot");
                    }
                });
                None
            }
            _ => {
                debug!("Unknown tool requested: {}", name);
                Some(JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    "Tool not found".to_string(),
                    None,
                ))
            }
        }
    }

    /// Convert a tool outcome into the response for the given request id
    fn tool_response(id: Value, outcome: Result<ToolCallResult, AdbError>) -> JsonRpcResponse {
        match outcome {
            Ok(result) => {
                JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
            }
            Err(e) => JsonRpcResponse::error(
                id,
                error_codes::TOOL_EXECUTION_ERROR,
                e.to_string(),
                None,
            ),
        }
    }
}
