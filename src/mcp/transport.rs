/// Framed I/O for the MCP wire protocol
///
/// Requests arrive as newline-delimited JSON; responses leave as
/// length-prefixed frames (`Content-Length: <N>\r\n\r\n<body>`). The two
/// directions are asymmetric on purpose: that is the protocol the clients
/// of this server already speak.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::mcp::protocol::JsonRpcResponse;
use crate::ServerError;

/// Reads newline-delimited messages from an input stream.
///
/// Generic over the reader so tests can drive the server from in-memory
/// pipes instead of real stdin.
pub struct LineReader<R> {
    reader: BufReader<R>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    /// Wrap an input stream in a buffered line reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the next input line, stripped of its `\n` or `\r\n` terminator.
    ///
    /// Returns `Ok(None)` at end of stream. An empty line is returned as an
    /// empty string, not skipped; the caller decides what to do with it.
    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// read, so a garbled line degrades to a parse error instead of ending
    /// the session.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw).await? {
            0 => Ok(None),
            _ => {
                while raw.ends_with(b"\n") || raw.ends_with(b"\r") {
                    raw.pop();
                }
                Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
            }
        }
    }
}

/// Writes length-prefixed JSON-RPC frames to an output stream.
pub struct FramedWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> FramedWriter<W> {
    /// Wrap an output stream in a framing writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize one response and write it as a single frame.
    ///
    /// The header's length is the UTF-8 byte count of the body (not its
    /// character count), and nothing follows the body: the next frame
    /// starts immediately after it.
    pub async fn write_response(&mut self, response: &JsonRpcResponse) -> Result<(), ServerError> {
        let body = serde_json::to_string(response)?;
        self.writer
            .write_all(format!("Content-Length: {}\r\n\r\n", body.len()).as_bytes())
            .await?;
        self.writer.write_all(body.as_bytes()).await?;
        self.writer.flush().await?;

        debug!("Sent response: {}", body);
        Ok(())
    }
}
