/// Main entry point for the Android devices MCP server
///
/// This file sets up logging, parses command line arguments, and starts
/// the MCP server. The server listens for JSON-RPC requests over
/// stdin/stdout following the MCP protocol.

use clap::Parser;
use tracing::info;

use android_devices_mcp::{AdbBridge, McpServer};

/// Command line arguments for the Android devices MCP server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name or path of the adb executable to invoke
    #[arg(long, default_value = "adb")]
    adb: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("android_devices_mcp={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting Android devices MCP server");

    let bridge = AdbBridge::new(args.adb);
    let mut server = McpServer::new(bridge);

    // Run the MCP server - this handles JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Android devices MCP server shutdown complete");
    Ok(())
}
