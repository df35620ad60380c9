//! testrail-cli: command-line access to TestRail via the MCP server
//!
//! Spawns `testrail-mcp-server` as a child process, performs the MCP
//! handshake, sends exactly one tools/call request built from the
//! command line, prints the text payload of the matching response, and
//! exits. The whole exchange is bounded by a hard timeout.

mod commands;
mod line_buffer;

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use commands::{initialize_request, lookup, CommandSpec, CALL_ID};
use line_buffer::LineBuffer;
use serde_json::Value;
use testrail_mcp::{McpRequest, McpResponse};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, Command};
use tracing::debug;

/// Hard ceiling on the whole exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Grace period for the child to finish initializing before the
/// operation request is written. Not an acknowledgment wait: a server
/// that takes longer than this to start will miss the request.
const INIT_DELAY: Duration = Duration::from_millis(100);

fn usage() {
    println!("TestRail CLI - Usage:");
    for spec in commands::COMMANDS {
        let invocation = match spec.id_arg {
            Some(key) => format!("{} <{}>", spec.name, key),
            None => spec.name.to_string(),
        };
        println!("  testrail-cli {:<22} - {}", invocation, spec.help);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let command = args.next();
    let raw_id = args.next();

    let spec = match command.as_deref().and_then(lookup) {
        Some(spec) => spec,
        None => {
            usage();
            std::process::exit(1);
        }
    };

    let id = match (spec.id_arg, raw_id) {
        (Some(_), None) => {
            eprintln!("Error: {} requires an ID argument", spec.name);
            std::process::exit(1);
        }
        (Some(key), Some(raw)) => match raw.parse::<u64>() {
            Ok(id) => Some(id),
            Err(_) => {
                eprintln!("Error: {} must be a number, got '{}'", key, raw);
                std::process::exit(1);
            }
        },
        (None, _) => None,
    };

    let mut child = match spawn_server() {
        Ok(child) => child,
        Err(e) => {
            eprintln!("Failed to start server: {:#}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match tokio::time::timeout(REQUEST_TIMEOUT, run(&mut child, spec, id)).await {
        Ok(Ok(code)) => code,
        Ok(Err(e)) => {
            eprintln!("Error: {:#}", e);
            1
        }
        Err(_) => {
            eprintln!("Request timed out");
            1
        }
    };

    child.kill().await.ok();
    std::process::exit(exit_code);
}

/// Drive the handshake and the single operation request; returns the
/// process exit code.
async fn run(child: &mut Child, spec: &CommandSpec, id: Option<u64>) -> Result<i32> {
    let mut stdin = child.stdin.take().context("child stdin not piped")?;
    let mut stdout = child.stdout.take().context("child stdout not piped")?;

    write_request(&mut stdin, &initialize_request()).await?;

    tokio::time::sleep(INIT_DELAY).await;

    write_request(&mut stdin, &spec.call_request(id)).await?;

    let mut lines = LineBuffer::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stdout.read(&mut chunk).await.context("reading server output")?;
        if n == 0 {
            anyhow::bail!("server closed its output before responding");
        }

        let text = String::from_utf8_lossy(&chunk[..n]);
        for line in lines.push(&text) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response: McpResponse = match serde_json::from_str(line) {
                Ok(response) => response,
                Err(e) => {
                    debug!(error = %e, "Skipping unparseable line");
                    continue;
                }
            };

            if response.id == Some(Value::from(CALL_ID)) {
                if let Some(result) = response.result {
                    if let Some(text) = extract_text(&result) {
                        println!("{}", text);
                    }
                    return Ok(0);
                }
            }
            if let Some(error) = response.error {
                eprintln!("Error: {}", error.message);
                return Ok(1);
            }
        }
    }
}

async fn write_request(stdin: &mut ChildStdin, request: &McpRequest) -> Result<()> {
    let mut line = serde_json::to_string(request)?;
    line.push('\n');
    stdin
        .write_all(line.as_bytes())
        .await
        .context("writing to server stdin")?;
    stdin.flush().await?;
    Ok(())
}

/// The text payload nested in a tools/call result
fn extract_text(result: &Value) -> Option<&str> {
    result.get("content")?.get(0)?.get("text")?.as_str()
}

fn server_binary() -> PathBuf {
    if let Ok(path) = std::env::var("TESTRAIL_MCP_SERVER") {
        return PathBuf::from(path);
    }
    // Default to the server binary installed next to this one
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("testrail-mcp-server")))
        .unwrap_or_else(|| PathBuf::from("testrail-mcp-server"))
}

fn spawn_server() -> Result<Child> {
    let path = server_binary();
    debug!(server = %path.display(), "Spawning MCP server");

    Command::new(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("spawning {}", path.display()))
}
