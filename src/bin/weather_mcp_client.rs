//! MCP Client Entry Point
//!
//! Spawns the server over stdio, opens a session and either runs a short
//! demo, lists the tools, or calls one tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt};

use weather_mcp_server::client::{ClientSession, parse_arguments};

#[derive(Debug, Parser)]
#[command(name = "weather_mcp_client", version, about = "Call tools on the weather MCP server")]
struct Cli {
    /// Server executable to spawn.
    #[arg(long, env = "MCP_SERVER_COMMAND", default_value = "weather_mcp_server")]
    server: String,

    /// Extra arguments for the server executable.
    #[arg(long = "server-arg")]
    server_args: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tools, then call `echo` and `add`.
    Demo,

    /// List the available tools.
    List,

    /// Call a tool with JSON arguments.
    Call {
        /// Tool name.
        name: String,

        /// Arguments as a JSON object, e.g. '{"state": "CA"}'.
        #[arg(default_value = "")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let session = ClientSession::connect(&cli.server, &cli.server_args)
        .await
        .with_context(|| format!("failed to connect to '{}'", cli.server))?;

    let outcome = run(&session, cli.command.unwrap_or(Command::Demo)).await;
    session.close().await?;
    outcome
}

async fn run(session: &ClientSession, command: Command) -> Result<()> {
    match command {
        Command::Demo => {
            println!("Tools: {:?}", session.list_tool_names().await?);

            let reply = session
                .call_tool("echo", json!({"text": "hello mcp"}).as_object().cloned())
                .await?;
            println!("echo -> {:?}", reply.texts);

            let reply = session
                .call_tool("add", json!({"a": 1, "b": 2}).as_object().cloned())
                .await?;
            println!("add -> {}", reply.display());
        }
        Command::List => {
            for tool in session.list_tools().await? {
                println!(
                    "{}: {}",
                    tool.name,
                    tool.description.as_deref().unwrap_or("")
                );
            }
        }
        Command::Call { name, args } => {
            let arguments = parse_arguments(&args)?;
            let reply = session.call_tool(&name, arguments).await?;
            println!("{}", reply.display());
        }
    }
    Ok(())
}
