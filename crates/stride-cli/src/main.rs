//! Stride CLI Application
//!
//! Plans a goal from the command line, or serves the planning tools over MCP.

mod args;
mod collaborator;
mod config;
mod mcp;
mod renderer;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use args::{Args, Commands, OutputFormat};
use clap::Parser;
use config::Config;
use env_logger::Env;
use jiff::Timestamp;
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::{models::Goal, PlanAssembler, PlanAssemblerBuilder, PlanResult, DEFAULT_USER_ID};

const DEFAULT_LOG_LEVEL: &str = "warn";

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            print_failure(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    let level = config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let assembler = build_assembler(&args, &config).context("Failed to initialize planner")?;

    info!("Stride started");

    if let Some(Commands::Serve) = args.command {
        info!("Starting Stride MCP server");
        run_stdio_server(StrideMcpServer::new(assembler))
            .await
            .context("MCP server failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let goal = Goal::new(
        args.goal.unwrap_or_default(),
        args.timeframe.unwrap_or_default(),
    );
    let result = assembler.assemble(&goal).await;

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&result).context("Failed to encode the plan")?;
            println!("{json}");
        }
        OutputFormat::Markdown => {
            TerminalRenderer::new(!args.no_color).render(&result.to_string())?;
        }
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build_assembler(args: &Args, config: &Config) -> stride_core::Result<PlanAssembler> {
    let user_id = args
        .user_id
        .clone()
        .or_else(|| config.default_user_id.clone())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let mut builder = PlanAssemblerBuilder::new()
        .with_attribution(args.attribution.unwrap_or(true));

    if let Some(context) = config.user_context(&user_id) {
        builder = builder.with_user_context(context);
    }
    builder = builder.with_user_id(user_id);

    if let Some(collaborator) = &config.collaborator {
        info!("Using collaborator '{}'", collaborator.command);
        builder = builder.with_collaborator(Arc::new(collaborator::from_config(collaborator)));
    }

    builder.build()
}

/// Prints the failure envelope used when no plan result could be produced.
fn print_failure(error: &str) {
    let result = PlanResult::failure(error, Timestamp::now());
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(_) => eprintln!("Error: {error}"),
    }
}
