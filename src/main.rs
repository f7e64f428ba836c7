//! Genflow command line entry point.
//!
//! Binary name: `genflow`
//!
//! Checks the model credential, generates a workflow for the given
//! description, prints it and saves it to
//! `ai-workflow-{platform}-{complexity}.json`.

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use genflow::{Config, DEFAULT_COMPLEXITY, GeneratorBuilder, Platform, WorkflowOutcome, WorkflowRequest, output, resolve_api_key};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "genflow", version, about = "Generate no-code automation workflows from natural language")]
struct Cli {
    /// Natural-language description of the workflow
    description: String,

    /// Target platform (n8n, make, zapier, ...)
    #[arg(default_value = "n8n")]
    platform: String,

    /// Complexity level (simple, medium, complex)
    #[arg(default_value = DEFAULT_COMPLEXITY)]
    complexity: String,

    /// Path to a TOML config file
    #[arg(long, env = "GENFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Model name, overrides the config file
    #[arg(long)]
    model: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "genflow=debug,info",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::create(path)?,
        None => Config::default(),
    };
    if let Some(model) = cli.model {
        config.model.name = model;
    }

    let api_key = resolve_api_key(&config.model.api_key_env, |var| std::env::var(var).ok())?;
    let output_dir = config.output_dir.clone();
    let generator = GeneratorBuilder::new().config(config).api_key(api_key).build()?;

    let request = WorkflowRequest::new(cli.description, Platform::from_str(&cli.platform)?, cli.complexity);

    println!("Generating {} workflow for: {}", request.platform, request.description);
    println!("Complexity: {}", request.complexity);
    println!("{}", "-".repeat(50));

    let outcome = generator.generate(&request).await;
    if let WorkflowOutcome::Fallback { reason, .. } = &outcome {
        println!("Error generating workflow with {}: {}", generator.model(), reason);
    }

    let workflow = outcome.to_value()?;
    println!("Generated Workflow:");
    println!("{}", output::render(&workflow)?);

    let path = output::save(&output_dir, &request, &workflow)?;
    println!("\nWorkflow saved to: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["genflow", "Send a Slack message on new email"]).unwrap();
        assert_eq!(cli.description, "Send a Slack message on new email");
        assert_eq!(cli.platform, "n8n");
        assert_eq!(cli.complexity, "medium");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_positional_overrides() {
        let cli = Cli::try_parse_from(["genflow", "Sync contacts", "zapier", "complex", "-vv", "--model", "gemini-1.5-pro"]).unwrap();
        assert_eq!(cli.platform, "zapier");
        assert_eq!(cli.complexity, "complex");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.model.as_deref(), Some("gemini-1.5-pro"));
    }

    #[test]
    fn test_cli_requires_description() {
        assert!(Cli::try_parse_from(["genflow"]).is_err());
    }
}
