//! Hangar CLI
//!
//! Inspection entry point for the deployment manager core: lists the
//! template catalog and chain configs, shows the effective manager
//! config, and validates weight files before they reach a deployment.

use anyhow::Result;
use clap::Parser;
use std::fs;
use tracing_subscriber::EnvFilter;

use hangar::agents::validate_weights;
use hangar::chains::chain_configs;
use hangar::config::{get_config_path, load_config};
use hangar::error::HangarError;
use hangar::templates::templates;
use hangar::types::default_manager_config;

const VERSION: &str = "0.1.0";

/// Hangar -- Agent Deployment Manager Core
#[derive(Parser, Debug)]
#[command(
    name = "hangar",
    version = VERSION,
    about = "Agent deployment manager core"
)]
struct Cli {
    /// List the service template catalog
    #[arg(long)]
    templates: bool,

    /// List supported chain configurations
    #[arg(long)]
    chains: bool,

    /// Show the effective manager configuration
    #[arg(long)]
    config: bool,

    /// Validate a Supafund weights JSON file
    #[arg(long, value_name = "PATH")]
    validate_weights: Option<String>,
}

fn show_templates() {
    for template in templates() {
        println!(
            "{:<20} {:?} ({}, home chain {:?})",
            template.name, template.agent_type, template.service_version, template.home_chain
        );
        for (chain, config) in &template.configurations {
            println!(
                "  {:?}: agent_id {}, staking program {}, bond {} wei",
                chain, config.agent_id, config.staking_program_id, config.cost_of_bond
            );
        }
    }
}

fn show_chains() {
    for chain in chain_configs() {
        println!(
            "{:<10} id {:<6} {:<5} safe threshold {} {}",
            chain.name,
            chain.chain_id.id(),
            chain.native_token.symbol,
            chain.safe_creation_threshold,
            chain.rpc
        );
    }
}

fn show_config() {
    let config = load_config().unwrap_or_else(default_manager_config);
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to render config: {e}"),
    }
    println!("(config file: {})", get_config_path().display());
}

fn check_weights(path: &str) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let weights: serde_json::Value = serde_json::from_str(&contents)?;
    if !validate_weights(&weights) {
        return Err(HangarError::Validation(
            "expected exactly the five weight categories, numeric, summing to 100".to_string(),
        )
        .into());
    }
    println!("Weights are valid.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.templates {
        show_templates();
    } else if cli.chains {
        show_chains();
    } else if cli.config {
        show_config();
    } else if let Some(path) = cli.validate_weights {
        check_weights(&path)?;
    } else {
        println!("Nothing to do. Try --templates, --chains, --config, or --validate-weights.");
    }

    Ok(())
}
