//! Play command - connect to a game server and play one game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::{config::EngineConfig, session::Session};

#[derive(Parser, Debug)]
#[command(about = "Connect to a game server and play one game")]
pub struct PlayArgs {
    /// Server port
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Random seed for reproducible tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file; flags given on the command line take precedence
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Merge the configuration file (if any) with command-line overrides
    pub fn resolve(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve()?;
    let mut session = Session::connect(&config)
        .with_context(|| format!("starting session with {}", config.address()))?;

    let outcome = session.run().context("playing game")?;
    info!(
        "session finished after {} messages: {outcome:?}",
        session.messages()
    );
    Ok(())
}
