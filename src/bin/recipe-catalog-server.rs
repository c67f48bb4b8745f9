// ABOUTME: Recipe catalog HTTP server binary
// ABOUTME: Loads configuration, prepares the database, seeds an empty catalog, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog Server Binary

use anyhow::Result;
use clap::Parser;
use recipe_catalog::{
    config::{DatabaseUrl, ServerConfig},
    database::RecipeDatabase,
    logging,
    server::{self, ServerResources},
    services::seed_if_empty,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-catalog-server")]
#[command(about = "Recipe catalog API - create, update, list and search recipes")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (sqlite:<path> or sqlite::memory:)
    #[arg(long)]
    database_url: Option<String>,

    /// Override seed fixture path
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Skip seeding an empty catalog on startup
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(url) = self.database_url {
            config.database = DatabaseUrl::parse_url(&url);
        }
        if let Some(path) = self.seed_file {
            config.seed.file = path;
        }
        if self.no_seed {
            config.seed.enabled = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    info!("Starting recipe catalog server");
    info!("{}", config.summary());

    let database = RecipeDatabase::new(&config.database).await?;
    let resources = Arc::new(ServerResources::new(config, database));

    if resources.config.seed.enabled {
        let outcome = seed_if_empty(&resources.recipes, &resources.config.seed.file).await;
        info!(?outcome, "Startup seeding finished");
    }

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
