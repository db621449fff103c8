//! Command implementations for the astro forecast CLI.
//!
//! Each subcommand drives a [`Workflow`](astro_session::Workflow) exactly as
//! the web form would: set fields, optionally resolve and pick a city, submit
//! once, render.

use astro_core::api::HttpBackend;
use astro_core::config::BackendConfig;
use astro_session::Workflow;
use clap::Subcommand;

pub mod predict;
pub mod search;

pub use predict::PredictArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Look up cities matching a query and list the candidates
    SearchCity {
        /// Free-text city name (at least 2 characters)
        query: String,
    },

    /// Request the 2026 forecast for a birth date, time and place
    Predict(PredictArgs),
}

pub async fn run(config: BackendConfig, command: Command) -> anyhow::Result<()> {
    let backend = HttpBackend::new(config)?;
    let workflow = Workflow::new(&backend, &backend);
    match command {
        Command::SearchCity { query } => {
            for row in search::search_city(&workflow, &query).await {
                println!("{}", row);
            }
            Ok(())
        }
        Command::Predict(args) => {
            let rendered = predict::predict(&workflow, &args).await?;
            print!("{}", rendered);
            Ok(())
        }
    }
}
