//! Taskboard server CLI.
//!
//! Usage:
//!   taskboard serve                  # Serve /graphql from MongoDB
//!   taskboard serve --in-memory      # Serve from a transient store
//!   taskboard schema                 # Print the schema SDL
//!   taskboard schema schema.graphql  # Write the SDL to a file

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use taskboard::config::Config;
use taskboard::graphql::build_schema;
use taskboard::server;
use taskboard::store::{DocumentStore, MemoryStore, MongoStore};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "GraphQL API for projects and tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Bind address (overrides TASKBOARD_ADDR)
        #[arg(long)]
        addr: Option<SocketAddr>,

        /// MongoDB connection string (overrides DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,

        /// Database name (overrides TASKBOARD_DB)
        #[arg(long)]
        database: Option<String>,

        /// Use a transient in-memory store instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },

    /// Print the schema in GraphQL SDL form
    Schema {
        /// Write to this file instead of stdout
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            addr,
            database_url,
            database,
            in_memory,
        } => {
            let mut config = Config::from_env()?;
            if let Some(addr) = addr {
                config.bind = addr;
            }
            if let Some(url) = database_url {
                config.database_url = url;
            }
            if let Some(name) = database {
                config.database_name = name;
            }

            let store: Arc<dyn DocumentStore> = if in_memory {
                warn!("using in-memory store; documents will not survive a restart");
                Arc::new(MemoryStore::new())
            } else {
                Arc::new(MongoStore::connect(&config).await?)
            };

            server::serve(config.bind, build_schema(store)).await?;
        }

        Commands::Schema { output } => {
            // The store is never touched when printing the SDL.
            let schema = build_schema(Arc::new(MemoryStore::new()));
            match output {
                Some(path) => std::fs::write(path, schema.sdl())?,
                None => println!("{}", schema.sdl()),
            }
        }
    }

    Ok(())
}
