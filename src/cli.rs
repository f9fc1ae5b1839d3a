use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "tallyboard",
    version,
    about = "Shared named counters over HTTP, with a terminal client"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Config file (default: <config dir>/tallyboard/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP service.
    Serve {
        #[arg(long, value_name = "ADDR", help = "Socket address to listen on")]
        bind: Option<String>,
        #[arg(long, value_name = "PATH", help = "JSON snapshot file for persistence")]
        data_file: Option<PathBuf>,
    },
    /// Apply the configured seed to an empty snapshot file.
    Seed {
        #[arg(long, value_name = "PATH", help = "JSON snapshot file to seed")]
        data_file: Option<PathBuf>,
    },
    /// Run the terminal client.
    Ui {
        #[arg(long, value_name = "URL", help = "Server base URL")]
        url: Option<String>,
    },
    /// Print all counters.
    List {
        #[arg(long, value_name = "URL", help = "Server base URL")]
        url: Option<String>,
    },
    /// Increment a counter and print it.
    Inc {
        id: i64,
        #[arg(
            long,
            default_value_t = 1,
            allow_hyphen_values = true,
            value_name = "DELTA",
            help = "Signed amount to add"
        )]
        by: i64,
        #[arg(long, value_name = "URL", help = "Server base URL")]
        url: Option<String>,
    },
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        match &self.command {
            Commands::Serve { bind, data_file } => {
                if let Some(bind) = bind {
                    config.server.bind_addr = bind.clone();
                }
                if let Some(path) = data_file {
                    config.server.data_file = Some(path.clone());
                }
            }
            Commands::Seed { data_file } => {
                if let Some(path) = data_file {
                    config.server.data_file = Some(path.clone());
                }
            }
            Commands::Ui { url } | Commands::List { url } | Commands::Inc { url, .. } => {
                if let Some(url) = url {
                    config.client.base_url = url.clone();
                }
            }
        }
    }
}
