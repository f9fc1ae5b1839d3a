use anyhow::Context;
use clap::Parser;

use tallyboard::api::ApiServer;
use tallyboard::cli::{Cli, Commands};
use tallyboard::client::CounterClient;
use tallyboard::config::{Config, ConfigStore};
use tallyboard::store::{Counter, CounterId, CounterStore, SnapshotFile};
use tallyboard::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);
    store.update(|config| cli.apply_overrides(config));
    let config = store.get();
    config.validate().context("Invalid command-line override")?;

    match cli.command {
        Commands::Serve { .. } => {
            logging::init_tracing();
            serve(&config)
        }
        Commands::Seed { .. } => {
            logging::init_tracing();
            seed(&config)
        }
        Commands::Ui { .. } => {
            let log_path = logging::client_log_path();
            logging::init_file_tracing(&log_path)
                .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
            ui::run(&config.client).context("Terminal client failed")
        }
        Commands::List { .. } => {
            logging::init_tracing();
            let client = CounterClient::new(&config.client)?;
            let counters = runtime()?.block_on(client.list_counters())?;
            print_counters(&counters);
            Ok(())
        }
        Commands::Inc { id, by, .. } => {
            logging::init_tracing();
            let client = CounterClient::new(&config.client)?;
            let counter = runtime()?.block_on(client.increment(CounterId(id), by))?;
            print_counters(std::slice::from_ref(&counter));
            Ok(())
        }
    }
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn serve(config: &Config) -> anyhow::Result<()> {
    runtime()?.block_on(async {
        let mut server = ApiServer::from_config(config)?;
        server.bind(&config.server.bind_addr).await?;
        server.run().await?;
        Ok::<(), anyhow::Error>(())
    })
}

/// Seed the snapshot file offline. Fails while a server holds its lock.
fn seed(config: &Config) -> anyhow::Result<()> {
    let path = config
        .server
        .data_file
        .as_ref()
        .context("No data file: pass --data-file or set server.data_file")?;
    let store = CounterStore::with_snapshot(SnapshotFile::open(path)?)?;
    if store.seed(&config.seed)? {
        println!(
            "Seeded {} groups and {} counters into {}",
            config.seed.groups.len(),
            config.seed.counters.len(),
            path.display()
        );
    } else {
        println!("{} already holds data, nothing seeded", path.display());
    }
    Ok(())
}

fn print_counters(counters: &[Counter]) {
    println!("{:>4}  {:<24} {:<16} {:>12}", "ID", "NAME", "GROUP", "VALUE");
    for counter in counters {
        let group = counter
            .group
            .as_ref()
            .map(|group| group.group_name.as_str())
            .unwrap_or("-");
        println!(
            "{:>4}  {:<24} {:<16} {:>12}",
            counter.counter_id.0, counter.counter_name, group, counter.value
        );
    }
}
