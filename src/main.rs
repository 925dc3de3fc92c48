use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tein_chapter::config::Config;
use tein_chapter::storage::{CacheDb, StorageError};
use tein_chapter::{persist_queue, AppStore};

/// Get the config directory path (~/.config/tein-chapter/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("tein-chapter"))
}

#[derive(Parser, Debug)]
#[command(name = "tein-chapter", about = "Campus chapter membership core: hydrate and inspect local state")]
struct Args {
    /// Path to the cache database (overrides config)
    #[arg(long, value_name = "FILE")]
    cache: Option<PathBuf>,

    /// Reset the local cache (delete and recreate)
    #[arg(long)]
    reset_cache: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    let config = Config::load(&config_dir.join("config.toml")).context("Failed to load config")?;

    // Cache path precedence: --cache flag, then config, then default
    let cache_path = args
        .cache
        .or(config.cache_file)
        .unwrap_or_else(|| config_dir.join("cache.db"));

    if args.reset_cache && cache_path.exists() {
        std::fs::remove_file(&cache_path).context("Failed to delete cache database")?;
        println!("Cache reset.");
    }

    let cache_path_str = cache_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in cache path"))?;
    let cache = match CacheDb::open(cache_path_str).await {
        Ok(cache) => cache,
        Err(StorageError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of tein-chapter appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to open cache database: {}", e)),
    };

    // Build the store; with persistence on, mutations queue writes that a
    // background task lands. The queue is only created on that path — a
    // handle held outside the store would keep the writer loop alive forever.
    let (mut store, writer) = if config.persist {
        let (handle, worker) = persist_queue(cache.clone());
        (AppStore::with_persist(handle), Some(tokio::spawn(worker.run())))
    } else {
        tracing::info!("Persistence disabled by config; session is throwaway");
        (AppStore::new(), None)
    };

    store.hydrate(&cache).await;

    // Session summary for a quick smoke check of the hydrated state
    let profile = store.profile();
    println!(
        "{} {} — {} ({:?}, dues {:?})",
        profile.first_name, profile.last_name, profile.membership_id, profile.role, profile.dues_status
    );
    println!("Today's QR seed: {}", store.today_qr_seed());
    for event in store.events() {
        println!("  {} [{}] rsvp: {:?}", event.date, event.title, event.rsvp_status);
    }
    let analytics = store.analytics();
    println!(
        "Tasks {}% complete, {} open issues, learning {}%",
        analytics.task_completion,
        store.issues().len(),
        store.learning_progress()
    );

    // Dropping the store closes the queue, letting the writer drain and exit
    drop(store);
    if let Some(writer) = writer {
        writer.await.context("Persist writer task panicked")?;
    }

    Ok(())
}
