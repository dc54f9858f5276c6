//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_sentry` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phish_sentry::initialization::init_logger_with;
use phish_sentry::{run_analysis, run_security_quiz, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (the reputation API key lives there)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if config.quiz {
        return run_security_quiz().await;
    }

    let show_stats = config.stats;
    match run_analysis(config).await {
        Ok((report, stats)) => {
            println!("{report}");
            if show_stats {
                for line in stats.summary_lines() {
                    println!("{line}");
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("phish_sentry error: {:#}", e);
            process::exit(1);
        }
    }
}
