//! hapticctl - Haptic Explorer CLI
//!
//! A small command-line front end for the Pulsekit effect catalog: list
//! the authored effects and play them through a console actuator. This
//! is the demo presentation layer; all the interesting behavior lives in
//! `pulsekit-engine` and `pulsekit-pattern`.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod actuator;

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pulsekit_engine::PatternEngine;
use pulsekit_pattern::{NamedEffect, effects};

use crate::actuator::ConsoleActuator;

#[derive(Parser)]
#[command(name = "hapticctl")]
#[command(about = "Haptic Explorer CLI - browse and play the Pulsekit effect catalog")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the effect catalog
    List,

    /// Play one named effect
    Play {
        /// Effect name (see `hapticctl list`)
        effect: String,

        /// Hold length in seconds (continuous only)
        #[arg(long, default_value_t = effects::DEFAULT_CONTINUOUS_DURATION)]
        duration: f32,

        /// Strength, 0.0 to 1.0 (continuous only)
        #[arg(long, default_value_t = effects::DEFAULT_CONTINUOUS_INTENSITY)]
        intensity: f32,
    },

    /// Play every effect in the catalog in sequence
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("hapticctl={log_level},pulsekit_engine={log_level}").into()
        }))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::List => list(),
        Commands::Play {
            effect,
            duration,
            intensity,
        } => play(&effect, duration, intensity),
        Commands::Demo => demo(),
    }
}

fn list() -> Result<()> {
    for effect in NamedEffect::ALL {
        println!("{:<16} {}", effect.name(), effect.description());
    }
    Ok(())
}

fn play(effect: &str, duration: f32, intensity: f32) -> Result<()> {
    let named: NamedEffect = effect
        .parse()
        .context("try `hapticctl list` for the catalog")?;

    let engine = open_engine()?;
    match named {
        NamedEffect::Continuous => engine.continuous(duration, intensity)?,
        other => engine.play_named(other)?,
    }
    Ok(())
}

fn demo() -> Result<()> {
    let engine = open_engine()?;
    for effect in NamedEffect::ALL {
        println!("▸ {}", effect.description());
        engine.play_named(effect)?;
        // Breathing room between effects.
        thread::sleep(Duration::from_millis(400));
    }
    Ok(())
}

fn open_engine() -> Result<PatternEngine> {
    let engine = PatternEngine::new(Box::new(ConsoleActuator::new()));
    engine
        .open()
        .context("failed to open the haptic engine")?;
    Ok(engine)
}
