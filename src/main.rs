#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::{AppConfig, CONFIG};

/// Valentine - a little proposal, one screen at a time
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "Valentine - an interactive proposal with one possible answer")]
struct Args {
    /// Who the proposal is for
    #[arg(short, long, default_value = valentine_core::DEFAULT_RECIPIENT)]
    name: String,

    /// Seed for the runaway "No" button (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = valentine_core::logging::DEFAULT_FILTER)]
    log: String,
}

fn main() {
    let args = Args::parse();
    valentine_core::logging::init(&args.log);

    let config = AppConfig {
        recipient: args.name,
        seed: args.seed,
    };

    let title = format!("For {}", config.recipient.trim());
    tracing::info!(
        recipient = %config.recipient,
        seeded = config.seed.is_some(),
        "Starting valentine"
    );

    // Store config globally
    let _ = CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
