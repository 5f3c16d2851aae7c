//! Tubelens - YouTube video information viewer
//!
//! Paste a video URL, get its metadata and the direct media links the
//! remote scraper API knows about. Runs as a desktop window or, with
//! `--inspect`, as a one-shot command.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use iced::Application;
use std::path::PathBuf;
use tubelens::app::Inspector;
use tubelens::formatter::{render_document, render_fragment, render_text, Report, ViewState};
use tubelens::gui;
use tubelens::utils::AppSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Look up one video URL without opening the window
    #[arg(long, value_name = "URL")]
    inspect: Option<String>,

    /// How to print the result of --inspect
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write a standalone HTML page instead of printing (implies html)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Open the written page with the system handler
    #[arg(long, requires = "output")]
    open: bool,

    /// Metadata API endpoint, overriding the settings file
    #[arg(long)]
    endpoint: Option<String>,

    /// Locale for upload dates, e.g. en_US
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::load_or_default();
    if let Some(endpoint) = &args.endpoint {
        settings.api_endpoint = endpoint.clone();
    }
    if let Some(locale) = &args.locale {
        settings.locale = Some(locale.clone());
    }

    if let Some(url) = &args.inspect {
        return inspect_cli(&args, url, &settings);
    }

    gui::TubelensApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(820.0, 640.0),
            min_size: Some(iced::Size::new(560.0, 420.0)),
            ..Default::default()
        },
        antialiasing: true,
        flags: settings,
        ..Default::default()
    })?;

    Ok(())
}

fn inspect_cli(args: &Args, url: &str, settings: &AppSettings) -> Result<()> {
    let inspector = Inspector::from_settings(settings)?;

    // Headless lookups run on a temporary runtime
    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(inspector.inspect(url));

    if let Some(path) = &args.output {
        let view = initial_view(settings, &report);
        std::fs::write(path, render_document(&report, &view))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());

        if args.open {
            open::that_detached(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Html => println!("{}", render_fragment(&report, &initial_view(settings, &report))),
    }

    Ok(())
}

fn initial_view(settings: &AppSettings, report: &Report) -> ViewState {
    ViewState::new(Some(settings.initial_section)).fit_to(report)
}
