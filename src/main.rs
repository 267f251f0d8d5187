use std::io;
use std::time::Duration;

use crossterm::event::KeyEventKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

mod app;
mod config;
mod error;
mod models;
mod query;
mod services;
mod state;
mod tui;
mod view;

use app::App;
use config::Config;
use error::Result;
use models::{AnalysisRecord, InventionName};
use services::{AnalysisGateway, HttpGateway};
use tui::{draw, handle_key_event};

const WRAP_WIDTH: usize = 80;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (only show warnings and errors by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Load configuration
    let config = Config::load()?;

    // Check for --analyze flag (headless create)
    if args.len() >= 2 && args[1] == "--analyze" {
        let raw = args[2..].join(" ");
        return analyze_headless(&config, &raw).await;
    }

    // Check for --list flag (headless listing)
    if args.len() >= 2 && args[1] == "--list" {
        return list_headless(&config).await;
    }

    // Check for --check flag (service health)
    if args.len() >= 2 && args[1] == "--check" {
        let gateway = HttpGateway::new(&config)?;
        let status = gateway.health().await?;
        println!("{}: {}", config.api_base_url, status);
        return Ok(());
    }

    // Initialize app
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick_rate: Duration) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        // Advance spinner animation
        app.tick_spinner();

        // Apply any fetches that completed since the last frame
        app.poll_results();

        // Poll for events with timeout to allow async operations
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = handle_key_event(key, app.input_active, app.show_help) {
                        if app.handle_action(action) {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

async fn analyze_headless(config: &Config, raw: &str) -> Result<()> {
    let name = match InventionName::parse(raw) {
        Ok(name) => name,
        Err(_) => {
            println!("Choose your curiosity: What invention's secret origin intrigues you?");
            return Ok(());
        }
    };

    let gateway = HttpGateway::new(config)?;
    println!("Uncovering the hidden story of {}...", name);
    let record = gateway.create_analysis(&name).await?;
    print_record(&record);
    Ok(())
}

fn print_record(record: &AnalysisRecord) {
    let analysis = &record.analysis;
    match analysis.invention_year {
        Some(year) => println!("\n#{} {} ({})", record.id, analysis.invention_name, year),
        None => println!("\n#{} {}", record.id, analysis.invention_name),
    }

    for line in textwrap::wrap(&analysis.summary, WRAP_WIDTH) {
        println!("{}", line);
    }

    if !analysis.narrative.is_empty() {
        println!("\nThe Wandering Path:");
        for line in textwrap::wrap(&analysis.narrative, WRAP_WIDTH) {
            println!("  {}", line);
        }
    }

    if !analysis.patterns_identified.is_empty() {
        let labels: Vec<String> = analysis
            .patterns_identified
            .iter()
            .zip(analysis.pattern_kinds())
            .map(|(raw, kind)| kind.label_for(raw))
            .collect();
        println!("\nPatterns: {}", labels.join(", "));
    }

    if !analysis.key_lesson.is_empty() {
        println!("\nThe Real Lesson:");
        for line in textwrap::wrap(&analysis.key_lesson, WRAP_WIDTH) {
            println!("  {}", line);
        }
    }
}

async fn list_headless(config: &Config) -> Result<()> {
    let gateway = HttpGateway::new(config)?;
    let (inventions, patterns, timeline) = futures::join!(
        gateway.list_inventions(),
        gateway.list_patterns(),
        gateway.list_timeline(),
    );

    let inventions = inventions?;
    println!("Recent Discoveries ({})", inventions.len());
    let recent = view::preview_of(&inventions, view::RECENT_INVENTIONS_PREVIEW);
    for invention in &recent.items {
        let year = invention
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!("  #{:<4} {} {}  (added {})", invention.id, year, invention.name, invention.added_on());
    }
    if recent.has_more() {
        println!("  ... and {} more", recent.hidden());
    }

    let patterns = patterns?;
    println!("\nInnovation Patterns ({})", patterns.len());
    for pattern in &view::preview_of(&patterns, view::PATTERNS_PREVIEW).items {
        println!("  {} [{} inventions]", pattern.label(), pattern.inventions.len());
    }

    let timeline = query::search_and_sort(&timeline?, "", config.timeline_order)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    println!("\nTimeline ({})", config.timeline_order.label());
    for entry in &view::preview_of(&timeline, view::TIMELINE_PREVIEW).items {
        println!("  {} {}: {}", entry.year, entry.invention, entry.key_discovery);
    }

    Ok(())
}
