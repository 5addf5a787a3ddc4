//! Adboard CLI
//!
//! Drives the dashboard logic without a browser:
//! - Sort the search terms report
//! - Print the chart configuration or the sample series
//! - Show or toggle the persisted theme
//! - Replay viewport resizes through the debouncer

use adboard::chart::{ChartAdapter, HeadlessBackend, ResponsiveLayout};
use adboard::config::{generate_default_config, Config, LoggingConfig};
use adboard::dashboard::{Dashboard, DashboardOptions, DashboardParts};
use adboard::preferences::FileStore;
use adboard::series::{SeriesGenerator, SeriesPoint};
use adboard::table::csv_import::load_table;
use adboard::table::sample::search_terms_table;
use adboard::table::{SortEngine, Table};
use adboard::theme::{Theme, ThemeController};
use adboard::timer::{ManualScheduler, Scheduler, TokioScheduler};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "adboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search terms performance dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/adboard/config.toml, then ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the search terms table by a column
    Sort {
        /// Column name: search-term, match-type, impressions, interactions,
        /// interaction-rate, avg-cost, cost
        column: String,
        /// CSV report to load instead of the built-in sample
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Number of consecutive header clicks
        #[arg(short, long, default_value_t = 1)]
        times: usize,
    },

    /// Print the chart configuration as JSON
    Chart {
        /// Viewport width in pixels
        #[arg(short, long, default_value_t = 1280.0)]
        width: f64,
        /// Theme to style for (default: the stored preference)
        #[arg(short, long)]
        theme: Option<Theme>,
    },

    /// Print the generated 30-day series
    Series,

    /// Show or toggle the stored theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Replay a burst of viewport resizes through the debouncer
    Resize {
        /// Widths in the order the resize events arrive
        #[arg(required = true)]
        widths: Vec<f64>,
        /// Width the page starts at
        #[arg(long, default_value_t = 1280.0)]
        from: f64,
        /// Gap between events (ms)
        #[arg(long, default_value_t = 100)]
        interval_ms: u64,
        /// Use real timers instead of a virtual clock
        #[arg(long)]
        realtime: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
}

#[derive(Serialize)]
struct RowOutput<'a> {
    id: usize,
    summary: bool,
    cells: &'a [String],
}

#[derive(Serialize)]
struct ResizeReport {
    events: usize,
    redraws: usize,
    max_ticks: u32,
    font_size: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Sort {
            column,
            input,
            times,
        } => {
            let mut table = match input {
                Some(path) => load_table(&path)?,
                None => search_terms_table(),
            };

            let mut engine = SortEngine::new();
            for _ in 0..times {
                engine.sort_by(&mut table, &column);
            }

            match cli.format {
                OutputFormat::Json => {
                    let rows: Vec<_> = table
                        .rows()
                        .iter()
                        .map(|r| RowOutput {
                            id: r.id().0,
                            summary: r.is_summary(),
                            cells: r.cells(),
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                OutputFormat::Table => print_table(&table),
            }
        }

        Commands::Chart { width, theme } => {
            let theme = match theme {
                Some(theme) => theme,
                None => stored_theme(&config)?,
            };

            let series = SeriesGenerator::default().generate();
            let mut chart = ChartAdapter::new(
                &series,
                HeadlessBackend::new(),
                config.chart.breakpoints.clone(),
                width,
            );
            chart.apply_theme(theme)?;
            println!("{}", serde_json::to_string_pretty(chart.config())?);
        }

        Commands::Series => {
            let series = SeriesGenerator::default().generate();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                OutputFormat::Table => print_series(&series),
            }
        }

        Commands::Theme { action } => {
            let store = FileStore::open(config.preferences.resolved_file())?;
            let mut controller = ThemeController::load_with_key(store, &config.preferences.key);

            if let ThemeAction::Toggle = action {
                let next = controller.theme().toggled();
                controller.set(next)?;
                tracing::info!(path = %controller.store().path().display(), "Saved theme preference");
            }
            println!("{}", controller.theme());
        }

        Commands::Resize {
            widths,
            from,
            interval_ms,
            realtime,
        } => {
            let interval = Duration::from_millis(interval_ms);
            let report = if realtime {
                let local = tokio::task::LocalSet::new();
                local
                    .run_until(replay_realtime(&config, &widths, from, interval))
                    .await?
            } else {
                replay_virtual(&config, &widths, from, interval)?
            };

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Table => println!(
                    "{} resize events, {} redraw(s): max ticks {}, font {}px",
                    report.events, report.redraws, report.max_ticks, report.font_size
                ),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("adboard={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn stored_theme(config: &Config) -> Result<Theme, Box<dyn std::error::Error>> {
    let store = FileStore::open(config.preferences.resolved_file())?;
    Ok(ThemeController::load_with_key(store, &config.preferences.key).theme())
}

fn session<T: Scheduler>(
    config: &Config,
    scheduler: T,
    from: f64,
) -> Result<Dashboard<FileStore, HeadlessBackend, T>, Box<dyn std::error::Error>> {
    let parts = DashboardParts {
        store: FileStore::open(config.preferences.resolved_file())?,
        backend: HeadlessBackend::new(),
        scheduler,
        table: search_terms_table(),
        series: SeriesGenerator::default().generate(),
    };
    Ok(Dashboard::new(parts, from, DashboardOptions::from(config))?)
}

fn report<T: Scheduler>(
    dashboard: &Dashboard<FileStore, HeadlessBackend, T>,
    events: usize,
) -> ResizeReport {
    let chart = dashboard.chart();
    let ResponsiveLayout {
        max_ticks,
        font_size,
    } = chart.layout();
    ResizeReport {
        events,
        redraws: chart.backend().resizes,
        max_ticks,
        font_size,
    }
}

fn replay_virtual(
    config: &Config,
    widths: &[f64],
    from: f64,
    interval: Duration,
) -> Result<ResizeReport, Box<dyn std::error::Error>> {
    let clock = ManualScheduler::new();
    let dashboard = session(config, clock.clone(), from)?;

    for &width in widths {
        dashboard.viewport_resized(width);
        clock.advance(interval);
    }
    clock.advance(config.chart.debounce());

    Ok(report(&dashboard, widths.len()))
}

async fn replay_realtime(
    config: &Config,
    widths: &[f64],
    from: f64,
    interval: Duration,
) -> Result<ResizeReport, Box<dyn std::error::Error>> {
    let dashboard = session(config, TokioScheduler::new(), from)?;

    for &width in widths {
        dashboard.viewport_resized(width);
        tokio::time::sleep(interval).await;
    }
    tokio::time::sleep(config.chart.debounce() + Duration::from_millis(50)).await;

    Ok(report(&dashboard, widths.len()))
}

fn print_table(table: &Table) {
    let headers: Vec<String> = table
        .headers()
        .iter()
        .map(|h| match h.indicator {
            Some(indicator) => format!("{} {}", h.label, indicator),
            None => h.label.clone(),
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (i, cell) in row.cells().iter().enumerate() {
            if i >= widths.len() {
                widths.push(0);
            }
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(&headers));
    println!("{}", "-".repeat(widths.iter().skip(1).sum::<usize>() + 2 * widths.len().saturating_sub(2)));
    for row in table.rows() {
        println!("{}", line(row.cells()));
    }
}

fn print_series(series: &[SeriesPoint]) {
    println!("{:<8}  {:>12}  {:>9}", "Day", "Interactions", "Avg. CPC");
    for point in series {
        println!(
            "{:<8}  {:>12}  {:>9}",
            point.label,
            point.interactions,
            format!("${:.2}", point.average_cost)
        );
    }
}
