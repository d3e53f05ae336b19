mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::format_time;
use persistence::{ensure_dir, get_data_dir, init_local_data_dir, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use ticker::{Ticker, TICK_INTERVAL};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(name = "timebank", version)]
#[command(about = "A terminal task timer that banks time saved by finishing early", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding tasks and saved time
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .timebank directory in the current directory
    Init,
    /// Print the saved time balance and pending tasks
    List,
    /// Queue one or more identical tasks
    Add {
        /// Task name
        name: String,
        /// Estimated minutes per task
        minutes: String,
        /// How many copies to queue
        #[arg(short = 'n', long, default_value = "1")]
        count: String,
    },
    /// Delete all tasks and saved time
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_config_path);
    let config = AppConfig::load_or_default(&config_path)?;

    match cli.command {
        Some(Commands::Init) => {
            let current_dir =
                std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized timebank directory: {}", data_dir.display());
            println!();
            println!("Timebank will now use this local directory for tasks and saved time.");
            println!("Run 'timebank' to start.");
            Ok(())
        }
        Some(Commands::List) => {
            let (app, _guard) = open_app(cli.data_dir, &config)?;
            print_list(&app);
            Ok(())
        }
        Some(Commands::Add {
            name,
            minutes,
            count,
        }) => {
            let (mut app, _guard) = open_app(cli.data_dir, &config)?;
            let added = app.add_tasks(&name, &minutes, &count);
            if added == 0 {
                anyhow::bail!(
                    "No task added: the name must not be empty and minutes must be a positive number"
                );
            }
            println!("Added {} task(s): {} ({} min)", added, name.trim(), minutes.trim());
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            let (mut app, _guard) = open_app(cli.data_dir, &config)?;
            if yes || confirm_clear()? {
                app.clear_all();
                println!("All tasks and saved time cleared.");
            } else {
                println!("Nothing cleared.");
            }
            Ok(())
        }
        None => {
            let (mut app, _guard) = open_app(cli.data_dir, &config)?;
            run_tui(&mut app, &config)
        }
    }
}

/// Resolve the data directory, start logging into it and load the app state
fn open_app(data_dir: Option<PathBuf>, config: &AppConfig) -> Result<(AppState, WorkerGuard)> {
    let data_dir = match data_dir.or_else(|| config.data_dir.clone()) {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    ensure_dir(&data_dir)?;

    let guard = logging::init_logging(&data_dir)?;
    let store = FileStore::new(data_dir);
    tracing::info!(data_dir = %store.dir().display(), "opening timebank");

    let app = AppState::new(Box::new(store), config);
    Ok((app, guard))
}

fn print_list(app: &AppState) {
    println!("Saved time: {}", format_time(app.saved_seconds()));

    let tasks = app.registry.list_tasks();
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for (idx, task) in tasks.iter().enumerate() {
        println!("{:>3}. {} ({} min)", idx + 1, task.name, task.estimated_minutes);
    }
}

/// Ask on stdin before wiping everything. Only "y" or "yes" proceeds.
fn confirm_clear() -> Result<bool> {
    print!("Clear all tasks and saved time? This cannot be undone. [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn run_tui(app: &mut AppState, config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("exiting");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &AppConfig,
) -> Result<()> {
    let mut ticker = Ticker::new(TICK_INTERVAL);
    let poll_interval = config.poll_interval();

    loop {
        ticker.sync(app.engine.is_running(), Instant::now());

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for a key, but no longer than the next tick
        if event::poll(ticker.timeout(Instant::now(), poll_interval))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        // A key may have paused, finished or started a countdown
        ticker.sync(app.engine.is_running(), Instant::now());

        // Tick timers
        for _ in 0..ticker.due_ticks(Instant::now()) {
            app.tick();
            if !app.engine.is_running() {
                break;
            }
        }
    }
}
