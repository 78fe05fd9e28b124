use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use connect_x::config::AppConfig;
use connect_x::game::GameSession;
use connect_x::logging;
use connect_x::record::{replay, GameRecord};
use connect_x::ui::App;

/// Play Connect X: Connect Four on any board, for any number of players.
#[derive(Parser)]
#[command(name = "connect_x", about = "Generalized Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_x.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override how many chips in a row win
    #[arg(long)]
    in_a_row: Option<usize>,

    /// Play with this many default players instead of the configured ones
    #[arg(long)]
    players: Option<usize>,

    /// Log level, unless RUST_LOG is set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the only way to get logs while playing)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Replay an ASCII game record and report when it is won or tied
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // The terminal belongs to the game unless logs go to a file
    if cli.replay.is_some() || cli.log_file.is_some() {
        logging::init(&cli.log_level, cli.log_file.as_deref())?;
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    if let Some(columns) = cli.columns {
        app_config.game.columns = columns;
    }
    if let Some(in_a_row) = cli.in_a_row {
        app_config.game.in_a_row = in_a_row;
    }
    if let Some(players) = cli.players {
        if players > app_config.limits.max_players {
            bail!(
                "at most {} players can play, {players} requested",
                app_config.limits.max_players
            );
        }
        app_config.game.use_default_players(players);
    }

    match &cli.replay {
        Some(path) => run_replay(&app_config, path),
        None => {
            let session = GameSession::from_config(&app_config).context("invalid game settings")?;
            info!(
                rows = app_config.game.rows,
                columns = app_config.game.columns,
                in_a_row = app_config.game.in_a_row,
                players = app_config.game.players.len(),
                "starting game"
            );
            run_tui(session).context("terminal UI failed")
        }
    }
}

/// Replay a record with the configured K and players, printing the verdicts.
fn run_replay(config: &AppConfig, path: &Path) -> Result<()> {
    config.validate().context("invalid game settings")?;

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading game record {}", path.display()))?;
    let record =
        GameRecord::parse(&text).with_context(|| format!("parsing game record {}", path.display()))?;
    config
        .limits
        .board()
        .check(record.rows(), record.columns())
        .context("record board does not fit the configured limits")?;
    record
        .check_in_a_row(config.game.in_a_row)
        .context("in-a-row value does not fit the record board")?;

    let players = config.game.players();
    let report = replay(&record, config.game.in_a_row, &players, &config.limits.board());

    println!(
        "{} moves on a {}x{} board, {} in a row, {} players",
        report.verdicts.len(),
        record.rows(),
        record.columns(),
        config.game.in_a_row,
        players.len()
    );
    match report.first_win {
        Some(number) => {
            let winner = &players[(number - 1) % players.len()];
            println!("won by {} at move {number}", winner.name());
        }
        None => println!("no win"),
    }
    match report.first_tie {
        Some(number) => println!("tie detected at move {number}"),
        None => println!("no tie detected"),
    }

    if let Some(expected) = record.expected_win().filter(|&n| report.first_win != Some(n)) {
        bail!("record expects a win at move {expected}");
    }
    if let Some(expected) = record.expected_tie().filter(|&n| report.first_tie != Some(n)) {
        bail!("record expects a tie at move {expected}");
    }
    Ok(())
}

fn run_tui(session: GameSession) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
