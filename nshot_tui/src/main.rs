//! nshot - casts-to-kill simulator in the terminal

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nshot_core::{default_catalog, load_catalog_dir, Catalog, SimulationConstants, Simulator};
use nshot_tui::{default_inputs_path, logging, report, ui, App, Inputs};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Estimate how many casts it takes to kill a monster
#[derive(Parser, Debug)]
#[command(name = "nshot")]
#[command(about = "Monte Carlo casts-to-kill calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Fights per batch (defaults to the constants file)
    #[arg(long)]
    trials: Option<u32>,

    /// Base seed for reproducible batches
    #[arg(long)]
    seed: Option<u64>,

    /// Directory with jobs.toml, monsters.toml and skills.toml
    #[arg(long, value_name = "DIR")]
    catalog: Option<PathBuf>,

    /// Simulation constants TOML file
    #[arg(long, value_name = "FILE")]
    constants: Option<PathBuf>,

    /// Saved inputs JSON file (defaults to the user data dir)
    #[arg(long, value_name = "FILE")]
    inputs: Option<PathBuf>,

    /// Run one batch from the saved inputs and print the histogram
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.headless {
        logging::init_stderr_logging()?;
    } else {
        logging::init_file_logging()?;
    }

    let catalog = match &cli.catalog {
        Some(dir) => load_catalog_dir(dir)
            .with_context(|| format!("loading catalog from {}", dir.display()))?,
        None => default_catalog().context("loading built-in catalog")?,
    };
    let constants = match &cli.constants {
        Some(path) => SimulationConstants::load(path)
            .with_context(|| format!("loading constants from {}", path.display()))?,
        None => SimulationConstants::builtin().context("loading built-in constants")?,
    };
    let trial_count = cli.trials.unwrap_or(constants.trial_count);

    let mut simulator = Simulator::new(constants);
    if let Some(seed) = cli.seed {
        simulator = simulator.with_seed(seed);
    }

    let inputs_path = cli.inputs.clone().or_else(default_inputs_path);
    let inputs = inputs_path
        .as_deref()
        .map(Inputs::load)
        .unwrap_or_default();

    tracing::info!(
        jobs = catalog.jobs.len(),
        monsters = catalog.monsters.len(),
        trial_count,
        "Starting nshot"
    );

    if cli.headless {
        run_headless(&catalog, inputs, &simulator, trial_count)
    } else {
        run_tui(App::new(catalog, inputs, simulator, trial_count, inputs_path))
    }
}

fn run_headless(catalog: &Catalog, mut inputs: Inputs, simulator: &Simulator, trial_count: u32) -> Result<()> {
    inputs.normalize(catalog);
    let prepared = inputs.prepare(catalog)?;
    let result = simulator.run(&prepared.request(trial_count))?;

    println!("{}", report::describe(&prepared, trial_count));
    print!("{}", report::render(&result));
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Char('4'), _) | (KeyCode::Char('?'), _) => app.set_tab(3),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.adjust(-1),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.adjust(1),
            (KeyCode::Char('-'), _) => app.adjust(-10),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.adjust(10),
            (KeyCode::PageDown, _) => app.adjust(-100),
            (KeyCode::PageUp, _) => app.adjust(100),
            (KeyCode::Enter, _) => app.run_simulation(),
            (KeyCode::Char('s'), _) => app.save_inputs(),
            (KeyCode::Char('r'), _) => app.reset_inputs(),
            _ => {}
        }
    }

    app.save_inputs();
    Ok(())
}
