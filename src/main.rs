use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, error, info};

use toroidal_life::{ConfigError, Grid, SimConfig};

#[derive(Parser)]
#[command(name = "toroidal-life")]
#[command(version)]
#[command(about = "Headless Conway's Game of Life on a wrapping grid", long_about = None)]
struct Cli {
    /// TOML config file (defaults to <config dir>/toroidal-life/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    cols: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    rows: Option<usize>,

    /// Probability that a cell starts alive (0.0-1.0)
    #[arg(short = 'p', long)]
    live_probability: Option<f64>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generations per second
    #[arg(short, long)]
    fps: Option<u32>,

    /// Worker threads (0 = one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Stop after this many generations (0 = run forever)
    #[arg(short, long, default_value = "0")]
    generations: u64,
}

impl Cli {
    fn load_config(&self) -> Result<SimConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::load_default()?,
        };

        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(p) = self.live_probability {
            config.live_probability = p;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let config = cli.load_config()?;
    let mut grid = Grid::from_config(&config)?;

    let (cols, rows) = grid.dimensions();
    info!(
        "{}x{} grid, {} alive, {} fps, {} workers",
        cols,
        rows,
        grid.population(),
        config.fps,
        grid.num_threads()
    );

    let frame = Duration::from_secs_f64(1.0 / config.fps as f64);
    while cli.generations == 0 || grid.generation() < cli.generations {
        let started = Instant::now();

        grid.advance();
        debug!(
            "generation {}: {} alive",
            grid.generation(),
            grid.population()
        );

        // Sleep off whatever is left of this frame
        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    info!(
        "stopped after {} generations, {} alive",
        grid.generation(),
        grid.population()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
