#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use bounded_life::{App, Config, GenerationEngine, Settings};
use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

/// Conway's Game of Life on a finite grid whose edges do not wrap.
#[derive(Debug, Parser)]
#[command(name = "bounded_life", version)]
struct Args {
    /// Number of rows in the grid
    #[arg(long, default_value_t = Config::DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns in the grid
    #[arg(long, default_value_t = Config::DEFAULT_COLUMNS)]
    columns: usize,

    /// Side of one cell on screen, in pixels
    #[arg(long, default_value_t = Config::SQUARE_SIZE)]
    square_size: f32,

    /// Redraw frames (at 60 Hz) per generation
    #[arg(long, default_value_t = Config::FRAMES_PER_STEP)]
    frames_per_step: u32,

    /// Start from random cells, each alive with this probability
    #[arg(long, value_name = "FILL_RATE", conflicts_with = "cells")]
    random: Option<f64>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print this many generations to stdout instead of opening a window
    #[arg(long, value_name = "STEPS")]
    headless: Option<u64>,

    /// Initial alive cells: row1 column1 row2 column2 ...
    #[arg(value_name = "CELLS", allow_negative_numbers = true)]
    cells: Vec<i64>,
}

fn build_engine(args: &Args, out: &mut impl Write) -> Result<Option<GenerationEngine>> {
    let result = match args.random {
        Some(fill_rate) => GenerationEngine::random(args.rows, args.columns, args.seed, fill_rate),
        None => GenerationEngine::from_flat(args.rows, args.columns, &args.cells),
    };
    match result {
        Ok(life) => Ok(Some(life)),
        Err(err) if err.is_invalid_input() => {
            error!("{}", err);
            report_valid_ranges(out, args.rows, args.columns)?;
            Ok(None)
        }
        Err(err) => Err(err).context("failed to create the field"),
    }
}

fn report_valid_ranges(out: &mut impl Write, rows: usize, columns: usize) -> io::Result<()> {
    writeln!(out, "The input is invalid!")?;
    writeln!(
        out,
        "The row of a cell should be between 0 and {}.",
        rows.saturating_sub(1)
    )?;
    writeln!(
        out,
        "The column of a cell should be between 0 and {}.",
        columns.saturating_sub(1)
    )?;
    out.flush()
}

/// Prints the first `steps + 1` generations, separated by blank lines.
fn run_headless(mut life: GenerationEngine, steps: u64, out: &mut impl Write) -> Result<()> {
    for generation in 0..=steps {
        if generation != 0 {
            life.advance();
            writeln!(out)?;
        }
        write!(out, "{}", life.current_grid())?;
    }
    out.flush()?;
    Ok(())
}

fn run_window(life: GenerationEngine, settings: Settings) -> Result<()> {
    use eframe::egui::ViewportBuilder;

    let app = App::new(life, settings);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(app.window_size())
            .with_resizable(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("window closed with an error: {}", err))
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut out = io::stdout().lock();
    let Some(life) = build_engine(&args, &mut out)? else {
        return Ok(ExitCode::FAILURE);
    };

    match args.headless {
        Some(steps) => {
            info!("running {} generations headless", steps);
            run_headless(life, steps, &mut out)?;
        }
        None => {
            drop(out);
            let settings = Settings {
                square_size: args.square_size,
                frames_per_step: args.frames_per_step,
            };
            run_window(life, settings)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::{build_engine, run_headless, Args};
    use clap::Parser;

    fn parse(cmdline: &[&str]) -> Args {
        let argv = std::iter::once("bounded_life").chain(cmdline.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    fn build(cmdline: &[&str]) -> (bool, String) {
        let mut out = Vec::new();
        let life = build_engine(&parse(cmdline), &mut out).unwrap();
        (life.is_some(), String::from_utf8(out).unwrap())
    }

    const REPORT_3X4: &str = "The input is invalid!\n\
        The row of a cell should be between 0 and 2.\n\
        The column of a cell should be between 0 and 3.\n";

    #[test]
    fn test_odd_length_input_is_reported() {
        let (built, report) = build(&["--rows", "3", "--columns", "4", "1", "1", "2"]);
        assert!(!built);
        assert_eq!(report, REPORT_3X4);
    }

    #[test]
    fn test_negative_input_is_reported() {
        let (built, report) = build(&["--rows", "3", "--columns", "4", "1", "-1"]);
        assert!(!built);
        assert_eq!(report, REPORT_3X4);
    }

    #[test]
    fn test_out_of_range_input_is_reported() {
        let (built, report) = build(&["--rows", "3", "--columns", "4", "0", "0", "3", "0"]);
        assert!(!built);
        assert_eq!(report, REPORT_3X4);
    }

    #[test]
    fn test_valid_input_prints_nothing() {
        let (built, report) = build(&["--rows", "3", "--columns", "4", "0", "0", "2", "3"]);
        assert!(built);
        assert!(report.is_empty());
    }

    #[test]
    fn test_bad_dimensions_and_fill_rate_are_errors() {
        let mut out = Vec::new();
        assert!(build_engine(&parse(&["--rows", "0", "1", "1"]), &mut out).is_err());
        assert!(build_engine(&parse(&["--random", "1.5"]), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_headless_blinker() {
        let mut out = Vec::new();
        let life = build_engine(
            &parse(&["--rows", "3", "--columns", "3", "1", "0", "1", "1", "1", "2"]),
            &mut out,
        )
        .unwrap()
        .unwrap();
        run_headless(life, 1, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "...\n###\n...\n\n.#.\n.#.\n.#.\n"
        );
    }
}
