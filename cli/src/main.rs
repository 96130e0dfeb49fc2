use anyhow::Context;
use clap::Parser;
use minato_core::{CellCount, Difficulty};
use std::io::{self, BufRead, Write};

mod command;
mod game;
mod render;

use command::Command;
use game::{Game, Output};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board size: easy, medium or hard, anything else plays medium
    #[arg(short, long, default_value = "medium")]
    difficulty: String,

    /// Use this many mines instead of the preset
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Place mines after the first reveal, which is then always safe
    #[arg(short, long)]
    lazy_mines: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a JSON snapshot after every move instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("args: {:?}", args);

    let difficulty = Difficulty::from_name(&args.difficulty);
    let output = if args.json { Output::Json } else { Output::Board };
    let mut game = Game::new(difficulty, args.mines, args.lazy_mines, args.seed, output)
        .with_context(|| format!("Could not start a {difficulty} game"))?;

    let mut out = io::stdout().lock();
    game.notice(&mut out, format_args!("{}", command::HELP))?;
    game.draw(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if !game.apply(command, &mut out)? {
                    break;
                }
            }
            Err(err) => game.notice(&mut out, format_args!("{err}"))?,
        }
        out.flush()?;
    }

    log::debug!("Final high score: {}", game.session().high_score());
    Ok(())
}
