use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minefield_core::{Board, BoardConfig, BoardGenerator, RandomBoardGenerator, Sampling};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for BoardConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => BoardConfig::beginner(),
            Preset::Intermediate => BoardConfig::intermediate(),
            Preset::Expert => BoardConfig::expert(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum Strategy {
    #[default]
    Rejection,
    Shuffle,
}

impl From<Strategy> for Sampling {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Rejection => Sampling::Rejection,
            Strategy::Shuffle => Sampling::Shuffle,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum Format {
    /// One line per row: `X` mine, digit for numbers, `N` empty
    #[default]
    Text,
    Json,
}

/// Generate a minesweeper board and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Start from a preset instead of the 10x10 board with 10 mines
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// Board width, overrides the preset
    #[arg(long)]
    width: Option<u8>,

    /// Board height, overrides the preset
    #[arg(long)]
    height: Option<u8>,

    /// Number of mines, overrides the preset
    #[arg(short, long)]
    mines: Option<u16>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How mine positions are drawn
    #[arg(long, value_enum, default_value_t)]
    sampling: Strategy,

    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl Args {
    fn board_config(&self) -> Result<BoardConfig> {
        let base = self.preset.map(BoardConfig::from).unwrap_or_default();
        let size = (
            self.width.unwrap_or(base.width()),
            self.height.unwrap_or(base.height()),
        );
        let mines = self.mines.unwrap_or(base.mines());
        BoardConfig::new(size, mines).with_context(|| {
            format!("Cannot build a {}x{} board with {} mines", size.0, size.1, mines)
        })
    }
}

fn render(board: &Board, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => board.to_string(),
        Format::Json => {
            serde_json::to_string_pretty(board).context("Could not serialize board")? + "\n"
        }
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.board_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let board = RandomBoardGenerator::from_seed(seed, args.sampling.into()).generate(config);
    print!("{}", render(&board, args.format)?);
    Ok(())
}
