use std::collections::BTreeMap;
use std::path::PathBuf;

use autoplay::{play_game, GameOutcome, GameSummary, StrategyKind};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use twenty48::{Board, GameConfig, RareTileValue};

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How to pick moves
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    strategy: StrategyKind,

    /// Path to a JSON game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board size, overrides the config file
    #[arg(long)]
    size: Option<usize>,

    /// Value of the rare spawned tile, overrides the config file (default: the board size)
    #[arg(long)]
    rare_tile: Option<u32>,

    /// Give up on a game after this many move requests
    #[arg(long)]
    max_moves: Option<usize>,

    /// Print one JSON summary per game to stdout
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(value) = args.rare_tile {
        config.spawn.rare_value = RareTileValue::Fixed(value);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = load_config(&args)?;
    debug!(?config);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut strategy = args.strategy.build(StdRng::seed_from_u64(rng.gen()));
    let mut board = Board::new(config, StdRng::seed_from_u64(rng.gen()))?;

    let mut summaries = Vec::with_capacity(args.num_games);
    for game_idx in 0..args.num_games {
        if game_idx > 0 {
            board.init();
        }
        let summary = play_game(&mut board, strategy.as_mut(), args.max_moves);
        debug!(game_idx, moves = summary.moves, max_tile = summary.max_tile);
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        }
        summaries.push(summary);
    }

    print_results(&summaries);
    Ok(())
}

fn print_results(summaries: &[GameSummary]) {
    if summaries.is_empty() {
        return;
    }
    let cut_off = summaries
        .iter()
        .filter(|s| s.outcome == GameOutcome::MoveLimit)
        .count();
    let total_moves: usize = summaries.iter().map(|s| s.moves).sum();
    let mut max_tiles: BTreeMap<u32, usize> = BTreeMap::new();
    for summary in summaries {
        *max_tiles.entry(summary.max_tile).or_default() += 1;
    }

    eprintln!(
        "End result after {} games ({} cut off by the move limit):\n- {:.1} moves per game",
        summaries.len(),
        cut_off,
        total_moves as f32 / summaries.len() as f32
    );
    for (tile, count) in max_tiles.iter().rev() {
        eprintln!(
            "- {:>6} reached as highest tile in {:5.1}% of games",
            tile,
            *count as f32 / summaries.len() as f32 * 100.0
        );
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
