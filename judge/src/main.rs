use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use judge::{play_matchup, Contestant, MatchScore, Recorder, Setup, SetupConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use three_trios::ValueTransform;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Names of the strategies to pit against each other, e.g. "most-flipped",
    /// "corners", "least-chance", "minimax-corners" or "corners+least-chance"
    #[clap(num_args(2..), value_delimiter = ' ')]
    strategies: Vec<String>,

    /// How many games to play per matchup
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON file with the grid and the cards. A small built-in
    /// setup is used if this is not given
    #[arg(long)]
    setup: Option<PathBuf>,

    /// Rule variants to apply to every game, in the given order
    #[arg(long, value_enum)]
    variant: Vec<Variant>,

    /// Stop a matchup as soon as one strategy makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record the games' events as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// Low values beat high values
    Reverse,
    /// A 1 beats an A
    FallenAce,
}

impl From<Variant> for ValueTransform {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Reverse => ValueTransform::Reverse,
            Variant::FallenAce => ValueTransform::FallenAce,
        }
    }
}

fn print_match_score(contestant_1: &Contestant, contestant_2: &Contestant, score: &MatchScore) {
    let paren = |idx: usize| {
        if score.illegal_moves[1 - idx] > 0 {
            format!(
                " ({} through illegal moves by the other side)",
                score.illegal_moves[1 - idx]
            )
        } else {
            String::new()
        }
    };
    eprintln!(
        "End result:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} ties",
        score.wins[0],
        contestant_1.name,
        paren(0),
        score.wins[1],
        contestant_2.name,
        paren(1),
        score.ties
    );
}

// prints an upper triangular matrix of the results of the tournament
fn print_tournament_results(
    contestants: &[Contestant],
    match_results: &[(usize, usize, MatchScore)],
) {
    let score_of = |i, j| {
        match_results
            .iter()
            .find(|(i1, i2, _)| (*i1, *i2) == (i, j))
            .map(|(_, _, score)| score)
    };
    println!("\nTournament results (p1 win %, p2 win %, tie %):\n");
    print!(" {:19} |", "p1 ↓           p2 →");
    for j in (0..contestants.len()).rev() {
        print!(" {:19} |", contestants[j].name);
    }
    println!();
    for i in 0..contestants.len() {
        for _ in 0..contestants.len() - i + 1 {
            print!("---------------------|");
        }
        println!();
        print!(" {:19} |", contestants[i].name);
        for j in (0..contestants.len()).rev() {
            if i >= j {
                print!("    ");
            } else if let Some(score) = score_of(i, j) {
                let num_games = score.num_games().max(1) as f32;
                print!(
                    "{:5.1}% {:5.1}% {:5.1}% |",
                    score.wins[0] as f32 / num_games * 100.0,
                    score.wins[1] as f32 / num_games * 100.0,
                    score.ties as f32 / num_games * 100.0
                );
            } else {
                print!(" {:19} |", "N/A");
            }
        }
        println!();
    }
    println!("---------------------|");
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let config = match &args.setup {
        Some(path) => SetupConfig::load(path)?,
        None => SetupConfig::default(),
    };
    let variants = args
        .variant
        .iter()
        .copied()
        .map(ValueTransform::from)
        .collect();
    let setup = Setup::new(&config, variants)?;
    info!(
        width = setup.grid.width(),
        height = setup.grid.height(),
        cards = setup.cards.len(),
        "Loaded setup"
    );

    let contestants = args
        .strategies
        .iter()
        .map(|name| Contestant::new(name))
        .collect::<Result<Vec<Contestant>, _>>()?;

    let mut match_results = Vec::new();
    for i1 in 0..contestants.len() {
        for i2 in i1 + 1..contestants.len() {
            info!(
                player_1 = contestants[i1].name,
                player_2 = contestants[i2].name,
                "Starting matchup"
            );
            let match_score = play_matchup(
                &mut rng,
                &contestants[i1],
                &contestants[i2],
                &setup,
                args.num_games,
                args.stop_on_illegal_move,
                &mut recorder,
            )?;
            print_match_score(&contestants[i1], &contestants[i2], &match_score);
            match_results.push((i1, i2, match_score));
        }
    }

    if contestants.len() > 2 {
        print_tournament_results(&contestants, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
