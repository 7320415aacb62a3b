//! Command-line front end: self-play / random-opponent matches and single
//! position analysis.

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use uttt_bot::game::game_state::DEFAULT_TIME_PER_MOVE;
use uttt_bot::logging::setup_logging;
use uttt_bot::strategy::position_evaluation::evaluate_position;
use uttt_bot::{Decision, GameState, MCTSHyperparameters, Player, UtttBot};

#[derive(Parser, Debug)]
#[command(
    name = "uttt_bot",
    version,
    about = "Ultimate Tic-Tac-Toe bot: heuristics backed by UCT Monte Carlo Tree Search"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// JSON file with MCTS hyperparameters (missing fields keep their defaults)
    #[arg(long)]
    hyperparameters: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a series of games and print a summary
    Play {
        /// Number of games to play
        #[arg(short = 'g', long, default_value_t = 10)]
        games: usize,

        /// Base seed; every bot and random player derives its own seed from it
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Time per move handed to the bot
        #[arg(short, long, default_value_t = DEFAULT_TIME_PER_MOVE)]
        time_per_move: u32,

        /// Who the engine plays against
        #[arg(long, value_enum, default_value = "random")]
        opponent: OpponentKind,
    },
    /// Decide a move for a position stored in a text file
    Analyze {
        /// Position file (nine board rows followed by directives)
        file: PathBuf,

        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Override the position's time per move
        #[arg(short, long)]
        time_per_move: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OpponentKind {
    /// The engine on both sides
    #[value(name = "self")]
    SelfPlay,
    /// Uniformly random legal moves
    Random,
}

#[derive(Debug, Serialize)]
struct GameRecord {
    game: usize,
    /// Side played by the engine against a random opponent; `None` in self-play
    engine: Option<Player>,
    winner: Option<Player>,
    moves: u32,
}

#[derive(Debug, Default, Serialize)]
struct MatchSummary {
    games: usize,
    wins: usize,
    draws: usize,
    losses: usize,
    x_wins: usize,
    o_wins: usize,
    stages: BTreeMap<String, usize>,
    records: Vec<GameRecord>,
}

impl MatchSummary {
    fn add(&mut self, record: GameRecord) {
        self.games += 1;
        match record.winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => {}
        }
        if let Some(engine) = record.engine {
            match record.winner {
                Some(winner) if winner == engine => self.wins += 1,
                Some(_) => self.losses += 1,
                None => self.draws += 1,
            }
        } else if record.winner.is_none() {
            self.draws += 1;
        }
        self.records.push(record);
    }

    fn count_stage(&mut self, decision: &Decision) {
        *self.stages.entry(decision.stage.to_string()).or_default() += 1;
    }
}

fn seat(player: Player) -> usize {
    match player {
        Player::X => 0,
        Player::O => 1,
    }
}

fn play_game(
    game: usize,
    seed: u64,
    time_per_move: u32,
    opponent: OpponentKind,
    params: &MCTSHyperparameters,
    summary: &mut MatchSummary,
) -> GameRecord {
    let game_seed = seed.wrapping_add(game as u64 * 3);
    let engine = match opponent {
        OpponentKind::SelfPlay => None,
        OpponentKind::Random if game % 2 == 0 => Some(Player::X),
        OpponentKind::Random => Some(Player::O),
    };

    let mut state = GameState::new(time_per_move);
    let mut bots: [Option<UtttBot>; 2] = [None, None];
    let mut random = StdRng::seed_from_u64(game_seed.wrapping_add(2));

    while !state.is_terminal() {
        let player = state.current_player();
        let chosen = if engine.is_none_or(|side| side == player) {
            let bot = bots[seat(player)].get_or_insert_with(|| {
                UtttBot::from_seed(&state, game_seed.wrapping_add(seat(player) as u64))
                    .with_hyperparameters(params.clone())
            });
            bot.decide(&state).map(|decision| {
                summary.count_stage(&decision);
                decision.chosen
            })
        } else {
            state.legal_moves().choose(&mut random).copied()
        };

        let Some(mv) = chosen else {
            break;
        };
        state.apply_move(mv);
    }

    let record = GameRecord {
        game,
        engine,
        winner: state.winner(),
        moves: state.move_number(),
    };
    log::info!(
        "game {}: winner {} after {} moves",
        game,
        record
            .winner
            .map_or_else(|| "none".to_string(), |p| p.to_string()),
        record.moves
    );
    record
}

fn run_play(
    games: usize,
    seed: u64,
    time_per_move: u32,
    opponent: OpponentKind,
    params: &MCTSHyperparameters,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    log::info!("🎮 Ultimate Tic-Tac-Toe match");
    log::info!("Games: {}", games);
    log::info!("Opponent: {:?}", opponent);
    log::info!("Time per move: {}", time_per_move);
    log::info!("Hyperparameters: {}", params.to_config_string());

    let mut summary = MatchSummary::default();
    for game in 0..games {
        let record = play_game(game, seed, time_per_move, opponent, params, &mut summary);
        summary.add(record);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("games: {}", summary.games);
        match opponent {
            OpponentKind::Random => println!(
                "engine: {} wins, {} draws, {} losses",
                summary.wins, summary.draws, summary.losses
            ),
            OpponentKind::SelfPlay => println!(
                "X: {} wins, O: {} wins, {} draws",
                summary.x_wins, summary.o_wins, summary.draws
            ),
        }
        for (stage, count) in &summary.stages {
            println!("  {stage:<16} {count}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Analysis<'a> {
    to_move: Player,
    evaluation: i32,
    decision: Option<&'a Decision>,
}

fn run_analyze(
    file: PathBuf,
    seed: u64,
    time_per_move: Option<u32>,
    params: &MCTSHyperparameters,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(&file)?;
    let mut state = text
        .parse::<GameState>()
        .map_err(uttt_bot::UtttError::from)?;
    if let Some(time) = time_per_move {
        state.set_time_per_move(time);
    }

    let to_move = state.current_player();
    let evaluation = evaluate_position(&state, to_move);
    let mut bot = UtttBot::from_seed(&state, seed).with_hyperparameters(params.clone());
    let decision = bot.decide(&state);

    if json {
        let analysis = Analysis {
            to_move,
            evaluation,
            decision: decision.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{state}");
    println!();
    println!("to move:    {to_move}");
    println!("evaluation: {evaluation}");
    match decision {
        Some(decision) => {
            println!("decision:   {} ({})", decision.chosen, decision.stage);
            if let Some(search) = &decision.search {
                println!(
                    "search:     {} simulations, {} nodes",
                    search.simulations_run, search.tree_size
                );
                for stats in &search.children {
                    println!(
                        "  {:<8} visits {:>4}  avg {:.3}",
                        stats.mv.to_string(),
                        stats.visits,
                        stats.average_score
                    );
                }
            }
        }
        None => println!("decision:   none (no legal move)"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_level, cli.log_dir.as_deref())?;

    let params = match &cli.hyperparameters {
        Some(path) => MCTSHyperparameters::from_json_file(path)?,
        None => MCTSHyperparameters::default(),
    };

    match cli.command {
        Command::Play {
            games,
            seed,
            time_per_move,
            opponent,
        } => run_play(games, seed, time_per_move, opponent, &params, cli.json),
        Command::Analyze {
            file,
            seed,
            time_per_move,
        } => run_analyze(file, seed, time_per_move, &params, cli.json),
    }
}
