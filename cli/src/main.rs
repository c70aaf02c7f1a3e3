use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;
use sweeper::{Command, Config, LayoutDump, Session, render_board, render_status};
use sweeper_core::{
    Board, Coord, Difficulty, MinefieldGenerator, RandomMinefieldGenerator, format_elapsed,
    in_bounds, parse_seed_input, random_seed,
};
use sweeper_scores::{ScoreEntry, ScoreLedger};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with default board and score settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Score file to use instead of ~/.minesweeper/scores.txt
    #[arg(long, global = true)]
    scores_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Subcommands,
}

#[derive(Subcommand, Debug)]
enum Subcommands {
    /// Place mines for a first click and print the layout
    Layout {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long)]
        row: Coord,

        #[arg(long)]
        col: Coord,

        /// Print JSON instead of a text grid
        #[arg(long)]
        json: bool,
    },
    /// Play a scripted game, e.g. `sweeper play --seed 42 "r 4 4" "f 0 1"`
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Record a winning time under this name
        #[arg(long)]
        name: Option<String>,

        /// Moves: `r ROW COL`, `f ROW COL`, `c ROW COL`, `reset`, `seed N`, `difficulty NAME`
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,
    },
    /// Inspect or edit the high-score ledger
    Scores {
        #[command(subcommand)]
        action: ScoresAction,
    },
}

#[derive(Subcommand, Debug)]
enum ScoresAction {
    /// Show the kept times, grouped by difficulty
    List {
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Tell whether a time would make the board
    Check { secs: u64, difficulty: String },
    /// Add a time to the board
    Add {
        name: String,
        secs: u64,
        difficulty: String,
    },
}

#[derive(Args, Debug)]
struct BoardArgs {
    /// easy, medium or hard
    #[arg(short, long, conflicts_with_all = ["height", "width", "mines"])]
    difficulty: Option<String>,

    /// Custom board height
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<usize>,

    /// Custom board width
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<usize>,

    /// Custom board mine count
    #[arg(long, requires_all = ["height", "width"])]
    mines: Option<usize>,

    /// Force a seed instead of random; negative means random
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<String>,
}

impl BoardArgs {
    /// Flags first, then the config file, then the Easy preset.
    fn difficulty(&self, config: &Config) -> Result<Difficulty> {
        if let (Some(height), Some(width), Some(mines)) = (self.height, self.width, self.mines) {
            return Ok(Difficulty::custom(height, width, mines));
        }
        if let Some(name) = &self.difficulty {
            return name
                .parse()
                .with_context(|| format!("unknown difficulty {name:?}"));
        }
        Ok(config.difficulty()?.unwrap_or_default())
    }

    fn seed(&self, config: &Config) -> Option<u64> {
        match &self.seed {
            Some(input) => parse_seed_input(input),
            None => config.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path).context("could not load configuration")?,
        None => Config::default(),
    };
    let scores_path = cli.scores_file.clone().or_else(|| config.scores.path.clone());
    let open_ledger = || match &scores_path {
        Some(path) => ScoreLedger::open(path),
        None => ScoreLedger::open_default(),
    };

    match cli.command {
        Subcommands::Layout {
            board,
            row,
            col,
            json,
        } => layout(&board, &config, (row, col), json),
        Subcommands::Play { board, name, moves } => {
            play(&board, &config, open_ledger(), name, &moves)
        }
        Subcommands::Scores { action } => scores(open_ledger(), action),
    }
}

fn layout(args: &BoardArgs, config: &Config, first_click: (Coord, Coord), json: bool) -> Result<()> {
    let board_config = args.difficulty(config)?.config();
    if !in_bounds(first_click, board_config.size) {
        bail!(
            "first click {:?} is outside the {}x{} board",
            first_click,
            board_config.height(),
            board_config.width()
        );
    }

    let seed = args.seed(config).unwrap_or_else(random_seed);
    let layout = RandomMinefieldGenerator::new(seed, first_click).generate(board_config);
    let dump = LayoutDump::new(seed, first_click, &layout);

    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        println!("seed {seed}, {} mines", dump.mines);
        print!("{}", dump.render_text(&layout));
    }
    Ok(())
}

fn play(
    args: &BoardArgs,
    config: &Config,
    ledger: ScoreLedger,
    name: Option<String>,
    moves: &[String],
) -> Result<()> {
    let board = Board::with_seed(args.difficulty(config)?, args.seed(config));
    let mut session = Session::new(board, ledger);

    for (i, input) in moves.iter().enumerate() {
        let command: Command = input
            .parse()
            .with_context(|| format!("move {} ({input:?})", i + 1))?;
        let event = session.apply(command);
        if event.has_update() {
            log::info!("{input:?} -> {event:?}");
        } else {
            log::info!("{input:?} changed nothing");
        }
        if event.is_game_over() && i + 1 < moves.len() {
            log::warn!("Game over after move {}, later moves are ignored", i + 1);
        }
    }

    print!("{}", render_board(session.board()));
    println!("{}", render_status(session.board()));

    if session.qualifies_for_high_score() {
        match name {
            Some(name) => match session.record_score(&name) {
                Some(rank) => println!("High score! {name} is #{rank} on {}", session.board().difficulty()),
                None => println!("Time did not make the board"),
            },
            None => println!("High score! Pass --name to record it"),
        }
    }
    Ok(())
}

fn scores(mut ledger: ScoreLedger, action: ScoresAction) -> Result<()> {
    match action {
        ScoresAction::List { difficulty } => {
            let labels: Vec<String> = match difficulty {
                Some(label) => vec![label],
                None => ledger.difficulties().map(str::to_owned).collect(),
            };
            if labels.is_empty() {
                println!("No scores yet");
            }
            for label in labels {
                println!("{label}");
                for (rank, entry) in ledger.scores_by_difficulty(&label).iter().enumerate() {
                    println!(
                        "{:>3}. {:<20} {}",
                        rank + 1,
                        entry.player_name,
                        format_elapsed(entry.elapsed_secs)
                    );
                }
            }
        }
        ScoresAction::Check { secs, difficulty } => {
            if ledger.is_high_score(secs, &difficulty) {
                println!("{secs}s would make the {difficulty} board");
            } else {
                println!("{secs}s would not make the {difficulty} board");
            }
        }
        ScoresAction::Add {
            name,
            secs,
            difficulty,
        } => {
            let rank = ledger.insert_score(ScoreEntry::new(&name, secs, &difficulty));
            ledger
                .try_save()
                .context("could not write the score file")?;
            match rank {
                Some(rank) => println!("{name} is #{rank} on {difficulty}"),
                None => println!("{secs}s did not make the {difficulty} board"),
            }
        }
    }
    Ok(())
}
