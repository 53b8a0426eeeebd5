use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gosgf::{to_board_coordinates, to_screen_coordinates};
use gosgf_store::StoreConfig;
use tracing::{debug, error, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a store config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the database file. Takes precedence over the config file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a finished game and print its id
    Add {
        #[arg(long)]
        black: String,
        #[arg(long)]
        white: String,
        #[arg(long)]
        date: String,
        /// The serialized move list
        #[arg(long, default_value = "")]
        moves: String,
        #[arg(long)]
        result: String,
    },
    /// Print all stored games
    List {
        /// Print the games as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Convert a pixel position into board coordinates
    ToBoard {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Number of cells per side
        board_size: i32,
    },
    /// Convert board coordinates into a pixel position
    ToScreen {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Pixel size of one cell
        board_size: i32,
    },
}

fn main() {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if let Err(err) = run(args) {
        for cause in err.chain() {
            error!("{}", cause);
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    debug!(?config);

    match args.command {
        Command::Add {
            black,
            white,
            date,
            moves,
            result,
        } => {
            let store = config.open_store()?;
            let id = store.add_game_record(&black, &white, &date, &moves, &result)?;
            info!(id, "Game stored");
            println!("{}", id);
        }
        Command::List { json } => {
            let store = config.open_store()?;
            let games = store.get_all_games()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&games)?);
            } else {
                for game in &games {
                    println!(
                        "#{:<5} {} | {} (black) vs {} (white) | {}",
                        game.id, game.date, game.player_black, game.player_white, game.game_result
                    );
                }
                eprintln!("{} games", games.len());
            }
        }
        Command::ToBoard { x, y, board_size } => {
            let (cell_x, cell_y) = to_board_coordinates(x, y, board_size)?;
            println!("{} {}", cell_x, cell_y);
        }
        Command::ToScreen { x, y, board_size } => {
            let (screen_x, screen_y) = to_screen_coordinates(x, y, board_size)?;
            println!("{} {}", screen_x, screen_y);
        }
    }
    Ok(())
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
