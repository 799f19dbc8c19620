//! CLI frontend for the Imposter party game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use imp_core::GameConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "imp",
    about = "Imposter — a pass-the-device party game",
    version,
    propagate_version = true
)]
struct Cli {
    /// File holding the saved player list
    #[arg(long, global = true, default_value = "imposter_last_players.json")]
    roster: PathBuf,

    /// JSON category catalog to use instead of the built-in one
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Players required to start a round
    #[arg(long, global = true, default_value = "3")]
    min_players: usize,

    /// Players the roster accepts at most
    #[arg(long, global = true, default_value = "12")]
    max_players: usize,

    /// Log transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the saved player list
    Players {
        #[command(subcommand)]
        action: PlayersAction,
    },

    /// Inspect and edit the category catalog
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },

    /// Play rounds at this terminal, passing it from player to player
    Play {
        /// RNG seed for reproducible rounds
        #[arg(short, long)]
        seed: Option<u64>,

        /// Play with these names instead of the saved list (repeatable)
        #[arg(short, long = "player")]
        players: Vec<String>,

        /// Enable only these category ids (repeatable)
        #[arg(long)]
        only: Vec<String>,

        /// Disable these category ids (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },
}

#[derive(Subcommand)]
enum PlayersAction {
    /// Show the saved players
    List,
    /// Add a player at the end of the list
    Add {
        /// Player name
        name: String,
    },
    /// Remove a player by list number
    Remove {
        /// Number shown by `players list` (starting at 1)
        number: usize,
    },
    /// Remove every player
    Clear,
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// Show categories with word counts
    List,
    /// Print the catalog as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show one category's words
    Show {
        /// Category id
        id: String,
    },
    /// Append a new, empty category
    Add {
        /// Name to give it instead of the placeholder
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete a category
    Remove {
        /// Category id
        id: String,
    },
    /// Change a category's name
    Rename {
        /// Category id
        id: String,
        /// New name
        name: String,
    },
    /// Enable or disable a category
    Toggle {
        /// Category id
        id: String,
    },
    /// Append one word
    AddWord {
        /// Category id
        id: String,
        /// Word to add
        word: String,
    },
    /// Append a comma separated list of words
    BulkAdd {
        /// Category id
        id: String,
        /// Words, e.g. "Owl, Fox, Bee"
        words: String,
    },
    /// Replace a word by number
    UpdateWord {
        /// Category id
        id: String,
        /// Number shown by `categories show` (starting at 1)
        number: usize,
        /// Replacement word
        word: String,
    },
    /// Delete a word by number
    RemoveWord {
        /// Category id
        id: String,
        /// Number shown by `categories show` (starting at 1)
        number: usize,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::default()
        .with_min_players(cli.min_players)
        .with_max_players(cli.max_players);
    let categories = cli.categories.as_deref();

    let result = match cli.command {
        Commands::Players { action } => match action {
            PlayersAction::List => commands::players::list(&cli.roster, &config),
            PlayersAction::Add { name } => commands::players::add(&cli.roster, &config, &name),
            PlayersAction::Remove { number } => {
                commands::players::remove(&cli.roster, &config, number)
            }
            PlayersAction::Clear => commands::players::clear(&cli.roster, &config),
        },
        Commands::Categories { action } => match action {
            CategoriesAction::List => commands::categories::list(categories),
            CategoriesAction::Export { output } => {
                commands::categories::export(categories, output.as_deref())
            }
            CategoriesAction::Show { id } => commands::categories::show(categories, &id),
            CategoriesAction::Add { name } => {
                commands::categories::add(categories, name.as_deref())
            }
            CategoriesAction::Remove { id } => commands::categories::remove(categories, &id),
            CategoriesAction::Rename { id, name } => {
                commands::categories::rename(categories, &id, &name)
            }
            CategoriesAction::Toggle { id } => commands::categories::toggle(categories, &id),
            CategoriesAction::AddWord { id, word } => {
                commands::categories::add_word(categories, &id, &word)
            }
            CategoriesAction::BulkAdd { id, words } => {
                commands::categories::bulk_add(categories, &id, &words)
            }
            CategoriesAction::UpdateWord { id, number, word } => {
                commands::categories::update_word(categories, &id, number, &word)
            }
            CategoriesAction::RemoveWord { id, number } => {
                commands::categories::remove_word(categories, &id, number)
            }
        },
        Commands::Play {
            seed,
            players,
            only,
            exclude,
        } => {
            let config = match seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            };
            let options = commands::play::PlayOptions {
                roster_path: &cli.roster,
                categories,
                players,
                only,
                exclude,
            };
            commands::play::run(&config, options)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
