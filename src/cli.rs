use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "game recommender")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DatasetArgs {
    /// Path to the games dataset (defaults to $GAME_DATASET_PATH or data/games.json)
    #[arg(short, long)]
    pub dataset: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ModelArgs {
    /// Number of latent factors
    #[arg(long)]
    pub rank: Option<usize>,
    /// Upper bound on factorization iterations
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Seed for factor initialization and the evaluation split
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Recommend games similar to the ones you like
    Recommend {
        /// A game you like (repeatable)
        #[arg(short, long = "game", required = true)]
        games: Vec<String>,
        /// Number of games to recommend
        #[arg(short, long, default_value_t = 5)]
        count: usize,
        /// Print a JSON report instead of a listing
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        dataset: DatasetArgs,
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Measure factorization accuracy on held-out ratings
    Evaluate {
        /// Print a JSON report instead of a listing
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        dataset: DatasetArgs,
        #[command(flatten)]
        model: ModelArgs,
    },
    /// List the most popular games
    Popular {
        /// Number of games to list
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Show details of a single game
    Show {
        /// Game name
        name: String,
        #[command(flatten)]
        dataset: DatasetArgs,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
