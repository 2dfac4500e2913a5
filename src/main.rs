use anyhow::Result;

use game_recommender::cli::Command;
use game_recommender::{
    handle_completions, handle_evaluate, handle_popular, handle_recommend, handle_show, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Recommend {
            games,
            count,
            json,
            dataset,
            model,
        } => handle_recommend(games, *count, *json, dataset, model),
        Command::Evaluate {
            json,
            dataset,
            model,
        } => handle_evaluate(*json, dataset, model),
        Command::Popular { count, dataset } => handle_popular(*count, dataset),
        Command::Show { name, dataset } => handle_show(name, dataset),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
