pub mod catalog;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod factorization;
pub mod matrix;
pub mod recommend;
pub mod report;
pub mod services;

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;
use std::sync::Arc;

use crate::cli::{Cli, Command, DatasetArgs, ModelArgs};
use crate::config::settings::{AppConfig, dataset_path};
use crate::dataset::load_dataset;
use crate::report::{EvaluationReport, RecommendationReport};
use crate::services::RecommendationService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_recommend(
    games: &[String],
    count: usize,
    json: bool,
    dataset: &DatasetArgs,
    model: &ModelArgs,
) -> Result<()> {
    let service = build_service(dataset, model)?;
    let run = service.recommend_detailed(games, count)?;
    let unpopular = service.diversify(&run.recommendations, count);

    if json {
        return report::print_json(&RecommendationReport {
            generated_at: Utc::now(),
            selection: games,
            dropped: &run.dropped,
            recommendations: &run.recommendations,
            unpopular: &unpopular,
            metrics: run.metrics.as_ref(),
        });
    }

    report::print_dropped(&run.dropped);
    if run.recommendations.is_empty() {
        println!("No recommendations for this selection.");
        return Ok(());
    }
    report::print_recommendations(&run.recommendations);
    if !unpopular.is_empty() {
        println!();
        report::print_unpopular(&unpopular);
    }
    if let Some(metrics) = &run.metrics {
        println!();
        report::print_metrics(metrics);
    }
    Ok(())
}

pub fn handle_evaluate(json: bool, dataset: &DatasetArgs, model: &ModelArgs) -> Result<()> {
    let service = build_service(dataset, model)?;
    let metrics = service.evaluate()?;

    if json {
        return report::print_json(&EvaluationReport {
            generated_at: Utc::now(),
            metrics: &metrics,
        });
    }
    report::print_metrics(&metrics);
    Ok(())
}

pub fn handle_popular(count: usize, dataset: &DatasetArgs) -> Result<()> {
    let data = load_dataset(dataset_path(dataset.dataset.as_deref()))?;
    report::print_popular(&data.catalog.most_popular(count));
    Ok(())
}

pub fn handle_show(name: &str, dataset: &DatasetArgs) -> Result<()> {
    let data = load_dataset(dataset_path(dataset.dataset.as_deref()))?;
    let entry = data.catalog.require(name)?;
    report::print_details(entry);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_service(dataset: &DatasetArgs, model: &ModelArgs) -> Result<RecommendationService> {
    let path = dataset_path(dataset.dataset.as_deref());
    let data = load_dataset(&path)?;
    let config = AppConfig::new()
        .with_rank(model.rank)
        .with_max_iterations(model.max_iterations)
        .with_seed(model.seed);
    info!(
        "Using rank {} with at most {} iterations",
        config.factorization.rank, config.factorization.max_iterations
    );

    Ok(RecommendationService::new(
        config,
        Arc::new(data.catalog),
        Arc::new(data.interactions),
    ))
}
