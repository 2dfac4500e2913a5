use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::catalog::{CatalogEntry, GenreSet};
use crate::factorization::EvaluationMetrics;
use crate::recommend::{Recommendation, UnpopularRecommendation};

/// JSON document printed by `recommend --json`
#[derive(Debug, Serialize)]
pub struct RecommendationReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub selection: &'a [String],
    pub dropped: &'a [String],
    pub recommendations: &'a [Recommendation],
    pub unpopular: &'a [UnpopularRecommendation],
    pub metrics: Option<&'a EvaluationMetrics>,
}

/// JSON document printed by `evaluate --json`
#[derive(Debug, Serialize)]
pub struct EvaluationReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub metrics: &'a EvaluationMetrics,
}

pub fn print_json<T: Serialize>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_recommendations(recommendations: &[Recommendation]) {
    println!("{}", "🎮 Recommended Games".bold().red());
    for (idx, rec) in recommendations.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            idx + 1,
            rec.item_id.bold(),
            format!("({:.3})", rec.predicted_score).dimmed()
        );
        print_genres(&rec.genres);
    }
}

pub fn print_unpopular(unpopular: &[UnpopularRecommendation]) {
    println!("{}", "🌟 Unpopular Games You Might Like".bold().blue());
    for (idx, rec) in unpopular.iter().enumerate() {
        println!("{:>3}. {}", idx + 1, rec.item_id.bold());
        print_genres(&rec.genres);
    }
}

pub fn print_dropped(dropped: &[String]) {
    for name in dropped {
        println!("{} {}", "Unknown game ignored:".yellow(), name);
    }
}

pub fn print_metrics(metrics: &EvaluationMetrics) {
    println!("{}", "Model diagnostics".bold());
    println!("  RMSE:       {:.4}", metrics.rmse);
    println!("  MAE:        {:.4}", metrics.mae);
    println!("  Recall@{:<3} {:.4}", metrics.k, metrics.recall_at_k);
    println!(
        "  {}",
        format!(
            "{} held-out ratings, {} users scored for recall",
            metrics.held_out, metrics.evaluated_users
        )
        .dimmed()
    );
}

pub fn print_popular(entries: &[&CatalogEntry]) {
    println!("{}", "Top Most Popular Games".bold());
    for (idx, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            idx + 1,
            entry.item_id.bold(),
            format!("({} ratings)", entry.popularity).dimmed()
        );
    }
}

pub fn print_details(entry: &CatalogEntry) {
    println!("{}", entry.item_id.bold());
    if !entry.image_ref.is_empty() {
        println!("  Image:       {}", entry.image_ref);
    }
    println!("  Description: {}", entry.description);
    println!("  Genres:      {}", join_genres(&entry.genres));
    println!("  Popularity:  {}", entry.popularity);
}

fn print_genres(genres: &GenreSet) {
    if !genres.is_empty() {
        println!("     {}", join_genres(genres).italic());
    }
}

fn join_genres(genres: &GenreSet) -> String {
    genres.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
