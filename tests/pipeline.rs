use std::sync::Arc;

use game_recommender::catalog::{Catalog, CatalogEntry, parse_genres};
use game_recommender::config::AppConfig;
use game_recommender::dataset::{DatasetRow, InteractionRecord, build_dataset};
use game_recommender::errors::RecommendError;
use game_recommender::recommend::Recommendation;
use game_recommender::services::RecommendationService;

fn row(user: &str, game: &str, rating: f64, genres: &str) -> DatasetRow {
    DatasetRow {
        user_id: user.to_string(),
        game_name: game.to_string(),
        rating,
        header_image: Some(format!("https://img.example/{game}.jpg")),
        short_description: Some(format!("{game} description")),
        genres: Some(genres.to_string()),
    }
}

/// Two taste clusters: RPG fans and puzzle fans, plus a few rarely played games
fn clustered_rows() -> Vec<DatasetRow> {
    let mut rows = Vec::new();
    for user in 0..8 {
        let id = format!("rpg{user}");
        rows.push(row(&id, "Elden Ring", 5.0, "RPG,Action"));
        rows.push(row(&id, "Skyrim", 4.0 + (user % 2) as f64, "RPG"));
        if user % 2 == 0 {
            rows.push(row(&id, "Witcher 3", 5.0, "RPG"));
        }
    }
    for user in 0..8 {
        let id = format!("puz{user}");
        rows.push(row(&id, "Portal 2", 5.0, "Puzzle"));
        rows.push(row(&id, "Tetris", 3.0 + (user % 3) as f64, "Puzzle,Arcade"));
        if user % 2 == 1 {
            rows.push(row(&id, "The Witness", 4.0, "Puzzle"));
        }
    }
    rows.push(row("niche1", "Obscure RPG", 2.0, "RPG"));
    rows.push(row("niche2", "Tiny Puzzle", 1.0, "Puzzle"));
    rows
}

fn clustered_service() -> RecommendationService {
    let dataset = build_dataset(&clustered_rows());
    let config = AppConfig::new().with_rank(Some(2));
    RecommendationService::new(
        config,
        Arc::new(dataset.catalog),
        Arc::new(dataset.interactions),
    )
}

#[test]
fn test_recommendations_are_sorted_limited_and_exclude_selection() {
    let service = clustered_service();
    let selection = ["Elden Ring", "Skyrim"];

    for n in 1..=6 {
        let result = service.recommend(&selection, n).unwrap();

        assert!(result.len() <= n);
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| !selection.contains(&r.item_id.as_str())));
        assert!(result.windows(2).all(|w| w[0].predicted_score >= w[1].predicted_score));
    }
}

#[test]
fn test_rpg_selection_prefers_rpg_games() {
    let service = clustered_service();
    let result = service.recommend(&["Elden Ring", "Skyrim"], 1).unwrap();

    assert_eq!(result[0].item_id, "Witcher 3");
    assert!(result[0].genres.contains("RPG"));
    assert_eq!(result[0].image_ref, "https://img.example/Witcher 3.jpg");
}

#[test]
fn test_recommend_is_deterministic() {
    let service = clustered_service();
    let first = service.recommend(&["Portal 2"], 4).unwrap();
    let second = service.recommend(&["Portal 2"], 4).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_selection() {
    let service = clustered_service();
    let empty: Vec<String> = Vec::new();

    for n in [0, 1, 5] {
        assert!(service.recommend(&empty, n).unwrap().is_empty());
    }
}

#[test]
fn test_unknown_game_never_faults() {
    let service = clustered_service();
    let run = service
        .recommend_detailed(&["Nonexistent Game"], 5)
        .unwrap();

    assert!(run.recommendations.is_empty());
    assert_eq!(run.dropped, vec!["Nonexistent Game".to_string()]);
}

#[test]
fn test_selecting_every_game_leaves_nothing() {
    let service = clustered_service();
    let everything: Vec<String> = service.catalog().item_ids().map(str::to_string).collect();

    assert!(service.recommend(&everything, 5).unwrap().is_empty());
}

#[test]
fn test_long_tail_pass_follows_recommendations() {
    let service = clustered_service();
    let recommendations = service.recommend(&["Elden Ring"], 2).unwrap();
    let unpopular = service.diversify(&recommendations, 3);

    assert!(unpopular.len() <= 3);
    assert_eq!(unpopular[0].item_id, "Obscure RPG");
    for item in &unpopular {
        assert!(recommendations.iter().all(|r| r.item_id != item.item_id));
        assert!(
            recommendations
                .iter()
                .any(|r| !r.genres.is_disjoint(&item.genres))
        );
    }
}

#[test]
fn test_diversify_prefers_lower_popularity() {
    let catalog = Catalog::from_entries(vec![
        entry("B", "RPG,Action", 2),
        entry("D", "RPG", 1),
        entry("E", "Action", 50),
    ]);
    let service = RecommendationService::new(AppConfig::new(), Arc::new(catalog), Arc::new(Vec::new()));
    let recommendations = vec![Recommendation::new(
        "B".to_string(),
        0.9,
        service.catalog().metadata("B"),
    )];

    let result = service.diversify(&recommendations, 1);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].item_id, "D");
    assert!(service.diversify(&[], 5).is_empty());
}

#[test]
fn test_too_small_history_is_a_structured_error() {
    let catalog = Catalog::from_entries(vec![entry("Solo", "Indie", 1)]);
    let history = vec![InteractionRecord::new("only", "Solo", 4.0)];
    let service = RecommendationService::new(AppConfig::new(), Arc::new(catalog), Arc::new(history));

    let err = service.evaluate().unwrap_err();

    assert!(matches!(err, RecommendError::InvalidMatrixShape { rows: 1, .. }));
}

#[test]
fn test_evaluate_clustered_history() {
    let metrics = clustered_service().evaluate().unwrap();

    assert!(metrics.held_out > 0);
    assert!(metrics.rmse >= metrics.mae);
    assert!((0.0..=1.0).contains(&metrics.recall_at_k));
}

fn entry(name: &str, genres: &str, popularity: usize) -> CatalogEntry {
    CatalogEntry {
        item_id: name.to_string(),
        image_ref: String::new(),
        description: String::new(),
        genres: parse_genres(genres),
        popularity,
    }
}
