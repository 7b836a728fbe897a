use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use rand::Rng;
use serde::Deserialize;
use tracing::{error, warn};

use crate::AppState;
use crate::catalog::{CatalogError, GameFilter, GameRecord, Genre};
use crate::views::{GameView, IndexPage};

const LOAD_ERROR: &str = "Cannot load data right now. Please try again later.";
const SEARCH_ERROR: &str = "An error occurred while searching. Please try again.";
const NO_RESULTS: &str = "No games found for the selected filters.";

#[derive(Debug, Deserialize)]
pub struct PickForm {
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: String,
}

/// GET / - render the filter form with an empty selection.
pub async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match state.catalog.fetch_genres().await {
        Ok(genres) => render(StatusCode::OK, IndexPage::new(genres)),
        Err(err) => {
            error!(error = %err, "Failed to load genre list");
            let page = IndexPage::new(Vec::new()).with_error(LOAD_ERROR);
            render(StatusCode::INTERNAL_SERVER_ERROR, page)
        }
    }
}

/// POST / - pick one random game matching the submitted filters.
pub async fn pick(
    State(state): State<AppState>,
    Form(form): Form<PickForm>,
) -> (StatusCode, Html<String>) {
    let filter = GameFilter::new(&form.genre, &form.year);

    // The two calls are independent; issue them together and join.
    let (games, genres) = tokio::join!(
        state.catalog.fetch_games(&filter),
        state.catalog.fetch_genres()
    );

    let genres = match (games, genres) {
        (Ok(games), Ok(genres)) => {
            let page = IndexPage::new(genres).with_selection(&form.genre, &form.year);
            let page = match pick_game(&games) {
                Some(game) => page.with_game(game),
                // An empty result set is a normal outcome, not an error.
                None => page.with_error(NO_RESULTS),
            };
            return render(StatusCode::OK, page);
        }
        (Err(err), genres) => {
            error!(error = %err, "Games search failed");
            recovered_genres(genres)
        }
        (Ok(_), Err(err)) => {
            error!(error = %err, "Genre list fetch failed during search");
            Vec::new()
        }
    };

    let page = IndexPage::new(genres)
        .with_selection(&form.genre, &form.year)
        .with_error(SEARCH_ERROR);
    render(StatusCode::INTERNAL_SERVER_ERROR, page)
}

/// Genre list to show after the games call failed: the result of the joined
/// genre fetch, or an empty dropdown with the cause logged.
fn recovered_genres(result: Result<Vec<Genre>, CatalogError>) -> Vec<Genre> {
    match result {
        Ok(genres) => genres,
        Err(err) => {
            warn!(error = %err, "Genre recovery failed, dropdown will be empty");
            Vec::new()
        }
    }
}

fn pick_game(games: &[GameRecord]) -> Option<GameView> {
    if games.is_empty() {
        return None;
    }
    Some(GameView::from_record(&games[pick_index(games.len())]))
}

/// Uniform random index into a non-empty result list.
fn pick_index(len: usize) -> usize {
    rand::rng().random_range(0..len)
}

fn render(status: StatusCode, page: IndexPage) -> (StatusCode, Html<String>) {
    match page.render() {
        Ok(body) => (status, Html(body)),
        Err(err) => {
            error!(error = %err, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(String::new()))
        }
    }
}
