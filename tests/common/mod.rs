use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use tokio::net::TcpListener;

/// Canned behavior for one mock catalog endpoint.
#[derive(Clone)]
pub enum Upstream {
    Json(serde_json::Value),
    Failure,
}

#[derive(Clone)]
struct MockState {
    genres: Upstream,
    games: Upstream,
    games_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// A catalog API stand-in listening on an ephemeral port. Records the query
/// parameters of every games request it receives.
pub struct MockCatalog {
    pub base_url: String,
    games_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockCatalog {
    pub fn games_queries(&self) -> Vec<HashMap<String, String>> {
        self.games_queries.lock().unwrap().clone()
    }
}

fn respond(upstream: &Upstream) -> Response {
    match upstream {
        Upstream::Json(value) => Json(value.clone()).into_response(),
        Upstream::Failure => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn genres_handler(State(state): State<MockState>) -> Response {
    respond(&state.genres)
}

async fn games_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.games_queries.lock().unwrap().push(params);
    respond(&state.games)
}

pub async fn spawn_mock_catalog(genres: Upstream, games: Upstream) -> MockCatalog {
    let games_queries = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        genres,
        games,
        games_queries: games_queries.clone(),
    };

    let app = Router::new()
        .route("/genres", get(genres_handler))
        .route("/games", get(games_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockCatalog {
        base_url: format!("http://{}", addr),
        games_queries,
    }
}

/// Spawn the app on an ephemeral port, pointed at the given mock catalog.
pub async fn spawn_app(catalog: &MockCatalog) -> String {
    let config = gamespin::Config {
        port: 0,
        api_key: "test-key".to_string(),
        catalog_base_url: catalog.base_url.clone(),
        upstream_timeout: Duration::from_secs(2),
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, gamespin::app(&config)).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn genres_payload() -> serde_json::Value {
    serde_json::json!({
        "count": 2,
        "results": [
            {"id": 4, "name": "Action", "slug": "action", "games_count": 180000},
            {"id": 5, "name": "RPG", "slug": "role-playing-games-rpg", "games_count": 55000}
        ]
    })
}

pub fn games_payload() -> serde_json::Value {
    serde_json::json!({
        "count": 3,
        "results": [
            {
                "id": 1,
                "name": "Hades",
                "released": "2020-09-17",
                "background_image": "https://media.example/hades.jpg",
                "genres": [{"id": 4, "name": "Action", "slug": "action"}]
            },
            {
                "id": 2,
                "name": "Doom Eternal",
                "released": "2020-03-20",
                "background_image": "https://media.example/doom.jpg",
                "genres": [{"id": 4, "name": "Action", "slug": "action"}]
            },
            {
                "id": 3,
                "name": "Ghost of Tsushima",
                "released": "2020-07-17",
                "background_image": "https://media.example/ghost.jpg",
                "genres": [{"id": 4, "name": "Action", "slug": "action"}]
            }
        ]
    })
}

pub fn empty_page_payload() -> serde_json::Value {
    serde_json::json!({"count": 0, "results": []})
}
