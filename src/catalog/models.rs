use serde::Deserialize;

/// A genre as the catalog reports it. Passed through for display; only the
/// slug is ever sent back upstream as a filter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// The slice of a catalog game record this app consumes. Everything but the
/// name is optional upstream.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GameRecord {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

/// First page of the genre listing endpoint.
#[derive(Debug, Deserialize)]
pub struct GenresPage {
    #[serde(default)]
    pub results: Vec<Genre>,
}

/// First page of the games listing endpoint.
#[derive(Debug, Deserialize)]
pub struct GamesPage {
    #[serde(default)]
    pub results: Vec<GameRecord>,
}
