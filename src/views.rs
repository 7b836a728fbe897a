use askama::Template;

use crate::catalog::{GameRecord, Genre};

// Year range offered in the filter dropdown.
const START_YEAR: i32 = 2000;
const END_YEAR: i32 = 2025;

pub fn selectable_years() -> Vec<i32> {
    (START_YEAR..=END_YEAR).collect()
}

/// Display projection of one catalog game record.
pub struct GameView {
    pub name: String,
    pub genre_names: String,
    pub release_year: String,
    pub image_url: Option<String>,
}

impl GameView {
    pub fn from_record(record: &GameRecord) -> Self {
        let genre_names = if record.genres.is_empty() {
            "Unknown".to_string()
        } else {
            record
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let release_year = match record.released.as_deref() {
            Some(date) if !date.is_empty() => {
                date.split('-').next().unwrap_or(date).to_string()
            }
            _ => "N/A".to_string(),
        };

        Self {
            name: record.name.clone(),
            genre_names,
            release_year,
            image_url: record.background_image.clone(),
        }
    }
}

/// Everything the page template needs for one response.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub genres: Vec<Genre>,
    pub years: Vec<i32>,
    pub selected_genre: String,
    pub selected_year: String,
    pub game: Option<GameView>,
    pub error_message: String,
}

impl IndexPage {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self {
            genres,
            years: selectable_years(),
            selected_genre: String::new(),
            selected_year: String::new(),
            game: None,
            error_message: String::new(),
        }
    }

    pub fn with_selection(mut self, genre: &str, year: &str) -> Self {
        self.selected_genre = genre.to_string();
        self.selected_year = year.to_string();
        self
    }

    pub fn with_game(mut self, game: GameView) -> Self {
        self.game = Some(game);
        self
    }

    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}
