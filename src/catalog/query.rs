/// User-selected filters for the games listing call.
///
/// Empty form fields normalize to `None`. The year is kept as the submitted
/// string; a malformed value is passed through for the catalog to reject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilter {
    genre: Option<String>,
    year: Option<String>,
}

impl GameFilter {
    pub fn new(genre: &str, year: &str) -> Self {
        Self {
            genre: (!genre.is_empty()).then(|| genre.to_string()),
            year: (!year.is_empty()).then(|| year.to_string()),
        }
    }

    /// Query parameters for the games endpoint. A selected year becomes a
    /// date range spanning the full calendar year.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(genre) = &self.genre {
            params.push(("genres", genre.clone()));
        }
        if let Some(year) = &self.year {
            params.push(("dates", format!("{year}-01-01,{year}-12-31")));
        }
        params
    }
}
