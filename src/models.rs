use crate::error::AppError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchKind {
    Person,
    Movie,
}

impl SearchKind {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(str::trim) {
            Some("person") => Ok(SearchKind::Person),
            Some("movie") => Ok(SearchKind::Movie),
            Some(other) => Err(AppError::bad_request(format!(
                "unknown search kind '{other}', expected 'person' or 'movie'"
            ))),
            None => Err(AppError::bad_request("missing search kind")),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Person => "person",
            SearchKind::Movie => "movie",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PersonOrder {
    Name,
    OldestFirst,
    YoungestFirst,
    #[default]
    Unordered,
}

impl PersonOrder {
    pub const CHOICES: [&'static str; 3] = ["name", "oldest to youngest", "youngest to oldest"];

    /// Unrecognized tokens fall back to the store's default order.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("name") => PersonOrder::Name,
            Some("oldest to youngest") => PersonOrder::OldestFirst,
            Some("youngest to oldest") => PersonOrder::YoungestFirst,
            _ => PersonOrder::Unordered,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MovieOrder {
    ReleaseOldestFirst,
    ReleaseNewestFirst,
    #[default]
    Title,
}

impl MovieOrder {
    pub const CHOICES: [&'static str; 3] =
        ["title", "release year (oldest first)", "release year (newest first)"];

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("release year (oldest first)") => MovieOrder::ReleaseOldestFirst,
            Some("release year (newest first)") => MovieOrder::ReleaseNewestFirst,
            _ => MovieOrder::Title,
        }
    }
}

/// How a search result set is presented.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<T> {
    NotFound,
    Single(T),
    Many(Vec<T>),
}

impl<T> SearchOutcome<T> {
    pub fn from_rows(mut rows: Vec<T>) -> Self {
        match rows.len() {
            0 => SearchOutcome::NotFound,
            1 => rows.pop().map_or(SearchOutcome::NotFound, SearchOutcome::Single),
            _ => SearchOutcome::Many(rows),
        }
    }
}

/// Shown in every page footer.
#[derive(Clone, Debug)]
pub struct Stats {
    pub now: String,
    pub people: u64,
    pub movies: u64,
}
