use serde::{Deserialize, Deserializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Page index as sent to and returned by the catalog.
///
/// Not validated: zero and negative values are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(pub i64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for PageNumber {
    fn from(n: i64) -> Self {
        PageNumber(n)
    }
}

impl FromStr for PageNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(PageNumber)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{n}"),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub original_title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

impl MovieSummary {
    /// Full image URL for the backdrop, if the movie has one.
    pub fn backdrop_url(&self, image_base: &str) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| join_image_url(image_base, p))
    }
}

/// One page of the popular-movies feed.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<PageNumber>,
    pub results: Vec<MovieSummary>,
    pub total_pages: i64,
    pub total_results: i64,
}

pub fn join_image_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// TMDB sends `page` as a number, but a numeric string is accepted as well.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<PageNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(PageNumber(n))),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<PageNumber>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
