use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod session;

/// Player options appended to every trailer embed URL
pub const EMBED_PLAYER_QUERY: &str = "autoplay=1&controls=1&rel=0&showinfo=0&modestbranding=1";

/// Fixed dimensions of the embedded player surface
pub const EMBED_PLAYER_WIDTH: u32 = 854;
pub const EMBED_PLAYER_HEIGHT: u32 = 480;

/// A movie or series entry, normalized once at the provider boundary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: Option<u64>,
    pub release_date: Option<NaiveDate>,
    /// Absolute artwork URL carried only by a fixed subset of the seed data
    pub image_override: Option<String>,
}

impl CatalogItem {
    /// Resolve the display artwork: override first, then the poster path
    /// joined onto `image_base`
    pub fn artwork_url(&self, image_base: &str) -> Option<String> {
        if let Some(url) = &self.image_override {
            return Some(url.clone());
        }
        self.poster_path
            .as_ref()
            .map(|path| format!("{}{}", image_base, path))
    }

    /// Resolve the hero artwork: override first, then the backdrop path,
    /// then the poster path as a last resort
    pub fn backdrop_url(&self, backdrop_base: &str, image_base: &str) -> Option<String> {
        if let Some(url) = &self.image_override {
            return Some(url.clone());
        }
        if let Some(path) = &self.backdrop_path {
            return Some(format!("{}{}", backdrop_base, path));
        }
        self.poster_path
            .as_ref()
            .map(|path| format!("{}{}", image_base, path))
    }

    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

/// Browsing row identity, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Trending,
    Popular,
    TopRated,
    Action,
    Comedy,
    Horror,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Trending,
        Category::Popular,
        Category::TopRated,
        Category::Action,
        Category::Comedy,
        Category::Horror,
    ];

    /// Row heading shown above the shelf
    pub fn display_title(&self) -> &'static str {
        match self {
            Category::Trending => "Trending Now",
            Category::Popular => "Popular Movies",
            Category::TopRated => "Top Rated",
            Category::Action => "Action & Adventure",
            Category::Comedy => "Comedies",
            Category::Horror => "Horror Movies",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_title())
    }
}

/// One ordered shelf of items per category, replaced wholesale on every load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySet {
    pub trending: Vec<CatalogItem>,
    pub popular: Vec<CatalogItem>,
    pub top_rated: Vec<CatalogItem>,
    pub action: Vec<CatalogItem>,
    pub comedy: Vec<CatalogItem>,
    pub horror: Vec<CatalogItem>,
}

impl CategorySet {
    pub fn get(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Trending => &self.trending,
            Category::Popular => &self.popular,
            Category::TopRated => &self.top_rated,
            Category::Action => &self.action,
            Category::Comedy => &self.comedy,
            Category::Horror => &self.horror,
        }
    }

    /// Shelves in display order
    pub fn rows(&self) -> impl Iterator<Item = (Category, &[CatalogItem])> {
        Category::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    pub fn clear(&mut self) {
        *self = CategorySet::default();
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// A single entry from a title's video listing
#[derive(Debug, Clone, PartialEq)]
pub struct VideoEntry {
    pub key: String,
    pub site: String,
    pub kind: String,
    pub name: String,
}

impl VideoEntry {
    /// Only YouTube-hosted entries typed "Trailer" can feed the embed player
    pub fn is_playable_trailer(&self) -> bool {
        self.kind == "Trailer" && self.site == "YouTube"
    }
}

/// Opaque identifier for an embeddable trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerKey(pub String);

impl TrailerKey {
    /// Embed URL with the fixed player options
    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}?{}",
            self.0, EMBED_PLAYER_QUERY
        )
    }
}

impl Display for TrailerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Catalog API Types
// ============================================================================

/// Raw movie record from the catalog API
///
/// Series records carry `name`/`first_air_date` instead of
/// `title`/`release_date`; both shapes decode into the same type.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

/// Paged list response from the catalog API
///
/// `results` is intentionally non-defaulted: a body without it is malformed
/// and must fail decoding rather than read as an empty page.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovieList {
    pub results: Vec<ApiMovie>,
}

impl From<ApiMovie> for CatalogItem {
    fn from(raw: ApiMovie) -> Self {
        let title = raw.title.or(raw.name).unwrap_or_default();
        let release_date = raw
            .release_date
            .or(raw.first_air_date)
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

        CatalogItem {
            id: raw.id,
            title,
            overview: raw.overview.unwrap_or_default(),
            poster_path: raw.poster_path,
            backdrop_path: raw.backdrop_path,
            vote_average: raw.vote_average.unwrap_or(0.0),
            vote_count: raw.vote_count,
            release_date,
            image_override: None,
        }
    }
}

/// Raw video record from GET /movie/{id}/videos
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideo {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Video listing response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideoList {
    pub results: Vec<ApiVideo>,
}

impl From<ApiVideo> for VideoEntry {
    fn from(raw: ApiVideo) -> Self {
        VideoEntry {
            key: raw.key.unwrap_or_default(),
            site: raw.site.unwrap_or_default(),
            kind: raw.kind.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
        }
    }
}
