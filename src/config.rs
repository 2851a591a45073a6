use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Catalog API key (TMDB v3 auth)
    #[serde(default = "default_catalog_api_key")]
    pub catalog_api_key: String,

    /// Catalog API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Base URL for poster-sized artwork
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Base URL for backdrop-sized artwork
    #[serde(default = "default_backdrop_base_url")]
    pub backdrop_base_url: String,

    /// Keyword mixed into the trending shelf
    #[serde(default = "default_trending_keyword")]
    pub trending_keyword: String,

    /// The single sign-in address the gate accepts
    #[serde(default = "default_authorized_email")]
    pub authorized_email: String,

    /// Password paired with the authorized address
    #[serde(default = "default_authorized_password")]
    pub authorized_password: String,

    /// Key the persisted session record is filed under
    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// Directory the file-backed store writes into
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
}

fn default_catalog_api_key() -> String {
    "c8dea14dc917687ac631a52620e4f7ad".to_string()
}

fn default_catalog_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_backdrop_base_url() -> String {
    "https://image.tmdb.org/t/p/w1280".to_string()
}

fn default_trending_keyword() -> String {
    "pokemon".to_string()
}

fn default_authorized_email() -> String {
    "info@quriosity".to_string()
}

fn default_authorized_password() -> String {
    "quriosity".to_string()
}

fn default_session_key() -> String {
    "quriosity_auth".to_string()
}

fn default_storage_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Slice of the config the catalog client needs
    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            api_key: self.catalog_api_key.clone(),
            base_url: self.catalog_api_url.clone(),
            image_base_url: self.image_base_url.clone(),
            backdrop_base_url: self.backdrop_base_url.clone(),
        }
    }

    /// Slice of the config the session gate needs
    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            authorized_email: self.authorized_email.clone(),
            authorized_password: self.authorized_password.clone(),
            session_key: self.session_key.clone(),
        }
    }
}

/// Connection details for the catalog API client
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub backdrop_base_url: String,
}

/// Credential pair and storage key for the session gate
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub authorized_email: String,
    pub authorized_password: String,
    pub session_key: String,
}
