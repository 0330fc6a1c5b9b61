//! Application configuration
//!
//! Everything here has a working default; the binary overrides fields from
//! command-line flags and environment variables.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default number of events per feed page and per index page
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Default query parameter carrying the feed page number
pub const DEFAULT_PAGE_PARAM: &str = "p";

/// Query parameter carrying the index page number
pub const INDEX_PAGE_PARAM: &str = "page";

/// Server-wide configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// SQLite database file
    pub database: PathBuf,
    /// Events per page on the HTML index
    pub index_page_size: NonZeroUsize,
    pub feed: FeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database: PathBuf::from("major_event_log.sqlite3"),
            index_page_size: DEFAULT_PAGE_SIZE,
            feed: FeedConfig::default(),
        }
    }
}

/// Static feed metadata and pagination settings
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub title: String,
    pub subtitle: String,
    /// Absolute site root, without a trailing slash
    pub site_url: String,
    /// Path of the feed resource below `site_url`
    pub feed_path: String,
    /// Path of the HTML page the feed mirrors
    pub html_path: String,
    pub author_name: String,
    pub author_uri: String,
    pub page_size: NonZeroUsize,
    /// Query parameter name for the page number
    pub page_param: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "PREMIS major event log".to_string(),
            subtitle: "Most recent major PREMIS events.".to_string(),
            site_url: "http://localhost:8000".to_string(),
            feed_path: "/feed/".to_string(),
            html_path: "/".to_string(),
            author_name: "University of North Texas Libraries".to_string(),
            author_uri: "https://library.unt.edu/".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        }
    }
}

impl FeedConfig {
    /// Join a site-relative path onto `site_url`
    pub fn absolute_url(&self, path: &str) -> String {
        let root = self.site_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{root}{path}")
        } else {
            format!("{root}/{path}")
        }
    }

    /// Base URL of the feed, without any page parameter
    pub fn feed_url(&self) -> String {
        self.absolute_url(&self.feed_path)
    }

    /// Feed URL selecting page `number`
    pub fn page_url(&self, number: usize) -> String {
        let base = self.feed_url();
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}{}={number}", self.page_param)
    }
}
