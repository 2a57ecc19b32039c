use clap::Parser;
use deny_filter::FilterConfig;
use deny_filter::config::{DEFAULT_COMMENT_PREFIX, DEFAULT_PLACEHOLDER};
use std::path::Path;

/// Dictionary glob used when none is given.
pub const DEFAULT_DICT_PATH: &str = "*.txt";

/// Log level used when none is given or the given one is unusable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "deny-filter-stdio",
    version,
    about = "Checks and masks deny-listed words in newline-delimited JSON requests"
)]
pub struct Config {
    /// Files to load as dictionary, glob pattern or directory
    #[arg(long = "dict-path", env = "DENY_FILTER_DICT_PATH", default_value = DEFAULT_DICT_PATH)]
    pub dict_path: String,

    /// Log level or `tracing` filter directive
    #[arg(long, env = "DENY_FILTER_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Write daily-rotated log files into this directory instead of stderr
    #[arg(long, env = "DENY_FILTER_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Character written over masked characters
    #[arg(long, env = "DENY_FILTER_PLACEHOLDER", default_value_t = DEFAULT_PLACEHOLDER)]
    pub placeholder: char,

    /// Dictionary comment marker, empty to disable
    #[arg(long, env = "DENY_FILTER_COMMENT_PREFIX", default_value = DEFAULT_COMMENT_PREFIX)]
    pub comment_prefix: String,

    /// Fail when the dictionary glob matches no files
    #[arg(long, env = "DENY_FILTER_REQUIRE_SOURCES")]
    pub require_sources: bool,
}

impl Config {
    /// Engine configuration derived from the command line
    #[must_use]
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::default()
            .with_placeholder(self.placeholder)
            .with_comment_prefix(Some(self.comment_prefix.as_str()))
            .with_require_sources(self.require_sources)
    }
}

/// Turns a bare directory into a glob over the `.txt` files inside it.
#[must_use]
pub fn normalize_dict_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return DEFAULT_DICT_PATH.to_string();
    }
    if trimmed.ends_with('/') || trimmed.ends_with(std::path::MAIN_SEPARATOR) {
        return format!("{trimmed}{DEFAULT_DICT_PATH}");
    }
    if Path::new(trimmed).is_dir() {
        return Path::new(trimmed)
            .join(DEFAULT_DICT_PATH)
            .to_string_lossy()
            .into_owned();
    }
    trimmed.to_string()
}
