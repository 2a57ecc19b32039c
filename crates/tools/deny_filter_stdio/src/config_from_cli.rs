use crate::config::{Config, normalize_dict_path};
use clap::Parser;
use std::ffi::OsString;

/// implements config init from cli arguments
impl Config {
    /// loads config from cli arguments, normalizing the dictionary path
    #[must_use]
    pub fn from_cli<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut config = Config::parse_from(args);
        config.dict_path = normalize_dict_path(&config.dict_path);
        config
    }
}
