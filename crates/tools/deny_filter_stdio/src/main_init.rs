use crate::config::Config;
use crate::logger::init_logger;
use std::ffi::OsString;
use tracing::info;

/// Parses arguments and installs logging
pub fn init_main<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = Config::from_cli(args);
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    info!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        dict_path = %config.dict_path,
        placeholder = %config.placeholder,
        "Configuration loaded"
    );
    config
}
