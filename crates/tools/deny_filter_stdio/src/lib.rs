pub mod config;
pub mod config_from_cli;
pub mod logger;
pub mod main_init;
pub mod main_loop;
pub mod reload;
pub mod request;
