pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
