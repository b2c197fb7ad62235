#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod json;
pub mod settings;
pub mod static_catalog;

pub use json::JsonCatalog;
pub use settings::SettingsFile;
pub use static_catalog::StaticCatalog;
