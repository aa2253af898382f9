pub mod app_config;
pub mod catalog_config;
