pub mod app;
pub mod dependency_injection;
