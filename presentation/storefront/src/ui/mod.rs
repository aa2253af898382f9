pub mod command;
pub mod render;
pub mod spinner;
pub mod state;
