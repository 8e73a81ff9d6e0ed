pub mod app;
pub mod config;
pub mod editor;
pub mod engine;
pub mod events;
pub mod grid;
pub mod io;
pub mod pattern;
pub mod render;
pub mod rule_set;

pub type ScreenSize = u16;
pub type CellOffset = i32;
