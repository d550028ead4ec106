pub mod tui;

pub use tui::ConfigApplication;
