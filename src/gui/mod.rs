mod app;
mod components;
mod styles;

pub use app::GamesApp;
