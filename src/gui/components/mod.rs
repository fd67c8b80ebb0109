// GUI Components module
mod game_form;
mod games_table;
mod header;
mod status_bar;

pub use game_form::{FormAction, GameFormWindow};
pub use games_table::{GamesTable, TableAction};
pub use header::{Header, HeaderAction};
pub use status_bar::StatusBar;
