pub mod app;
pub mod intent;
pub mod list;
pub mod locale;
pub mod scroll;
pub mod sort_menu;
pub mod terminal;
pub mod views;

pub use app::{App, View};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
