//! Handler modules for keyboard input and screen transitions.

mod game_handler;
mod input_handler;
mod login_handler;
mod menu_handler;
mod stats_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
pub use login_handler::LoginHandler;
pub use menu_handler::MenuHandler;
pub use stats_handler::StatsHandler;
