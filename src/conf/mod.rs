mod config;
mod input;
mod layout;

pub use config::Config;
pub use input::InputConfig;
pub use layout::LayoutConfig;
