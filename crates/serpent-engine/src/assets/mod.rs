pub mod color;
pub mod default_theme;
pub mod request;
pub mod theme;
