pub mod snake;
pub mod time;
