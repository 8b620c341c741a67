pub mod effects;
pub mod locomotion;
pub mod progression;
pub mod render;
