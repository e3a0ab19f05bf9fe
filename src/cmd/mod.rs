pub mod evaluate;
pub mod render;
pub mod simulate;
pub mod sweep;
