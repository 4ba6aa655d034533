pub mod batch;
pub mod color;
pub mod config;
pub mod icon;
pub mod recolor;
