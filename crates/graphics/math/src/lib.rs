//! Common utilities used in graphics-related libraries

mod vec2d;

pub use vec2d::Vec2D;
