pub mod grid;
pub mod squircle;
pub mod swatch;
