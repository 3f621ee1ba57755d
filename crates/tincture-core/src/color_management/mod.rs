//! Color management — transfer curve, matrices, and color space conversions.

pub mod color_space;
pub mod hsl;
pub mod oklab;
pub mod p3;
pub mod transfer;
