//! Dense sampling of the law over a wavelength range.

pub mod grid;
pub mod sampler;

pub use grid::*;
pub use sampler::*;
