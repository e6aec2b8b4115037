pub mod hole_geometry;
pub mod line;
pub mod spherical;

pub use hole_geometry::{BoundingRectangle, HoleGeometry};
pub use line::{GeometricLine, LineSide};
