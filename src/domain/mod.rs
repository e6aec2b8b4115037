pub mod distance;
pub mod feature;
pub mod hole;
pub mod point;

pub use distance::{Distance, DistanceScale, UnitSystem};
pub use feature::{Feature, FeatureType};
pub use hole::{Course, Hole, HoleTee};
pub use point::GeographicPoint;
