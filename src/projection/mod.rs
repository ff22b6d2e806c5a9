//! Geographic coordinates, unit vectors and tangent-plane projection

pub mod coordinate;
pub mod plane;

pub use coordinate::{GeoPoint, UnitVector, Vector3};
pub use plane::{centroid, project_to_plane, ProjectedPoint, TangentBase, TangentPlane};
