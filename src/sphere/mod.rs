//! Circles and distances on the sphere

pub mod circle;
pub mod distance;

pub use circle::{angular_distance, circumcenter, contains, midpoint, Circle};
pub use distance::{arc_length, haversine_distance, EARTH_RADIUS_METERS};
