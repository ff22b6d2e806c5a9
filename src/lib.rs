//! geocap - Smallest enclosing circles on the sphere
//!
//! geocap finds, for a set of geographic points, the smallest circle drawn on
//! the Earth's surface (a spherical cap) that contains all of them. The
//! search is reduced to the vertices of a convex hull computed in a plane
//! tangent to the sphere, then every circle through three hull vertices and
//! every circle centered between two of them is tried.
//!
//! # Examples
//!
//! ## Enclosing circle
//!
//! ```
//! use geocap::{compute_minimum_enclosing_circle, GeoPoint};
//!
//! let points = [GeoPoint::new(0.0, 0.0)?, GeoPoint::new(0.0, 10.0)?];
//!
//! if let Some(circle) = compute_minimum_enclosing_circle(&points)? {
//!     println!("Center: {}, {}", circle.center.lat, circle.center.lng);
//!     println!("Radius: {:.0} m", circle.radius_meters);
//! }
//! # Ok::<(), geocap::Error>(())
//! ```
//!
//! ## Convex hull with a custom solver
//!
//! ```
//! use geocap::{GeoPoint, Solver, SolverConfig, TangentBase};
//!
//! let solver = Solver::new(SolverConfig::default().with_base(TangentBase::Pole));
//! let hull = solver.hull(&[
//!     GeoPoint::new(60.0, 10.0)?,
//!     GeoPoint::new(61.0, 12.0)?,
//!     GeoPoint::new(60.4, 11.0)?,
//!     GeoPoint::new(59.5, 13.0)?,
//! ])?;
//! println!("{} hull vertices", hull.len());
//! # Ok::<(), geocap::Error>(())
//! ```
//!
//! All operations are pure: a [`Solver`] holds only its configuration and can
//! be shared between threads freely.

pub mod error;
pub mod projection;
pub mod hull;
pub mod sphere;
pub mod solver;
pub mod config;
pub mod io;
pub mod api;

pub use error::{Error, Result};
pub use projection::{GeoPoint, ProjectedPoint, TangentBase, TangentPlane, UnitVector, Vector3};
pub use sphere::{haversine_distance, Circle, EARTH_RADIUS_METERS};
pub use solver::{EnclosingCircle, Solution, Solver};
pub use config::{ServerConfig, SolverConfig};

/// Convex hull vertices of `points` in order, using the default solver.
///
/// Degenerate inputs give degenerate hulls (0, 1 or 2 vertices).
pub fn compute_convex_hull(points: &[GeoPoint]) -> Result<Vec<GeoPoint>> {
    Solver::default().hull(points)
}

/// Minimum enclosing circle of `points`, using the default solver.
///
/// `Ok(None)` means there is nothing to draw (no points). Runs in O(h^3 * n)
/// for h hull vertices; the default configuration rejects hulls above 128
/// vertices.
pub fn compute_minimum_enclosing_circle(points: &[GeoPoint]) -> Result<Option<EnclosingCircle>> {
    Solver::default().solve(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_equatorial_pair() {
        let circle = compute_minimum_enclosing_circle(&[
            GeoPoint { lat: 0.0, lng: 0.0 },
            GeoPoint { lat: 0.0, lng: 10.0 },
        ])
        .unwrap()
        .unwrap();

        assert!(circle.center.lat.abs() < 1e-9);
        assert!((circle.center.lng - 5.0).abs() < 1e-9);
        assert!((circle.radius_meters - 555_800.0).abs() < 555_800.0 * 0.005);
    }

    #[test]
    fn test_scenario_single_point() {
        let paris = GeoPoint { lat: 48.8566, lng: 2.3522 };
        let circle = compute_minimum_enclosing_circle(&[paris]).unwrap().unwrap();

        assert_eq!(circle.center, paris);
        assert_eq!(circle.radius_meters, 0.0);
    }

    #[test]
    fn test_scenario_duplicates() {
        let p = GeoPoint { lat: 10.0, lng: 10.0 };
        assert_eq!(compute_convex_hull(&[p, p, p]).unwrap().len(), 1);

        let circle = compute_minimum_enclosing_circle(&[p, p, p]).unwrap().unwrap();
        assert_eq!(circle.radius_meters, 0.0);
    }

    #[test]
    fn test_empty() {
        assert!(compute_convex_hull(&[]).unwrap().is_empty());
        assert!(compute_minimum_enclosing_circle(&[]).unwrap().is_none());
    }
}
