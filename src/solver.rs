//! Minimum enclosing circle on the sphere
//!
//! The search projects the input onto a tangent plane, reduces it to the
//! vertices of the planar convex hull and then tries every circle through
//! three hull vertices and every circle centered between two of them. The
//! smallest candidate covering all inputs wins.
//!
//! The candidate search is O(h^3 * n) for h hull vertices and n inputs.
//! `SolverConfig::max_hull_size` bounds h so oversized inputs fail fast
//! with [`Error::HullTooLarge`] instead of running unbounded.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::hull::convex_hull;
use crate::projection::{centroid, GeoPoint, ProjectedPoint, TangentBase, TangentPlane, UnitVector};
use crate::sphere::{angular_distance, haversine_distance, midpoint, Circle};

/// The smallest spherical cap containing every input point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnclosingCircle {
    pub center: GeoPoint,
    /// Great-circle distance from the center to `reference`
    pub radius_meters: f64,
    /// Radius as an angle at the sphere's center, in radians
    pub angular_radius: f64,
    /// Input point on (or nearest to) the boundary
    pub reference: GeoPoint,
}

impl EnclosingCircle {
    /// True when `point` is within the angular radius plus `epsilon` radians
    pub fn contains(&self, point: &GeoPoint, epsilon: f64) -> bool {
        Circle::new(self.center.to_unit_vector(), self.angular_radius)
            .contains(point.to_unit_vector(), epsilon)
    }
}

/// Circle together with the hull it was searched from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Positions of the hull vertices in the input, in hull order
    pub hull: Vec<usize>,
    pub circle: Option<EnclosingCircle>,
}

/// Projected hull; `faithful` is false when no tangent plane sees every
/// point from the front, so the hull may miss boundary points
struct Hull {
    vertices: Vec<ProjectedPoint>,
    faithful: bool,
}

/// Stateless solver; one instance may be shared across threads
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Ordered convex hull vertices (counter-clockwise in the tangent
    /// plane), returned as the caller's own points.
    ///
    /// Empty input gives an empty hull; one distinct point or a collinear
    /// set gives a one- or two-vertex hull.
    pub fn hull(&self, points: &[GeoPoint]) -> Result<Vec<GeoPoint>> {
        Ok(self
            .hull_indices(points)?
            .into_iter()
            .map(|index| points[index])
            .collect())
    }

    /// Positions in `points` of the hull vertices, in hull order
    pub fn hull_indices(&self, points: &[GeoPoint]) -> Result<Vec<usize>> {
        let vectors = to_unit_vectors(points)?;
        Ok(self.hull_vertices(&vectors).vertices.into_iter().map(|p| p.index).collect())
    }

    /// Finds the minimum enclosing circle of `points`.
    ///
    /// Returns `Ok(None)` for empty input and in the unexpected case that no
    /// candidate covers every point. Fails on out-of-range coordinates and
    /// on hulls larger than the configured bound.
    pub fn solve(&self, points: &[GeoPoint]) -> Result<Option<EnclosingCircle>> {
        Ok(self.solve_with_hull(points)?.circle)
    }

    /// Like [`Solver::solve`], also returning the hull computed on the way
    pub fn solve_with_hull(&self, points: &[GeoPoint]) -> Result<Solution> {
        if points.is_empty() {
            log::debug!("No points, nothing to enclose");
            return Ok(Solution { hull: Vec::new(), circle: None });
        }

        let vectors = to_unit_vectors(points)?;
        let hull = self.hull_vertices(&vectors);

        // A folded projection can hide boundary points, so search every distinct input
        let candidates: Vec<UnitVector> = if hull.faithful {
            hull.vertices.iter().map(|p| p.source).collect()
        } else {
            distinct(&vectors)
        };

        if let Some(limit) = self.config.max_hull_size {
            if candidates.len() > limit {
                return Err(Error::HullTooLarge { size: candidates.len(), limit });
            }
        }

        log::debug!("{} points reduced to {} candidate vertices", points.len(), candidates.len());

        let indices: Vec<usize> = hull.vertices.iter().map(|p| p.index).collect();

        if let [only] = hull.vertices.as_slice() {
            if vectors.iter().all(|v| *v == only.source) {
                return Ok(Solution {
                    circle: Some(self.single_vertex_circle(points, only.index)),
                    hull: indices,
                });
            }
        }

        let Some(best) = self.best_candidate(&candidates, &vectors) else {
            log::warn!("No candidate circle covers all {} points", points.len());
            return Ok(Solution { hull: indices, circle: None });
        };

        let center = best.center.to_geo_point();
        let reference = vectors
            .iter()
            .position(|&v| {
                (angular_distance(best.center, v) - best.angular_radius).abs()
                    < self.config.boundary_tolerance
            })
            .unwrap_or(0);

        Ok(Solution {
            hull: indices,
            circle: Some(EnclosingCircle {
                center,
                radius_meters: haversine_distance(&center, &points[reference]),
                angular_radius: best.angular_radius,
                reference: points[reference],
            }),
        })
    }

    /// Solves independent point sets in parallel
    pub fn solve_many(&self, sets: &[Vec<GeoPoint>]) -> Vec<Result<Option<EnclosingCircle>>> {
        sets.par_iter().map(|points| self.solve(points)).collect()
    }

    /// Tangent plane whose open hemisphere holds every point: the configured
    /// base if it qualifies, otherwise the centroid
    fn plane_for(&self, vectors: &[UnitVector]) -> Option<TangentPlane> {
        let in_front = |base: &UnitVector| vectors.iter().all(|v| base.dot(v) > 0.0);

        let configured = self.config.base.resolve(vectors);
        if in_front(&configured) {
            return Some(TangentPlane::new(configured));
        }

        let fallback = centroid(vectors).filter(|base| in_front(base))?;
        log::warn!(
            "{:?} base folds {} points onto each other, projecting at their centroid",
            self.config.base,
            vectors.len()
        );
        Some(TangentPlane::new(fallback))
    }

    fn hull_vertices(&self, vectors: &[UnitVector]) -> Hull {
        if vectors.is_empty() {
            return Hull { vertices: Vec::new(), faithful: true };
        }

        match self.plane_for(vectors) {
            Some(plane) => Hull { vertices: convex_hull(plane.project_many(vectors)), faithful: true },
            None => {
                log::warn!("{} points span more than a hemisphere, hull is approximate", vectors.len());
                let plane = TangentPlane::new(TangentBase::Centroid.resolve(vectors));
                Hull { vertices: convex_hull(plane.project_many(vectors)), faithful: false }
            }
        }
    }

    /// All inputs coincide with one hull vertex: the circle is that point
    fn single_vertex_circle(&self, points: &[GeoPoint], index: usize) -> EnclosingCircle {
        let center = points[index];
        let (reference, radius_meters) = points
            .iter()
            .map(|p| (*p, haversine_distance(&center, p)))
            .fold((center, 0.0), |best, next| if next.1 > best.1 { next } else { best });

        let vector = center.to_unit_vector();
        let angular_radius = points
            .iter()
            .map(|p| angular_distance(vector, p.to_unit_vector()))
            .fold(0.0, f64::max);

        EnclosingCircle { center, radius_meters, angular_radius, reference }
    }

    /// Smallest circle through three hull vertices, or centered between
    /// two, that contains every point
    fn best_candidate(&self, hull: &[UnitVector], points: &[UnitVector]) -> Option<Circle> {
        let epsilon = self.config.epsilon;
        let mut best: Option<Circle> = None;
        let mut consider = |candidate: Circle| {
            let smaller = best.map_or(true, |b| candidate.angular_radius < b.angular_radius);
            if smaller && candidate.contains_all(points, epsilon) {
                best = Some(candidate);
            }
        };

        let n = hull.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    // Repeated points have no circumcircle; skip them
                    if let Some(circle) = Circle::through(hull[i], hull[j], hull[k]) {
                        consider(circle);
                    }
                }
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(center) = midpoint(hull[i], hull[j]) {
                    consider(Circle::covering(center, points));
                }
            }
        }

        best
    }
}

/// Input vectors with exact repeats removed, first occurrence kept
fn distinct(vectors: &[UnitVector]) -> Vec<UnitVector> {
    let mut unique: Vec<UnitVector> = Vec::with_capacity(vectors.len());
    for v in vectors {
        if !unique.contains(v) {
            unique.push(*v);
        }
    }
    unique
}

fn to_unit_vectors(points: &[GeoPoint]) -> Result<Vec<UnitVector>> {
    points
        .iter()
        .map(|p| {
            p.validate()?;
            Ok(p.to_unit_vector())
        })
        .collect()
}
