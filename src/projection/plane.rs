use serde::{Deserialize, Serialize};

use crate::projection::coordinate::{UnitVector, Vector3};

/// Fixed world-up axis used to orient the tangent plane
const WORLD_UP: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// Secondary axis used when the base is parallel to `WORLD_UP`
const FALLBACK_UP: Vector3 = Vector3::new(1.0, 0.0, 0.0);

/// How the tangent-plane base direction is chosen for a point set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TangentBase {
    /// Project onto the plane tangent at the north pole.
    ///
    /// The orthographic projection folds the southern hemisphere onto the
    /// northern one, so the solver projects at the centroid instead when a
    /// point lies on or below the equator.
    Pole,
    /// Project onto the plane tangent at the normalized mean of the inputs
    #[default]
    Centroid,
}

impl TangentBase {
    /// Resolves the base direction for the given unit vectors.
    ///
    /// A centroid that cancels out (e.g. an antipodal pair) resolves to the pole.
    pub fn resolve(&self, points: &[UnitVector]) -> UnitVector {
        match self {
            TangentBase::Pole => UnitVector::NORTH_POLE,
            TangentBase::Centroid => centroid(points).unwrap_or_else(|| {
                log::debug!("Centroid of {} points is degenerate, using pole", points.len());
                UnitVector::NORTH_POLE
            }),
        }
    }

    /// Parses "pole" or "centroid"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pole" => Some(TangentBase::Pole),
            "centroid" => Some(TangentBase::Centroid),
            _ => None,
        }
    }
}

/// Normalized mean direction of a set of unit vectors
pub fn centroid(points: &[UnitVector]) -> Option<UnitVector> {
    points
        .iter()
        .fold(Vector3::new(0.0, 0.0, 0.0), |acc, p| acc + p.vector())
        .normalize()
}

/// A point in tangent-plane coordinates that remembers where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub dx: f64,
    pub dy: f64,
    /// The unit vector this point was projected from
    pub source: UnitVector,
    /// Position of the source in the caller's input
    pub index: usize,
}

/// Orthonormal basis of the plane tangent to the sphere at `base`
#[derive(Debug, Clone, Copy)]
pub struct TangentPlane {
    base: UnitVector,
    x_axis: Vector3,
    y_axis: Vector3,
}

impl TangentPlane {
    /// Builds the basis (x, y, z = base) with x = up × base and y = base × x.
    ///
    /// `up` is the world-up axis unless `base` is parallel to it, in which
    /// case the secondary axis is used so the basis is never degenerate.
    pub fn new(base: UnitVector) -> Self {
        let z = base.vector();
        let x_axis = match WORLD_UP.cross(&z).normalize() {
            Some(x) => x,
            None => {
                log::debug!("Tangent base is parallel to world-up, using secondary axis");
                // Unit base is never parallel to both axes at once
                FALLBACK_UP
                    .cross(&z)
                    .normalize()
                    .unwrap_or(UnitVector::PRIME_MERIDIAN)
            }
        };
        let y_axis = z.cross(&x_axis.vector());

        Self { base, x_axis: x_axis.vector(), y_axis }
    }

    pub fn base(&self) -> UnitVector {
        self.base
    }

    /// Projects one point; `index` is kept as the back-reference
    pub fn project(&self, point: UnitVector, index: usize) -> ProjectedPoint {
        let v = point.vector();

        ProjectedPoint {
            dx: v.dot(&self.x_axis),
            dy: v.dot(&self.y_axis),
            source: point,
            index,
        }
    }

    /// Projects a batch of points, indexing them by position
    pub fn project_many(&self, points: &[UnitVector]) -> Vec<ProjectedPoint> {
        points
            .iter()
            .enumerate()
            .map(|(index, &point)| self.project(point, index))
            .collect()
    }
}

/// Projects `points` onto the plane tangent to the sphere at `base`
pub fn project_to_plane(base: UnitVector, points: &[UnitVector]) -> Vec<ProjectedPoint> {
    TangentPlane::new(base).project_many(points)
}
