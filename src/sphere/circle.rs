use crate::projection::UnitVector;

/// Below this sine of the angle between the two chords a triple counts as collinear
const COLLINEAR_SINE: f64 = 1e-12;

/// A circle on the unit sphere: a center direction and an angular radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: UnitVector,
    /// Radius in radians, never negative
    pub angular_radius: f64,
}

impl Circle {
    pub fn new(center: UnitVector, angular_radius: f64) -> Self {
        Self { center, angular_radius: angular_radius.max(0.0) }
    }

    /// Circle through three points, or `None` if they are collinear on the sphere
    pub fn through(a: UnitVector, b: UnitVector, c: UnitVector) -> Option<Self> {
        let center = circumcenter(a, b, c)?;
        Some(Self::new(center, angular_distance(center, a)))
    }

    /// Circle centered at `center` just large enough to cover every point
    pub fn covering(center: UnitVector, points: &[UnitVector]) -> Self {
        let radius = points
            .iter()
            .map(|&p| angular_distance(center, p))
            .fold(0.0, f64::max);
        Self::new(center, radius)
    }

    /// True when `p` lies within the radius, allowing `epsilon` radians of slack
    pub fn contains(&self, p: UnitVector, epsilon: f64) -> bool {
        angular_distance(self.center, p) <= self.angular_radius + epsilon
    }

    pub fn contains_all(&self, points: &[UnitVector], epsilon: f64) -> bool {
        points.iter().all(|&p| self.contains(p, epsilon))
    }
}

/// Point on the sphere angularly equidistant from `a`, `b` and `c`.
///
/// The center is the normal of the plane through the three points, flipped
/// onto the same hemisphere as `a`. Returns `None` for collinear or
/// repeated points, which have no unique circumcircle.
pub fn circumcenter(a: UnitVector, b: UnitVector, c: UnitVector) -> Option<UnitVector> {
    let ab = b.vector() - a.vector();
    let ac = c.vector() - a.vector();
    let normal = ab.cross(&ac);

    let scale = ab.norm() * ac.norm();
    if scale == 0.0 || normal.norm() <= COLLINEAR_SINE * scale {
        return None;
    }

    let center = normal.normalize()?;
    if center.dot(&a) < 0.0 {
        Some(center.antipode())
    } else {
        Some(center)
    }
}

/// Angle in radians between two directions, in [0, pi].
///
/// Equal to `acos(clamp(u . v, -1, 1))`, evaluated through `atan2` so that
/// nearly coincident points keep full precision.
pub fn angular_distance(u: UnitVector, v: UnitVector) -> f64 {
    let (u, v) = (u.vector(), v.vector());
    u.cross(&v).norm().atan2(u.dot(&v).clamp(-1.0, 1.0))
}

/// Great-circle midpoint of two directions; `None` for antipodal points
pub fn midpoint(a: UnitVector, b: UnitVector) -> Option<UnitVector> {
    (a.vector() + b.vector()).normalize()
}

/// True when `p` lies within `circle`, allowing `epsilon` radians of slack
pub fn contains(circle: &Circle, p: UnitVector, epsilon: f64) -> bool {
    circle.contains(p, epsilon)
}
