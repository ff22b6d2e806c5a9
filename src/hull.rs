//! Planar convex hull (monotone chain)

use crate::projection::ProjectedPoint;

/// Cross product of (a - o) and (b - o); positive for a left turn
fn turn(o: &ProjectedPoint, a: &ProjectedPoint, b: &ProjectedPoint) -> f64 {
    (a.dx - o.dx) * (b.dy - o.dy) - (a.dy - o.dy) * (b.dx - o.dx)
}

/// Pushes `p` onto `chain`, first popping points that would make a non-left turn
fn push_convex(chain: &mut Vec<ProjectedPoint>, p: ProjectedPoint) {
    while chain.len() >= 2 && turn(&chain[chain.len() - 2], &chain[chain.len() - 1], &p) <= 0.0 {
        chain.pop();
    }
    chain.push(p);
}

/// Computes the convex hull of projected points in O(n log n).
///
/// Vertices come back counter-clockwise starting from the lowest (dx, dy),
/// with collinear points dropped. Points with identical plane coordinates
/// collapse to the one that appeared first in the input. Degenerate inputs
/// produce degenerate hulls: zero points give an empty hull, a single
/// distinct point a one-vertex hull and collinear points a two-vertex
/// segment.
pub fn convex_hull(mut points: Vec<ProjectedPoint>) -> Vec<ProjectedPoint> {
    points.sort_by(|a, b| a.dx.total_cmp(&b.dx).then(a.dy.total_cmp(&b.dy)));
    points.dedup_by(|b, a| a.dx == b.dx && a.dy == b.dy);

    if points.len() <= 2 {
        return points;
    }

    let mut lower: Vec<ProjectedPoint> = Vec::with_capacity(points.len());
    for &p in points.iter() {
        push_convex(&mut lower, p);
    }

    let mut upper: Vec<ProjectedPoint> = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        push_convex(&mut upper, p);
    }

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
