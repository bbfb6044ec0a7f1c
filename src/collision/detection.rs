use super::info::CollisionInfo;
use crate::math::vec2::Vec2;
use crate::shapes::edge_normals;

/// Projects a vertex loop onto `axis` and returns the `(min, max)` interval.
fn project_onto_axis(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;
    for vertex in vertices {
        let projection = vertex.dot(axis);
        min_proj = min_proj.min(projection);
        max_proj = max_proj.max(projection);
    }
    (min_proj, max_proj)
}

/// Separating Axis Theorem test between two convex polygons.
///
/// Candidate axes are the edge normals of `shape1` followed by those of
/// `shape2`. The first axis with disjoint projections ends the test. Otherwise
/// the axis with the smallest overlap across both sets becomes the MTV,
/// oriented so that moving `shape2` by `+axis` (or `shape1` by `-axis`)
/// separates the pair.
///
/// Both inputs are borrowed and left untouched.
pub fn find_collision(shape1: &[Vec2], shape2: &[Vec2]) -> CollisionInfo {
    let mut min_overlap = f64::INFINITY;
    let mut mtv = Vec2::ZERO;

    let axes = edge_normals(shape1).into_iter().chain(edge_normals(shape2));
    for axis in axes {
        let (min1, max1) = project_onto_axis(shape1, axis);
        let (min2, max2) = project_onto_axis(shape2, axis);

        // Push shape2 forward along the axis, or push it back.
        let forward = max1 - min2;
        let backward = max2 - min1;
        if forward < 0.0 || backward < 0.0 {
            return CollisionInfo::separated();
        }

        let (overlap, direction) = if forward <= backward {
            (forward, axis)
        } else {
            (backward, -axis)
        };
        if overlap < min_overlap {
            min_overlap = overlap;
            mtv = direction * overlap;
        }
    }

    if min_overlap.is_infinite() {
        // No usable axis: every edge was degenerate
        return CollisionInfo::separated();
    }

    CollisionInfo { collided: true, axis: mtv }
}
