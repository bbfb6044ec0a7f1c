//! Constructors for the polygons the game builds bodies from.
//!
//! Every builder validates its dimensions and returns a counter-clockwise
//! [`Polygon`] in world space, centered on the given point.

use std::f64::consts::PI;

use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::polygon::Polygon;

/// Number of arc points used by [`sector`], [`circle`] and [`oval`].
pub const DEFAULT_GRANULARITY: usize = 20;

fn require_positive(name: &'static str, value: f64) -> Result<()> {
    // Also rejects NaN.
    if value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::NonPositiveDimension { name, value })
    }
}

/// Circular sector of `radius` spanning `angle` radians counter-clockwise from +x.
///
/// With `include_center` the center is the first vertex, giving a pie slice;
/// otherwise only the arc points are used.
pub fn sector(radius: f64, center: Vec2, angle: f64, include_center: bool) -> Result<Polygon> {
    sector_with_granularity(radius, center, angle, include_center, DEFAULT_GRANULARITY)
}

/// [`sector`] with an explicit number of arc points.
pub fn sector_with_granularity(
    radius: f64,
    center: Vec2,
    angle: f64,
    include_center: bool,
    granularity: usize,
) -> Result<Polygon> {
    require_positive("radius", radius)?;
    require_positive("angle", angle)?;

    let mut vertices = Vec::with_capacity(granularity + 1);
    if include_center {
        vertices.push(center);
    }
    let arm = Vec2::new(radius, 0.0);
    for i in 0..granularity {
        let step = i as f64 * angle / granularity as f64;
        vertices.push(center + arm.rotate(step));
    }
    Polygon::new(vertices)
}

/// Regular polygon approximating a circle.
pub fn circle(radius: f64, center: Vec2) -> Result<Polygon> {
    sector(radius, center, 2.0 * PI, false)
}

/// Ellipse of the given full `width` and `height` radius ratio.
///
/// Built as a circle of radius `height` whose horizontal offsets are stretched
/// by `width / height`.
pub fn oval(width: f64, height: f64, center: Vec2) -> Result<Polygon> {
    require_positive("width", width)?;
    require_positive("height", height)?;

    let stretch = width / height;
    let base = circle(height, center)?;
    let vertices = base
        .vertices()
        .iter()
        .map(|v| Vec2::new(center.x + (v.x - center.x) * stretch, v.y))
        .collect();
    Polygon::new(vertices)
}

/// Axis-aligned rectangle centered on `center`.
pub fn rectangle(center: Vec2, width: f64, height: f64) -> Result<Polygon> {
    require_positive("width", width)?;
    require_positive("height", height)?;

    let half_w = width / 2.0;
    let half_h = height / 2.0;
    Polygon::new(vec![
        Vec2::new(center.x + half_w, center.y + half_h),
        Vec2::new(center.x - half_w, center.y + half_h),
        Vec2::new(center.x - half_w, center.y - half_h),
        Vec2::new(center.x + half_w, center.y - half_h),
    ])
}

/// Star with `corners` points, alternating outer and inner vertices.
///
/// The first outer point sits straight above the center.
pub fn star(outer_radius: f64, inner_radius: f64, corners: usize, center: Vec2) -> Result<Polygon> {
    require_positive("outer_radius", outer_radius)?;
    require_positive("inner_radius", inner_radius)?;
    if corners < 2 {
        return Err(PhysicsError::TooFewVertices { count: corners * 2 });
    }

    let long_arm = Vec2::new(0.0, outer_radius);
    let short_arm = Vec2::new(0.0, inner_radius).rotate(PI / corners as f64);
    let mut vertices = Vec::with_capacity(2 * corners);
    for i in 0..corners {
        let turn = 2.0 * PI * i as f64 / corners as f64;
        vertices.push(center + long_arm.rotate(turn));
        vertices.push(center + short_arm.rotate(turn));
    }
    Polygon::new(vertices)
}
