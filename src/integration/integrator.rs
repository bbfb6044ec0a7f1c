use crate::objects::body::Body;

/// Advances a body by `dt` using averaged-velocity Euler.
///
/// ```text
/// dv        = (impulse + dt * force) / mass
/// v'        = v + dv
/// centroid' = centroid + dt * (v + v') / 2
/// ```
///
/// Force and impulse are cleared afterwards. Infinite-mass bodies are left
/// where they are.
pub fn integrate(body: &mut Body, dt: f64) {
    if body.is_static() {
        // Immovable, only drop what was accumulated
        body.clear_accumulators();
        return;
    }

    let inv_mass = body.inverse_mass();
    let old_velocity = body.velocity;
    let delta_v = (body.impulse + body.force * dt) * inv_mass;
    let new_velocity = old_velocity + delta_v;
    let average_velocity = (old_velocity + new_velocity) * 0.5;

    body.velocity = new_velocity;
    body.set_centroid(body.centroid + average_velocity * dt);
    body.clear_accumulators();
}
