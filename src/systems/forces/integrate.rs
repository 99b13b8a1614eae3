/// Drag inputs for one entity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragParams {
    pub air_density: f32,
    pub drag_coefficient: f32,
    /// Reference area facing the motion
    pub area: f32,
}

/// Result of integrating one axis for one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStep {
    /// Displacement to add to the position
    pub d: f32,
    /// Net force
    pub f: f32,
    /// New acceleration (f / mass)
    pub a: f32,
    /// New velocity
    pub v: f32,
}

/// `-0.5 * rho * Cd * A * v²`, signed so it always opposes `v`
#[inline]
pub fn air_resistance(v: f32, drag: &DragParams) -> f32 {
    if v == 0.0 {
        return 0.0;
    }
    -0.5 * drag.air_density * drag.drag_coefficient * drag.area * v * v * v.signum()
}

/// Grounded friction removes a fraction of the force
#[inline]
pub fn ground_friction(force: f32, coefficient: f32) -> f32 {
    force - force * coefficient
}

/// `v*dt + 0.5*a*dt²`
#[inline]
pub fn displacement(v: f32, a: f32, dt: f32) -> f32 {
    v * dt + 0.5 * a * dt * dt
}

#[inline]
pub fn clamp_speed(v: f32, terminal: f32) -> f32 {
    v.clamp(-terminal, terminal)
}

/// One horizontal axis.
///
/// `friction` is the coefficient in effect while grounded, `None` in the
/// air. `mass` must be positive; the caller guards it.
pub fn integrate_horizontal(
    v: f32,
    a: f32,
    mass: f32,
    dt: f32,
    drag: &DragParams,
    friction: Option<f32>,
    terminal: f32,
) -> AxisStep {
    let mut f = mass * a + air_resistance(v, drag);
    if let Some(mu) = friction {
        f = ground_friction(f, mu);
    }

    let d = displacement(v, a, dt);
    let a_next = f / mass;
    let v_next = clamp_speed(v + a_next * dt, terminal);

    AxisStep { d, f, a: a_next, v: v_next }
}

/// Vertical axis while airborne: gravity plus drag, no speed clamp.
pub fn integrate_vertical(
    v: f32,
    a: f32,
    mass: f32,
    dt: f32,
    gravity: f32,
    drag: &DragParams,
) -> AxisStep {
    let f = mass * gravity + air_resistance(v, drag);
    let d = displacement(v, a, dt);
    let a_next = f / mass;

    AxisStep { d, f, a: a_next, v: v + a_next * dt }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundContact {
    /// Above the ground, nothing to resolve
    Airborne,
    /// Touched the ground and rebounded fast enough to leave it again
    Bounced,
    /// Rebound below the grounded threshold
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactResult {
    pub contact: GroundContact,
    pub y: f32,
    pub v: f32,
}

/// Ground plane at y = 0 against a body whose centre sits `half_height`
/// above its lowest point.
///
/// Downward velocity is reflected through `restitution` (a negative
/// scalar); the position is snapped onto the ground on any contact.
pub fn resolve_ground_contact(
    y: f32,
    half_height: f32,
    v: f32,
    restitution: f32,
    grounded_threshold: f32,
) -> ContactResult {
    if y - half_height > 0.0 {
        return ContactResult { contact: GroundContact::Airborne, y, v };
    }

    let v = if v < 0.0 { v * restitution } else { v };
    let contact = if v.abs() < grounded_threshold {
        GroundContact::Settled
    } else {
        GroundContact::Bounced
    };

    ContactResult { contact, y: half_height, v }
}
