//! Force / integration model
//!
//! `integrate` holds the pure per-axis math (scalars in, scalars out);
//! `step` applies it to one entity's components for one tick.
//!
//! Horizontal and vertical axes are integrated separately so that ground
//! contact, a one-sided constraint, is resolved without touching lateral
//! motion.

mod integrate;
mod step;

pub use integrate::{
    air_resistance, clamp_speed, displacement, ground_friction, integrate_horizontal,
    integrate_vertical, resolve_ground_contact, AxisStep, ContactResult, DragParams,
    GroundContact,
};
pub use step::{step_body, BodyShape};
