use crate::core::math::{EulerRot, Quat, Vec3};

/// Rigid body kinematics, mutated once per tick by the force model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsState {
    /// Displacement applied during the last tick
    pub d: Vec3,
    /// Net force from the last tick
    pub f: Vec3,
    /// Velocity (m/s)
    pub v: Vec3,
    /// Acceleration. Horizontal axes hold this tick's input push only;
    /// the vertical axis holds the last airborne f / mass.
    pub a: Vec3,
    /// Mass in kilograms, must stay positive
    pub mass: f32,
}

impl PhysicsState {
    pub fn new(mass: f32) -> Self {
        Self {
            d: Vec3::ZERO,
            f: Vec3::ZERO,
            v: Vec3::ZERO,
            a: Vec3::ZERO,
            mass,
        }
    }

    pub fn with_velocity(mut self, v: Vec3) -> Self {
        self.v = v;
        self
    }

    /// Mass is usable for force resolution
    #[inline]
    pub fn has_valid_mass(&self) -> bool {
        self.mass > 0.0 && self.mass.is_finite()
    }

    /// Instant velocity change of `impulse / mass`
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if !self.has_valid_mass() {
            return;
        }
        self.v += impulse / self.mass;
    }

    /// Drop last tick's horizontal push before intent runs again
    pub fn clear_input(&mut self) {
        self.a.x = 0.0;
        self.a.z = 0.0;
    }

    /// Zero the vertical force terms of a settled body
    pub fn settle_vertical(&mut self) {
        self.a.y = 0.0;
        self.f.y = 0.0;
        self.d.y = 0.0;
    }
}

/// Locomotion flags and heading of an entity
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    /// Resting on the ground; vertical integration is suspended
    pub grounded: bool,
    /// Ground friction reduced
    pub sliding: bool,
    /// Heading around +y (radians)
    pub yaw: f32,
    /// Cosmetic lean (radians), recomputed every tick
    pub roll: f32,
}

impl MotionState {
    pub fn grounded() -> Self {
        Self { grounded: true, ..Self::default() }
    }

    /// Rotation to put on the mesh transform
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, 0.0, self.roll)
    }
}
