use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Global tunables of the force model and the intent mapper.
///
/// Every field has a default, so a JSON override only needs the keys it
/// changes: `{"restitution": -0.4}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical acceleration (m/s², negative = down)
    pub gravity: f32,
    /// Density of the surrounding medium (air = 1.2, water ~ 1000)
    pub air_density: f32,
    /// Drag coefficient used by the air resistance term
    pub drag_coefficient: f32,
    /// Fraction of horizontal force removed while grounded
    pub ground_friction: f32,
    /// Ground friction is divided by this while sliding
    pub slide_friction_divisor: f32,
    /// Negative multiplier applied to vertical velocity on ground contact
    pub restitution: f32,
    /// Per-axis horizontal speed limit (m/s)
    pub terminal_speed: f32,
    /// Jump impulse; velocity change is `jump_force / mass`
    pub jump_force: f32,
    /// Acceleration added per tick while forward/backward is held
    pub forward_accel: f32,
    /// Yaw change per tick while a turn key is held (radians)
    pub rotation_speed: f32,
    /// Cosmetic roll while turning (degrees)
    pub lean_angle_deg: f32,
    /// Rebound speed below which an entity settles on the ground
    pub grounded_threshold: f32,
    /// Reference area for drag is `width * height * depth / area_scale`
    pub area_scale: f32,
    /// Upper bound on a single tick's dt (seconds)
    pub max_dt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            air_density: 1.2,
            drag_coefficient: 0.47,
            ground_friction: 0.1,
            slide_friction_divisor: 7.0,
            restitution: -0.2,
            terminal_speed: 30.0,
            jump_force: 500.0,
            forward_accel: 0.2,
            rotation_speed: 0.08,
            lean_angle_deg: 25.0,
            grounded_threshold: 0.5,
            area_scale: 1000.0,
            max_dt: 0.1,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: PhysicsConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("drag_coefficient", self.drag_coefficient),
            ("ground_friction", self.ground_friction),
            ("slide_friction_divisor", self.slide_friction_divisor),
            ("restitution", self.restitution),
            ("terminal_speed", self.terminal_speed),
            ("jump_force", self.jump_force),
            ("forward_accel", self.forward_accel),
            ("rotation_speed", self.rotation_speed),
            ("lean_angle_deg", self.lean_angle_deg),
            ("grounded_threshold", self.grounded_threshold),
            ("area_scale", self.area_scale),
            ("max_dt", self.max_dt),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::Config(format!("{} must be finite", name)));
        }

        if self.terminal_speed <= 0.0 {
            return Err(EngineError::Config("terminal_speed must be positive".into()));
        }
        if !(-1.0..=0.0).contains(&self.restitution) {
            return Err(EngineError::Config("restitution must be in [-1, 0]".into()));
        }
        if !(0.0..=1.0).contains(&self.ground_friction) {
            return Err(EngineError::Config("ground_friction must be in [0, 1]".into()));
        }
        if self.slide_friction_divisor < 1.0 {
            return Err(EngineError::Config("slide_friction_divisor must be >= 1".into()));
        }
        if self.area_scale <= 0.0 {
            return Err(EngineError::Config("area_scale must be positive".into()));
        }
        if self.max_dt <= 0.0 {
            return Err(EngineError::Config("max_dt must be positive".into()));
        }
        if self.air_density < 0.0 || self.drag_coefficient < 0.0 || self.grounded_threshold < 0.0 {
            return Err(EngineError::Config(
                "air_density, drag_coefficient and grounded_threshold must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Ground friction in effect for the given sliding flag
    #[inline]
    pub fn friction_coefficient(&self, sliding: bool) -> f32 {
        if sliding {
            self.ground_friction / self.slide_friction_divisor
        } else {
            self.ground_friction
        }
    }

    #[inline]
    pub fn lean_angle(&self) -> f32 {
        self.lean_angle_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PhysicsConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json(r#"{"restitution": -0.4, "gravity": -3.0}"#).unwrap();
        assert_eq!(config.restitution, -0.4);
        assert_eq!(config.gravity, -3.0);
        assert_eq!(config.terminal_speed, 30.0);
    }

    #[test]
    fn rejects_bad_values() {
        let err = PhysicsConfig::from_json(r#"{"restitution": 0.5}"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(PhysicsConfig::from_json(r#"{"terminal_speed": 0}"#).is_err());
        assert!(PhysicsConfig::from_json(r#"{"max_dt": -1}"#).is_err());
        assert!(PhysicsConfig::from_json("not json").is_err());
    }

    #[test]
    fn sliding_reduces_friction_to_a_seventh() {
        let config = PhysicsConfig::default();
        assert_eq!(config.friction_coefficient(false), 0.1);
        assert!((config.friction_coefficient(true) - 0.1 / 7.0).abs() < 1e-7);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = PhysicsConfig { jump_force: 250.0, ..PhysicsConfig::default() };
        let parsed = PhysicsConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }
}
