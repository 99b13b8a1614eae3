use crate::core::math::Vec3;
use crate::systems::rigid_body::PhysicsState;

/// One-dimensional elastic collision along each horizontal axis.
///
/// Both pre-collision velocities are read before either body is written,
/// so the result does not depend on argument order. Equal masses swap
/// velocities. Vertical velocity is left to ground contact resolution.
pub fn handle_collision(a: &mut PhysicsState, b: &mut PhysicsState) {
    if !a.has_valid_mass() || !b.has_valid_mass() {
        return;
    }

    let (m1, m2) = (a.mass, b.mass);
    let (v1, v2) = (a.v, b.v);
    let total = m1 + m2;

    let exchange = |mine: f32, mass_mine: f32, other: f32, mass_other: f32| {
        ((mass_mine - mass_other) * mine + 2.0 * mass_other * other) / total
    };

    a.v.x = exchange(v1.x, m1, v2.x, m2);
    a.v.z = exchange(v1.z, m1, v2.z, m2);
    b.v.x = exchange(v2.x, m2, v1.x, m1);
    b.v.z = exchange(v2.z, m2, v1.z, m1);
}

/// Horizontal closing test: relative velocity points against the separation
pub fn is_approaching(pos_a: Vec3, vel_a: Vec3, pos_b: Vec3, vel_b: Vec3) -> bool {
    let separation = Vec3::new(pos_b.x - pos_a.x, 0.0, pos_b.z - pos_a.z);
    let closing = Vec3::new(vel_b.x - vel_a.x, 0.0, vel_b.z - vel_a.z);
    separation.dot(closing) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_masses_swap_velocities() {
        let mut a = PhysicsState::new(5.0).with_velocity(Vec3::new(3.0, 0.0, -2.0));
        let mut b = PhysicsState::new(5.0).with_velocity(Vec3::new(-3.0, 0.0, 2.0));
        handle_collision(&mut a, &mut b);
        assert_eq!(a.v, Vec3::new(-3.0, 0.0, 2.0));
        assert_eq!(b.v, Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn momentum_is_conserved_for_unequal_masses() {
        let mut a = PhysicsState::new(40.0).with_velocity(Vec3::new(4.0, 0.0, 1.0));
        let mut b = PhysicsState::new(5.0).with_velocity(Vec3::new(0.0, 0.0, -1.0));
        let before = a.v * a.mass + b.v * b.mass;
        handle_collision(&mut a, &mut b);
        let after = a.v * a.mass + b.v * b.mass;
        assert!(before.abs_diff_eq(after, 1e-4));
        // the light body is knocked away faster than the heavy one was moving
        assert!(b.v.x > 4.0);
    }

    #[test]
    fn argument_order_does_not_matter() {
        let a0 = PhysicsState::new(15.0).with_velocity(Vec3::new(2.0, 0.0, 0.5));
        let b0 = PhysicsState::new(5.0).with_velocity(Vec3::new(-1.0, 0.0, 0.0));

        let (mut a1, mut b1) = (a0, b0);
        handle_collision(&mut a1, &mut b1);
        let (mut a2, mut b2) = (a0, b0);
        handle_collision(&mut b2, &mut a2);

        assert_eq!(a1.v, a2.v);
        assert_eq!(b1.v, b2.v);
    }

    #[test]
    fn vertical_velocity_and_invalid_masses_are_untouched() {
        let mut a = PhysicsState::new(1.0).with_velocity(Vec3::new(1.0, 5.0, 0.0));
        let mut b = PhysicsState::new(1.0).with_velocity(Vec3::new(-1.0, -2.0, 0.0));
        handle_collision(&mut a, &mut b);
        assert_eq!((a.v.y, b.v.y), (5.0, -2.0));

        let mut massless = PhysicsState::new(0.0).with_velocity(Vec3::X);
        let mut other = PhysicsState::new(1.0);
        handle_collision(&mut massless, &mut other);
        assert_eq!(massless.v, Vec3::X);
        assert_eq!(other.v, Vec3::ZERO);
    }

    #[test]
    fn approaching_depends_on_relative_motion() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert!(is_approaching(a, Vec3::X, b, Vec3::ZERO));
        assert!(!is_approaching(a, -Vec3::X, b, Vec3::ZERO));
        assert!(!is_approaching(a, Vec3::ZERO, b, Vec3::ZERO));
        // vertical motion alone never closes a horizontal gap
        assert!(!is_approaching(a, Vec3::Y, b, -Vec3::Y));
    }
}
