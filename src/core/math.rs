//! Math primitives: glam vectors plus the ray and box helpers the
//! collision systems need.

pub use glam::{EulerRot, Mat4, Quat, Vec3};

/// Rays shorter than this have no usable direction
const RAY_EPSILON: f32 = 1e-6;
/// Triangles whose determinant falls below this are parallel to the ray
const DET_EPSILON: f32 = 1e-9;

/// Half-line with a unit direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Ray from `origin` through `target`, plus the distance between them.
    ///
    /// Returns `None` when the points coincide (or are not finite), so callers
    /// never normalize a zero-length direction.
    pub fn towards(origin: Vec3, target: Vec3) -> Option<(Self, f32)> {
        let delta = target - origin;
        let len = delta.length();
        if !len.is_finite() || len < RAY_EPSILON {
            return None;
        }
        Some((Self { origin, dir: delta / len }, len))
    }

    /// Möller–Trumbore intersection against a two-sided triangle.
    ///
    /// Returns the distance along the ray to the hit point.
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        let e1 = b - a;
        let e2 = c - a;
        let p = self.dir.cross(e2);
        let det = e1.dot(p);
        if det.abs() < DET_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(e1);
        let v = self.dir.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(q) * inv_det;
        (t > RAY_EPSILON).then_some(t)
    }

    /// Nearest hit over a list of world-space triangles
    pub fn nearest_hit(&self, triangles: &[[Vec3; 3]]) -> Option<f32> {
        triangles
            .iter()
            .filter_map(|[a, b, c]| self.intersect_triangle(*a, *b, *c))
            .min_by(|x, y| x.total_cmp(y))
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Bounds of a point cloud; `None` for an empty set.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Closed-interval overlap: touching faces count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn towards_rejects_zero_length() {
        assert!(Ray::towards(Vec3::ONE, Vec3::ONE).is_none());
        let (ray, len) = Ray::towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(len, 2.0);
        assert_eq!(ray.dir, Vec3::Z);
    }

    #[test]
    fn ray_hits_triangle_from_either_side() {
        let a = Vec3::new(-1.0, -1.0, 1.0);
        let b = Vec3::new(1.0, -1.0, 1.0);
        let c = Vec3::new(0.0, 1.0, 1.0);

        let front = Ray { origin: Vec3::ZERO, dir: Vec3::Z };
        let t = front.intersect_triangle(a, b, c).unwrap();
        assert!((t - 1.0).abs() < 1e-6);

        let back = Ray { origin: Vec3::new(0.0, 0.0, 2.0), dir: -Vec3::Z };
        let t = back.intersect_triangle(a, b, c).unwrap();
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ray_misses_behind_and_beside() {
        let a = Vec3::new(-1.0, -1.0, 1.0);
        let b = Vec3::new(1.0, -1.0, 1.0);
        let c = Vec3::new(0.0, 1.0, 1.0);

        let away = Ray { origin: Vec3::ZERO, dir: -Vec3::Z };
        assert!(away.intersect_triangle(a, b, c).is_none());

        let beside = Ray { origin: Vec3::new(5.0, 0.0, 0.0), dir: Vec3::Z };
        assert!(beside.intersect_triangle(a, b, c).is_none());

        let parallel = Ray { origin: Vec3::ZERO, dir: Vec3::X };
        assert!(parallel.intersect_triangle(a, b, c).is_none());
    }

    #[test]
    fn aabb_from_points_and_touching_overlap() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());

        let a = Aabb::from_points([Vec3::ZERO, Vec3::ONE]).unwrap();
        let b = Aabb::from_points([Vec3::new(1.0, 0.5, 0.5), Vec3::splat(2.0)]).unwrap();
        assert_eq!(a.size(), Vec3::ONE);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Aabb::from_points([Vec3::splat(1.01), Vec3::splat(2.0)]).unwrap();
        assert!(!a.overlaps(&c));
    }
}
