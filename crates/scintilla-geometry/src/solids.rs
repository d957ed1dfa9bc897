//! Solid shapes.
//!
//! The detector model only needs two solid families: axis-aligned cuboids
//! and the subtraction of one cuboid from another (a hollow shell). Solids
//! are pure shape — material and placement live on the volumes that
//! reference them.

use crate::store::SolidId;

/// A solid shape registered in a [`GeometryStore`](crate::store::GeometryStore).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    Cuboid(Cuboid),
    /// `outer` minus `inner`. When `inner` nests inside `outer` this is a
    /// hollow shell; when `inner` is the larger of the two the material
    /// ends up on the outside of the cavity instead, which the detector
    /// model uses deliberately for negative shield thicknesses.
    Subtraction { outer: SolidId, inner: SolidId },
}

/// An axis-aligned cuboid centred on its placement point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    /// Half-extents along x, y, z (mm).
    pub half_extents: [f64; 3],
}

impl Cuboid {
    pub fn new(hx: f64, hy: f64, hz: f64) -> Self {
        Self { half_extents: [hx, hy, hz] }
    }

    /// Check whether a point lies inside this cuboid.
    pub fn contains(&self, point: &[f64; 3]) -> bool {
        point[0].abs() <= self.half_extents[0]
            && point[1].abs() <= self.half_extents[1]
            && point[2].abs() <= self.half_extents[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_containment_is_inclusive() {
        let c = Cuboid::new(1.0, 2.0, 3.0);
        assert!(c.contains(&[0.0, 0.0, 0.0]));
        assert!(c.contains(&[1.0, -2.0, 3.0]));
        assert!(!c.contains(&[1.1, 0.0, 0.0]));
        assert!(!c.contains(&[0.0, 0.0, -3.5]));
    }
}
