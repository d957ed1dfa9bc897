//! Primary optical-photon source.
//!
//! [`PhotonGun`] produces one primary vertex per call: an isotropically
//! random momentum direction, a polarization vector constrained orthogonal
//! to it, and an energy drawn uniformly from the VUV emission band. The
//! vertex is committed to the caller's [`EventSink`]; nothing persists
//! between calls except the random stream and the cached species.

use nalgebra::Vector3;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Seedable random source shared with the run driver, which owns the
/// seeding lifecycle.
pub use rand_xoshiro::Xoshiro256StarStar as PRng;

/// Emission band bounds in eV, named by vacuum wavelength. The sampled
/// energy always lies in [9.32, 10.08] eV.
pub const E_133NM_EV: f64 = 9.32;
pub const E_123NM_EV: f64 = 10.08;

/// Threshold below which a cross product is treated as collapsed and the
/// fallback reference axis is used instead.
const PARALLEL_EPS: f64 = 1e-9;

/// Particle species carried by a primary vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParticleKind {
    OpticalPhoton,
}

/// The initial state handed to the transport engine to begin one particle
/// history.
#[derive(Debug, Clone, Serialize)]
pub struct PrimaryVertex {
    /// Emission position (mm).
    pub position: [f64; 3],
    /// Momentum direction (unit vector).
    pub direction: [f64; 3],
    /// Polarization (unit vector, orthogonal to `direction`).
    pub polarization: [f64; 3],
    /// Photon energy (eV).
    pub energy_ev: f64,
    pub particle: ParticleKind,
}

/// Receives the primary vertices of one event.
pub trait EventSink {
    fn add_primary_vertex(&mut self, vertex: PrimaryVertex);
}

/// A plain event container collecting every committed vertex.
#[derive(Debug, Default)]
pub struct Event {
    pub vertices: Vec<PrimaryVertex>,
}

impl EventSink for Event {
    fn add_primary_vertex(&mut self, vertex: PrimaryVertex) {
        self.vertices.push(vertex);
    }
}

/// Isotropic direction distribution over the unit sphere: cos θ uniform in
/// [−1, 1], azimuth uniform in [0, 2π).
#[derive(Clone, Copy, Debug)]
pub struct UnitSphere;

impl Distribution<Vector3<f64>> for UnitSphere {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let azimuth: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let r = (1.0 - z * z).sqrt();
        Vector3::new(r * azimuth.cos(), r * azimuth.sin(), z)
    }
}

/// Unit vector orthogonal to `direction`.
///
/// Crosses `direction` with x̂; when `direction` is parallel or
/// antiparallel to x̂ the product collapses below the 1e-9 threshold and ŷ
/// is crossed instead, so the result is well defined and unit length for
/// every input direction.
pub fn transverse_polarization(direction: Vector3<f64>) -> Vector3<f64> {
    let mut polarization = direction.cross(&Vector3::x());
    if polarization.norm() < PARALLEL_EPS {
        polarization = direction.cross(&Vector3::y());
    }
    polarization.normalize()
}

/// Optical-photon gun emitting one primary vertex per call from the
/// coordinate origin.
pub struct PhotonGun {
    rng: PRng,
    particle: ParticleKind,
}

impl PhotonGun {
    /// Wrap an already-seeded random source. Seeding and reset belong to
    /// the run driver, not to the gun.
    pub fn new(rng: PRng) -> Self {
        Self { rng, particle: ParticleKind::OpticalPhoton }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(PRng::seed_from_u64(seed))
    }

    /// Sample one primary vertex and commit it to `sink`.
    pub fn generate_primaries<S: EventSink>(&mut self, sink: &mut S) {
        let direction = UnitSphere.sample(&mut self.rng);
        let polarization = transverse_polarization(direction);
        let energy_ev = self.rng.gen_range(E_133NM_EV..=E_123NM_EV);

        sink.add_primary_vertex(PrimaryVertex {
            position: [0.0; 3],
            direction: direction.into(),
            polarization: polarization.into(),
            energy_ev,
            particle: self.particle,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polarization_is_orthogonal_for_a_generic_direction() {
        let direction = Vector3::new(1.0, 2.0, -2.0).normalize();
        let polarization = transverse_polarization(direction);
        assert_relative_eq!(polarization.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(polarization.dot(&direction), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn x_axis_direction_falls_back_to_the_y_reference() {
        // x̂ × ŷ = ẑ, so the fallback must yield ±ẑ exactly.
        let polarization = transverse_polarization(Vector3::x());
        assert_relative_eq!(polarization.z.abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(polarization.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(polarization.y, 0.0, epsilon = 1e-12);

        let flipped = transverse_polarization(-Vector3::x());
        assert_relative_eq!(flipped.z.abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn near_parallel_direction_still_normalizes() {
        let direction = Vector3::new(1.0, 1e-12, 0.0).normalize();
        let polarization = transverse_polarization(direction);
        assert_relative_eq!(polarization.norm(), 1.0, epsilon = 1e-9);
    }
}
