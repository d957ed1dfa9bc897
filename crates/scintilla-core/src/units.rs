//! Unit constants.
//!
//! Lengths are stored in millimetres and energies in electronvolts. The
//! constants below let call sites write dimensioned literals (`0.5 * M`,
//! `9.32 * EV`) instead of bare numbers.

pub const MM: f64 = 1.0;
pub const CM: f64 = 10.0 * MM;
pub const M: f64 = 1000.0 * MM;

pub const EV: f64 = 1.0;

/// Format a length with the largest unit that keeps the magnitude at or
/// above one: `best_unit(500.0)` is `"50 cm"`, `best_unit(2500.0)` is
/// `"2.5 m"`.
pub fn best_unit(length_mm: f64) -> String {
    let magnitude = length_mm.abs();
    if magnitude >= M {
        format!("{} m", length_mm / M)
    } else if magnitude >= CM {
        format!("{} cm", length_mm / CM)
    } else {
        format!("{} mm", length_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_unit_picks_the_largest_fitting_unit() {
        assert_eq!(best_unit(2500.0), "2.5 m");
        assert_eq!(best_unit(500.0), "50 cm");
        assert_eq!(best_unit(2.5), "2.5 mm");
        assert_eq!(best_unit(0.0), "0 mm");
        assert_eq!(best_unit(-500.0), "-50 cm");
    }
}
