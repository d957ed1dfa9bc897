//! Name-based material resolution.
//!
//! [`MaterialCatalog`] plays the role of the external material database:
//! `find_or_build` returns the cached handle for a name, builds it from a
//! built-in recipe on first request, or reports
//! [`MaterialError::NotFound`]. Callers treat a miss as recoverable — the
//! detector builder keeps its previous material and warns.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::element::{ARGON, CARBON, HYDROGEN, NITROGEN, OXYGEN};
use crate::material::{Material, MaterialHandle, StateOfMatter};

/// Errors from material resolution.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Material not found: {0}")]
    NotFound(String),
}

/// Registry of named materials with lazy construction.
#[derive(Debug, Default)]
pub struct MaterialCatalog {
    cache: HashMap<String, MaterialHandle>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a material by name, building it on first request.
    pub fn find_or_build(&mut self, name: &str) -> Result<MaterialHandle, MaterialError> {
        if let Some(handle) = self.cache.get(name) {
            return Ok(handle.clone());
        }
        let material =
            build_recipe(name).ok_or_else(|| MaterialError::NotFound(name.to_owned()))?;
        let handle = Arc::new(material);
        self.cache.insert(name.to_owned(), handle.clone());
        Ok(handle)
    }

    /// Names this catalog can resolve.
    pub fn available() -> [&'static str; 4] {
        ["Air", "Argon", "Poly", "Water"]
    }
}

fn build_recipe(name: &str) -> Option<Material> {
    match name {
        "Air" => Some(Material::from_mass_fractions(
            "Air",
            1.205e-3,
            StateOfMatter::Gas,
            293.0,
            1.0,
            vec![(NITROGEN, 0.7), (OXYGEN, 0.3)],
        )),
        "Water" => Some(Material::from_atom_counts(
            "Water",
            1.0,
            StateOfMatter::Liquid,
            293.0,
            1.0,
            vec![(HYDROGEN, 2), (OXYGEN, 1)],
        )),
        // Polyethylene shield stock.
        "Poly" => Some(Material::from_atom_counts(
            "Poly",
            0.96,
            StateOfMatter::Solid,
            293.0,
            1.0,
            vec![(CARBON, 2), (HYDROGEN, 4)],
        )),
        // Argon at the 2 bar gas-factor density (3.28 g/L), booked as
        // liquid at 77 K in the detector description.
        "Argon" => Some(Material::elemental(
            "Argon",
            ARGON,
            3.28e-3,
            StateOfMatter::Liquid,
            77.0,
            1.0,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Composition;
    use approx::assert_relative_eq;

    #[test]
    fn lookup_is_cached() {
        let mut catalog = MaterialCatalog::new();
        let first = catalog.find_or_build("Argon").expect("built-in recipe");
        let second = catalog.find_or_build("Argon").expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut catalog = MaterialCatalog::new();
        let err = catalog.find_or_build("Unobtainium").expect_err("no recipe");
        assert!(matches!(err, MaterialError::NotFound(name) if name == "Unobtainium"));
    }

    #[test]
    fn air_mass_fractions_sum_to_one() {
        let mut catalog = MaterialCatalog::new();
        let air = catalog.find_or_build("Air").expect("built-in recipe");
        let Composition::ByMassFraction(parts) = &air.composition else {
            panic!("air is specified by mass fraction");
        };
        let total: f64 = parts.iter().map(|(_, f)| f).sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-12);
        assert_relative_eq!(air.density_g_cm3, 1.205e-3);
    }

    #[test]
    fn argon_recipe_keeps_the_recorded_state_and_density() {
        let mut catalog = MaterialCatalog::new();
        let argon = catalog.find_or_build("Argon").expect("built-in recipe");
        assert_eq!(argon.state, StateOfMatter::Liquid);
        assert_relative_eq!(argon.density_g_cm3, 3.28e-3);
        assert_relative_eq!(argon.temperature_k, 77.0);
    }

    #[test]
    fn every_advertised_name_resolves() {
        let mut catalog = MaterialCatalog::new();
        for name in MaterialCatalog::available() {
            catalog.find_or_build(name).expect("advertised recipe");
        }
    }
}
