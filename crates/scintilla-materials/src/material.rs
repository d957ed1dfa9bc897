//! Material value types.
//!
//! A [`Material`] is a fixed description — name, bulk density, state,
//! thermodynamic conditions, and elemental composition. Once built it never
//! changes; consumers share it through a [`MaterialHandle`] and swap handles
//! rather than mutating through them.

use std::fmt;
use std::sync::Arc;

use crate::element::Element;

/// Opaque shared handle to a resolved material.
pub type MaterialHandle = Arc<Material>;

/// Aggregate state of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOfMatter {
    Gas,
    Liquid,
    Solid,
}

impl fmt::Display for StateOfMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateOfMatter::Gas => write!(f, "gas"),
            StateOfMatter::Liquid => write!(f, "liquid"),
            StateOfMatter::Solid => write!(f, "solid"),
        }
    }
}

/// Elemental make-up of a material.
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    /// Mass fractions, expected to sum to 1.
    ByMassFraction(Vec<(Element, f64)>),
    /// Atoms per formula unit (e.g. H₂O as [(H, 2), (O, 1)]).
    ByAtomCount(Vec<(Element, u32)>),
}

/// A named substance assignable to logical volumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Bulk density (g/cm³).
    pub density_g_cm3: f64,
    pub state: StateOfMatter,
    pub temperature_k: f64,
    pub pressure_atm: f64,
    pub composition: Composition,
}

impl Material {
    /// A compound specified by mass fractions.
    pub fn from_mass_fractions(
        name: &str,
        density_g_cm3: f64,
        state: StateOfMatter,
        temperature_k: f64,
        pressure_atm: f64,
        parts: Vec<(Element, f64)>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            density_g_cm3,
            state,
            temperature_k,
            pressure_atm,
            composition: Composition::ByMassFraction(parts),
        }
    }

    /// A compound specified by atoms per formula unit.
    pub fn from_atom_counts(
        name: &str,
        density_g_cm3: f64,
        state: StateOfMatter,
        temperature_k: f64,
        pressure_atm: f64,
        parts: Vec<(Element, u32)>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            density_g_cm3,
            state,
            temperature_k,
            pressure_atm,
            composition: Composition::ByAtomCount(parts),
        }
    }

    /// A single-element material.
    pub fn elemental(
        name: &str,
        element: Element,
        density_g_cm3: f64,
        state: StateOfMatter,
        temperature_k: f64,
        pressure_atm: f64,
    ) -> Self {
        Self::from_atom_counts(name, density_g_cm3, state, temperature_k, pressure_atm, vec![(element, 1)])
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.3e} g/cm3, {}, {} K)",
            self.name, self.density_g_cm3, self.state, self.temperature_k
        )
    }
}
