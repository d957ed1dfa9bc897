//! Chemical elements used by the built-in material recipes.

/// A chemical element entering a material composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Atomic number.
    pub z: u32,
    /// Molar mass (g/mol).
    pub molar_mass_g_mole: f64,
}

pub const HYDROGEN: Element = Element { symbol: "H", name: "Hydrogen", z: 1, molar_mass_g_mole: 1.0 };
pub const CARBON: Element = Element { symbol: "C", name: "Carbon", z: 6, molar_mass_g_mole: 12.00 };
pub const NITROGEN: Element = Element { symbol: "N", name: "Nitrogen", z: 7, molar_mass_g_mole: 14.01 };
pub const OXYGEN: Element = Element { symbol: "O", name: "Oxygen", z: 8, molar_mass_g_mole: 16.00 };
pub const ARGON: Element = Element { symbol: "Ar", name: "Argon", z: 18, molar_mass_g_mole: 40.00 };
