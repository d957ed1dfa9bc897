//! Arena-backed geometry registries.
//!
//! A [`GeometryStore`] owns every solid, logical volume, and placement of
//! one geometry description. Entries are addressed by typed ids into
//! internal arenas rather than by shared references, so aliasing and
//! lifetime are explicit: an id is only meaningful against the store that
//! issued it, and [`GeometryStore::clear`] invalidates every id issued so
//! far. A rebuild therefore starts with `clear()` and re-registers the full
//! hierarchy from scratch.
//!
//! Names must be unique per entry kind; registering a duplicate is an
//! error rather than a silent shadow.

use nalgebra::Vector3;
use scintilla_materials::MaterialHandle;
use thiserror::Error;

use crate::solids::Solid;

/// Errors from geometry registration.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("A {kind} named '{name}' is already registered")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{kind} id {index} does not refer to a registered entry")]
    UnknownId { kind: &'static str, index: usize },
}

/// Id of a registered [`Solid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolidId(usize);

/// Id of a registered [`LogicalVolume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalId(usize);

/// Id of a registered [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementId(usize);

/// A named solid bound to a material.
#[derive(Debug, Clone)]
pub struct LogicalVolume {
    pub name: String,
    pub solid: SolidId,
    pub material: MaterialHandle,
}

/// A positioned, unrotated instance of a logical volume inside a mother
/// volume. `mother == None` marks the world placement.
#[derive(Debug, Clone)]
pub struct Placement {
    pub name: String,
    pub logical: LogicalId,
    pub mother: Option<LogicalId>,
    pub translation: Vector3<f64>,
}

/// The registries of one geometry description.
#[derive(Debug, Default)]
pub struct GeometryStore {
    solids: Vec<(String, Solid)>,
    logicals: Vec<LogicalVolume>,
    placements: Vec<Placement>,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every registered entry. All previously issued ids become
    /// dangling and must not be reused.
    pub fn clear(&mut self) {
        self.solids.clear();
        self.logicals.clear();
        self.placements.clear();
    }

    /// Register a named solid. Subtraction solids must reference solids
    /// that are already registered.
    pub fn add_solid(&mut self, name: &str, solid: Solid) -> Result<SolidId, GeometryError> {
        if self.solids.iter().any(|(n, _)| n == name) {
            return Err(GeometryError::DuplicateName { kind: "solid", name: name.to_owned() });
        }
        if let Solid::Subtraction { outer, inner } = solid {
            self.check_solid(outer)?;
            self.check_solid(inner)?;
        }
        self.solids.push((name.to_owned(), solid));
        Ok(SolidId(self.solids.len() - 1))
    }

    /// Register a logical volume binding `solid` to `material`.
    pub fn add_logical(
        &mut self,
        name: &str,
        solid: SolidId,
        material: MaterialHandle,
    ) -> Result<LogicalId, GeometryError> {
        if self.logicals.iter().any(|l| l.name == name) {
            return Err(GeometryError::DuplicateName { kind: "logical volume", name: name.to_owned() });
        }
        self.check_solid(solid)?;
        self.logicals.push(LogicalVolume { name: name.to_owned(), solid, material });
        Ok(LogicalId(self.logicals.len() - 1))
    }

    /// Place a logical volume inside `mother` at `translation`, unrotated.
    pub fn place(
        &mut self,
        name: &str,
        logical: LogicalId,
        mother: Option<LogicalId>,
        translation: Vector3<f64>,
    ) -> Result<PlacementId, GeometryError> {
        if self.placements.iter().any(|p| p.name == name) {
            return Err(GeometryError::DuplicateName { kind: "placement", name: name.to_owned() });
        }
        self.check_logical(logical)?;
        if let Some(mother) = mother {
            self.check_logical(mother)?;
        }
        self.placements.push(Placement { name: name.to_owned(), logical, mother, translation });
        Ok(PlacementId(self.placements.len() - 1))
    }

    /// Replace the material of an already-registered logical volume in
    /// place. Placements referencing the volume see the new material
    /// immediately; no rebuild is required.
    pub fn set_material(
        &mut self,
        id: LogicalId,
        material: MaterialHandle,
    ) -> Result<(), GeometryError> {
        let logical = self
            .logicals
            .get_mut(id.0)
            .ok_or(GeometryError::UnknownId { kind: "logical volume", index: id.0 })?;
        logical.material = material;
        Ok(())
    }

    pub fn solid(&self, id: SolidId) -> Option<&Solid> {
        self.solids.get(id.0).map(|(_, s)| s)
    }

    pub fn solid_named(&self, name: &str) -> Option<&Solid> {
        self.solids.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn logical(&self, id: LogicalId) -> Option<&LogicalVolume> {
        self.logicals.get(id.0)
    }

    pub fn logical_named(&self, name: &str) -> Option<&LogicalVolume> {
        self.logicals.iter().find(|l| l.name == name)
    }

    pub fn placement(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.get(id.0)
    }

    pub fn placement_named(&self, name: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.name == name)
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    pub fn logical_count(&self) -> usize {
        self.logicals.len()
    }

    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    fn check_solid(&self, id: SolidId) -> Result<(), GeometryError> {
        if id.0 < self.solids.len() {
            Ok(())
        } else {
            Err(GeometryError::UnknownId { kind: "solid", index: id.0 })
        }
    }

    fn check_logical(&self, id: LogicalId) -> Result<(), GeometryError> {
        if id.0 < self.logicals.len() {
            Ok(())
        } else {
            Err(GeometryError::UnknownId { kind: "logical volume", index: id.0 })
        }
    }
}
