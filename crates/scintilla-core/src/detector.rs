//! Parametric detector geometry builder.
//!
//! [`DetectorBuilder`] owns a small set of runtime-mutable dimensions, the
//! four material handles, and the [`GeometryStore`] holding the built
//! hierarchy. [`DetectorBuilder::construct`] derives the dependent
//! dimensions and rebuilds the full World/Shield/Target/Detector tree from
//! scratch; it is safe to call repeatedly, and each call fully supersedes
//! the previous geometry.
//!
//! Mutators never rebuild on their own. Each returns a [`RunAction`]
//! telling the external run driver what is now due: a dimension change
//! invalidates the whole hierarchy (`ReinitializeGeometry`), while a
//! successful material swap patches the built volume in place and only
//! asks for regenerated physics tables (`PhysicsModified`).

use log::{info, warn};
use nalgebra::Vector3;
use scintilla_geometry::{Cuboid, GeometryError, GeometryStore, LogicalId, PlacementId, Solid};
use scintilla_materials::{MaterialCatalog, MaterialError, MaterialHandle};

use crate::units::{best_unit, M};

/// What the external run driver must do after a builder mutation.
#[must_use = "the driver must consume the requested run action"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    /// A dimension changed; the built hierarchy is stale until the next
    /// [`DetectorBuilder::construct`].
    ReinitializeGeometry,
    /// A material was swapped in place; physics tables must be
    /// regenerated, but the geometry is still valid.
    PhysicsModified,
    /// Nothing changed (e.g. an unresolvable material name).
    Unchanged,
}

/// Builder for the nested World/Shield/Target/Detector box hierarchy.
pub struct DetectorBuilder {
    target_length: f64,
    target_radius: f64,
    shield_thickness: f64,
    detector_length: f64,
    detector_thickness: f64,
    inset_radius: f64,
    // Derived on every construct().
    detector_radius: f64,
    world_radius: f64,
    world_length: f64,

    world_material: MaterialHandle,
    target_material: MaterialHandle,
    detector_material: MaterialHandle,
    shield_material: MaterialHandle,

    store: GeometryStore,
    logic_target: Option<LogicalId>,
    logic_detector: Option<LogicalId>,
}

impl DetectorBuilder {
    /// Create a builder with the default dimensions and the default
    /// materials (Air world, Argon target and detector, Poly shield)
    /// resolved from `catalog`. Nothing is built until
    /// [`construct`](Self::construct) is called.
    pub fn new(catalog: &mut MaterialCatalog) -> Result<Self, MaterialError> {
        let world_material = catalog.find_or_build("Air")?;
        let target_material = catalog.find_or_build("Argon")?;
        let detector_material = catalog.find_or_build("Argon")?;
        let shield_material = catalog.find_or_build("Poly")?;

        let target_length = 1.0 * M;
        let target_radius = 0.5 * M;

        Ok(Self {
            target_length,
            target_radius,
            shield_thickness: 0.0,
            detector_length: 5.0 * M,
            detector_thickness: 2.0 * M,
            inset_radius: 0.0,
            // Derived on the first construct().
            detector_radius: 0.0,
            world_radius: 2.0 * target_radius,
            world_length: 2.0 * target_length,
            world_material,
            target_material,
            detector_material,
            shield_material,
            store: GeometryStore::new(),
            logic_target: None,
            logic_detector: None,
        })
    }

    /// Rebuild the full volume hierarchy from the current parameters and
    /// return the world placement.
    ///
    /// The store is cleared first, so every id issued by a previous build
    /// is invalidated before any replacement is registered. Volumes are
    /// built in dependency order — World, Shield, Target, Detector — each
    /// placed at the origin, unrotated. On error the store is left empty,
    /// never half-populated.
    pub fn construct(&mut self) -> Result<PlacementId, GeometryError> {
        self.store.clear();
        self.logic_target = None;
        self.logic_detector = None;

        self.world_radius = 2.0 * self.target_radius;
        self.world_length = 2.0 * self.target_length;
        self.detector_radius = self.target_radius - self.inset_radius;
        if self.detector_radius < 0.0 {
            warn!(
                "inset radius {} exceeds target radius {}; detector cuboid is degenerate",
                best_unit(self.inset_radius),
                best_unit(self.target_radius)
            );
        }

        let s_world = self.store.add_solid(
            "World",
            Solid::Cuboid(Cuboid::new(self.world_radius, self.world_radius, self.world_length / 2.0)),
        )?;
        let l_world = self.store.add_logical("World", s_world, self.world_material.clone())?;
        let world = self.store.place("World", l_world, None, Vector3::zeros())?;

        // Shield: outer box at the target footprint, inner box enlarged by
        // the shield thickness on every axis. For positive thickness the
        // inner box is the larger one and the shell wraps the target; a
        // negative thickness flips the nesting so the shield sits inside
        // the target instead. Both are supported.
        let t = self.shield_thickness;
        let s_out = self.store.add_solid(
            "OutShield",
            Solid::Cuboid(Cuboid::new(self.target_radius, self.target_radius, self.target_length / 2.0)),
        )?;
        let s_in = self.store.add_solid(
            "InShield",
            Solid::Cuboid(Cuboid::new(
                self.target_radius + t,
                self.target_radius + t,
                self.target_length / 2.0 + t,
            )),
        )?;
        let s_shield = self.store.add_solid("Shield", Solid::Subtraction { outer: s_out, inner: s_in })?;
        let l_shield = self.store.add_logical("Shield", s_shield, self.shield_material.clone())?;
        self.store.place("Shield", l_shield, Some(l_world), Vector3::zeros())?;

        // Target, enlarged by the shield thickness so the shell sits flush
        // on its walls.
        let s_target = self.store.add_solid(
            "Target",
            Solid::Cuboid(Cuboid::new(
                self.target_radius + t,
                self.target_radius + t,
                self.target_length / 2.0 + t,
            )),
        )?;
        let l_target = self.store.add_logical("Target", s_target, self.target_material.clone())?;
        self.store.place("Target", l_target, Some(l_world), Vector3::zeros())?;
        self.logic_target = Some(l_target);

        let s_detector = self.store.add_solid(
            "Detector",
            Solid::Cuboid(Cuboid::new(self.detector_radius, self.detector_radius, self.detector_length / 2.0)),
        )?;
        let l_detector = self.store.add_logical("Detector", s_detector, self.detector_material.clone())?;
        self.store.place("Detector", l_detector, Some(l_world), Vector3::zeros())?;
        self.logic_detector = Some(l_detector);

        info!("geometry rebuilt:\n{}", self.print_parameters());
        Ok(world)
    }

    /// Render the current World/Target/Detector/Shield parameter summary.
    pub fn print_parameters(&self) -> String {
        format!(
            " World    : length {}, radius {}, material {}\n \
              Target   : length {}, radius {}, material {}\n \
              Detector : length {}, radius {}, material {}\n \
              Shield   : thickness {}, material {}",
            best_unit(self.world_length),
            best_unit(self.world_radius),
            self.world_material.name,
            best_unit(self.target_length),
            best_unit(self.target_radius),
            self.target_material.name,
            best_unit(self.detector_length),
            best_unit(self.detector_radius),
            self.detector_material.name,
            best_unit(self.shield_thickness),
            self.shield_material.name,
        )
    }

    pub fn set_target_length(&mut self, value: f64) -> RunAction {
        self.target_length = value;
        RunAction::ReinitializeGeometry
    }

    pub fn set_target_radius(&mut self, value: f64) -> RunAction {
        self.target_radius = value;
        RunAction::ReinitializeGeometry
    }

    pub fn set_inset_radius(&mut self, value: f64) -> RunAction {
        self.inset_radius = value;
        RunAction::ReinitializeGeometry
    }

    pub fn set_shield_thickness(&mut self, value: f64) -> RunAction {
        self.shield_thickness = value;
        RunAction::ReinitializeGeometry
    }

    pub fn set_detector_length(&mut self, value: f64) -> RunAction {
        self.detector_length = value;
        RunAction::ReinitializeGeometry
    }

    pub fn set_detector_thickness(&mut self, value: f64) -> RunAction {
        self.detector_thickness = value;
        RunAction::ReinitializeGeometry
    }

    /// Override the detector radius directly. The next
    /// [`construct`](Self::construct) rederives it from the target radius
    /// and inset radius, so the override only survives until then.
    pub fn set_detector_radius(&mut self, value: f64) -> RunAction {
        self.detector_radius = value;
        RunAction::ReinitializeGeometry
    }

    /// Swap the target material by name. On success the built target
    /// volume (if any) is patched in place and the driver is asked to
    /// regenerate physics tables; an unresolvable name leaves everything
    /// unchanged and only warns.
    pub fn set_target_material(&mut self, catalog: &mut MaterialCatalog, name: &str) -> RunAction {
        match catalog.find_or_build(name) {
            Ok(material) => {
                self.target_material = material.clone();
                if let Some(id) = self.logic_target {
                    if let Err(err) = self.store.set_material(id, material) {
                        warn!("target material swap skipped: {err}");
                    }
                }
                RunAction::PhysicsModified
            }
            Err(MaterialError::NotFound(name)) => {
                warn!(
                    "set_target_material: '{name}' not found; keeping {}",
                    self.target_material.name
                );
                RunAction::Unchanged
            }
        }
    }

    /// Swap the detector material by name; same contract as
    /// [`set_target_material`](Self::set_target_material).
    pub fn set_detector_material(&mut self, catalog: &mut MaterialCatalog, name: &str) -> RunAction {
        match catalog.find_or_build(name) {
            Ok(material) => {
                self.detector_material = material.clone();
                if let Some(id) = self.logic_detector {
                    if let Err(err) = self.store.set_material(id, material) {
                        warn!("detector material swap skipped: {err}");
                    }
                }
                RunAction::PhysicsModified
            }
            Err(MaterialError::NotFound(name)) => {
                warn!(
                    "set_detector_material: '{name}' not found; keeping {}",
                    self.detector_material.name
                );
                RunAction::Unchanged
            }
        }
    }

    pub fn target_length(&self) -> f64 {
        self.target_length
    }

    pub fn target_radius(&self) -> f64 {
        self.target_radius
    }

    pub fn inset_radius(&self) -> f64 {
        self.inset_radius
    }

    pub fn shield_thickness(&self) -> f64 {
        self.shield_thickness
    }

    pub fn detector_length(&self) -> f64 {
        self.detector_length
    }

    pub fn detector_thickness(&self) -> f64 {
        self.detector_thickness
    }

    pub fn detector_radius(&self) -> f64 {
        self.detector_radius
    }

    pub fn world_radius(&self) -> f64 {
        self.world_radius
    }

    pub fn world_length(&self) -> f64 {
        self.world_length
    }

    pub fn world_material(&self) -> MaterialHandle {
        self.world_material.clone()
    }

    pub fn target_material(&self) -> MaterialHandle {
        self.target_material.clone()
    }

    pub fn detector_material(&self) -> MaterialHandle {
        self.detector_material.clone()
    }

    pub fn shield_material(&self) -> MaterialHandle {
        self.shield_material.clone()
    }

    /// The built target volume, if a construct() has happened.
    pub fn logical_target(&self) -> Option<LogicalId> {
        self.logic_target
    }

    /// The built detector volume, if a construct() has happened.
    pub fn logical_detector(&self) -> Option<LogicalId> {
        self.logic_detector
    }

    /// Read access to the built hierarchy.
    pub fn store(&self) -> &GeometryStore {
        &self.store
    }
}
