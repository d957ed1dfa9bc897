//! # Scintilla Geometry
//!
//! Solid shapes and the nested-volume hierarchy for the Scintilla detector
//! model. This crate provides:
//!
//! - **Solids** ([`solids`]) — Axis-aligned cuboids and subtraction shells.
//! - **Volume store** ([`store`]) — An arena-backed registry of solids,
//!   logical volumes, and placements, addressed by typed ids and cleared
//!   wholesale before each rebuild.
//!
//! Everything here is inert data: the builder in `scintilla-core` decides
//! what to register and when to discard it.

pub mod solids;
pub mod store;

pub use solids::{Cuboid, Solid};
pub use store::{
    GeometryError, GeometryStore, LogicalId, LogicalVolume, Placement, PlacementId, SolidId,
};
