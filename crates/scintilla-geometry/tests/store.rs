//! Registry behaviour of the geometry store: typed ids, duplicate-name
//! rejection, clear() semantics, and in-place material swaps.

use nalgebra::Vector3;
use scintilla_geometry::{Cuboid, GeometryError, GeometryStore, Solid};
use scintilla_materials::MaterialCatalog;

fn catalog() -> MaterialCatalog {
    MaterialCatalog::new()
}

#[test]
fn register_and_look_up_by_name() {
    let mut catalog = catalog();
    let air = catalog.find_or_build("Air").expect("built-in material");

    let mut store = GeometryStore::new();
    let s = store
        .add_solid("World", Solid::Cuboid(Cuboid::new(1.0, 1.0, 1.0)))
        .expect("fresh name");
    let l = store.add_logical("World", s, air).expect("fresh name");
    let p = store
        .place("World", l, None, Vector3::zeros())
        .expect("fresh name");

    assert_eq!(store.solid_count(), 1);
    assert_eq!(store.logical_count(), 1);
    assert_eq!(store.placement_count(), 1);

    assert_eq!(store.solid_named("World"), store.solid(s));
    assert_eq!(store.logical_named("World").map(|l| l.name.as_str()), Some("World"));
    assert!(store.placement(p).is_some_and(|p| p.mother.is_none()));
}

#[test]
fn duplicate_names_are_rejected() {
    let mut store = GeometryStore::new();
    store
        .add_solid("Target", Solid::Cuboid(Cuboid::new(1.0, 1.0, 1.0)))
        .expect("fresh name");
    let err = store
        .add_solid("Target", Solid::Cuboid(Cuboid::new(2.0, 2.0, 2.0)))
        .expect_err("second registration must fail");
    assert!(matches!(err, GeometryError::DuplicateName { kind: "solid", .. }));
}

#[test]
fn subtraction_requires_registered_operands() {
    let mut store = GeometryStore::new();
    let outer = store
        .add_solid("Outer", Solid::Cuboid(Cuboid::new(2.0, 2.0, 2.0)))
        .expect("fresh name");
    let inner = store
        .add_solid("Inner", Solid::Cuboid(Cuboid::new(1.0, 1.0, 1.0)))
        .expect("fresh name");
    store
        .add_solid("Shell", Solid::Subtraction { outer, inner })
        .expect("operands registered");

    // Ids from before a clear() are dangling afterwards.
    store.clear();
    let err = store
        .add_solid("Shell", Solid::Subtraction { outer, inner })
        .expect_err("stale operand ids must be rejected");
    assert!(matches!(err, GeometryError::UnknownId { kind: "solid", .. }));
}

#[test]
fn clear_empties_every_registry() {
    let mut catalog = catalog();
    let air = catalog.find_or_build("Air").expect("built-in material");

    let mut store = GeometryStore::new();
    let s = store
        .add_solid("World", Solid::Cuboid(Cuboid::new(1.0, 1.0, 1.0)))
        .expect("fresh name");
    let l = store.add_logical("World", s, air).expect("fresh name");
    store.place("World", l, None, Vector3::zeros()).expect("fresh name");

    store.clear();
    assert_eq!(store.solid_count(), 0);
    assert_eq!(store.logical_count(), 0);
    assert_eq!(store.placement_count(), 0);
    assert!(store.solid_named("World").is_none());

    // The same names register cleanly again after a clear.
    store
        .add_solid("World", Solid::Cuboid(Cuboid::new(1.0, 1.0, 1.0)))
        .expect("name free after clear");
}

#[test]
fn material_swap_propagates_to_registered_volume() {
    let mut catalog = catalog();
    let argon = catalog.find_or_build("Argon").expect("built-in material");
    let water = catalog.find_or_build("Water").expect("built-in material");

    let mut store = GeometryStore::new();
    let s = store
        .add_solid("Detector", Solid::Cuboid(Cuboid::new(1.0, 1.0, 1.0)))
        .expect("fresh name");
    let l = store.add_logical("Detector", s, argon).expect("fresh name");

    store.set_material(l, water).expect("registered volume");
    assert_eq!(
        store.logical(l).map(|l| l.material.name.as_str()),
        Some("Water")
    );
}
