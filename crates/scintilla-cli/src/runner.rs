//! Job runner: applies configuration to the detector builder, constructs
//! the geometry, and drives the photon gun for the requested number of
//! events. This is the run driver the core components expect — it consumes
//! the builder's [`RunAction`] signals and decides when the single rebuild
//! actually happens.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use scintilla_core::detector::{DetectorBuilder, RunAction};
use scintilla_core::source::{Event, PhotonGun, PrimaryVertex};
use scintilla_core::units::M;
use scintilla_materials::MaterialCatalog;

use crate::config::JobConfig;

/// Results from a completed job.
pub struct RunOutput {
    pub vertices: Vec<PrimaryVertex>,
    /// Parameter summary of the geometry the events were sampled against.
    pub geometry_summary: String,
}

/// Run a full job from a parsed configuration.
pub fn run_job(job: &JobConfig) -> Result<RunOutput> {
    let mut catalog = MaterialCatalog::new();
    let mut builder =
        DetectorBuilder::new(&mut catalog).context("resolving default materials")?;

    // Dimension overrides. Each mutator hands back a run action; any
    // geometry invalidation is folded into the single startup build below.
    fn consume(action: RunAction, rebuild: &mut bool) {
        if action == RunAction::ReinitializeGeometry {
            *rebuild = true;
        }
    }
    let mut rebuild_requested = true;
    let d = &job.detector;
    if let Some(v) = d.target_length_m {
        consume(builder.set_target_length(v * M), &mut rebuild_requested);
    }
    if let Some(v) = d.target_radius_m {
        consume(builder.set_target_radius(v * M), &mut rebuild_requested);
    }
    if let Some(v) = d.inset_radius_m {
        consume(builder.set_inset_radius(v * M), &mut rebuild_requested);
    }
    if let Some(v) = d.shield_thickness_m {
        consume(builder.set_shield_thickness(v * M), &mut rebuild_requested);
    }
    if let Some(v) = d.detector_length_m {
        consume(builder.set_detector_length(v * M), &mut rebuild_requested);
    }
    if let Some(v) = d.detector_thickness_m {
        consume(builder.set_detector_thickness(v * M), &mut rebuild_requested);
    }
    if let Some(v) = d.detector_radius_m {
        consume(builder.set_detector_radius(v * M), &mut rebuild_requested);
    }

    if rebuild_requested {
        builder.construct().context("geometry construction")?;
    }

    // Material overrides go through the in-place swap path: the built
    // volumes are patched without another rebuild.
    if let Some(name) = &d.target_material {
        if builder.set_target_material(&mut catalog, name) == RunAction::PhysicsModified {
            info!("target material set to {name}; physics tables flagged stale");
        }
    }
    if let Some(name) = &d.detector_material {
        if builder.set_detector_material(&mut catalog, name) == RunAction::PhysicsModified {
            info!("detector material set to {name}; physics tables flagged stale");
        }
    }

    let geometry_summary = builder.print_parameters();
    println!("{geometry_summary}");

    let events = job.source.events;
    let mut gun = PhotonGun::from_seed(job.source.seed);
    let mut vertices = Vec::with_capacity(events);
    for i in 0..events {
        let mut event = Event::default();
        gun.generate_primaries(&mut event);
        vertices.extend(event.vertices);

        if (i + 1) % 10_000 == 0 {
            println!("  [{}/{}] events sampled", i + 1, events);
        }
    }
    println!("Sampled {} primaries (seed {})", vertices.len(), job.source.seed);

    Ok(RunOutput { vertices, geometry_summary })
}

/// Write sampled vertices to a CSV file with a metadata header.
pub fn write_vertices_csv(
    vertices: &[PrimaryVertex],
    path: &Path,
    job: &JobConfig,
) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "# Scintilla — Primary Vertices")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# events: {}", job.source.events)?;
    writeln!(file, "# seed: {}", job.source.seed)?;
    writeln!(file, "#")?;
    writeln!(
        file,
        "x_mm,y_mm,z_mm,dir_x,dir_y,dir_z,pol_x,pol_y,pol_z,energy_ev"
    )?;

    for v in vertices {
        writeln!(
            file,
            "{:.4},{:.4},{:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.4}",
            v.position[0],
            v.position[1],
            v.position[2],
            v.direction[0],
            v.direction[1],
            v.direction[2],
            v.polarization[0],
            v.polarization[1],
            v.polarization[2],
            v.energy_ev,
        )?;
    }

    println!("Vertices written to: {}", path.display());
    Ok(())
}

/// Write sampled vertices to a JSON file.
pub fn write_vertices_json(vertices: &[PrimaryVertex], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(vertices)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Vertices (JSON) written to: {}", path.display());
    Ok(())
}
