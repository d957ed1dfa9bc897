//! # Scintilla Core
//!
//! The two run-time components of the Scintilla detector model, each driven
//! synchronously by an external run driver:
//!
//! - [`detector`] — The parametric geometry builder. Owns the dimension
//!   set, the material handles, and the volume store; rebuilds the full
//!   World/Shield/Target/Detector hierarchy on demand and signals the
//!   driver through [`detector::RunAction`] when a rebuild or a physics
//!   refresh is due.
//! - [`source`] — The optical-photon primary source. Produces one
//!   physically consistent (direction, polarization, energy) vertex per
//!   request.
//! - [`units`] — Length and energy unit constants shared by both.
//!
//! No data flows between the two components; the driver calls the builder
//! once at startup and after any parameter change, and the source once per
//! simulated event.

pub mod detector;
pub mod source;
pub mod units;

pub use detector::{DetectorBuilder, RunAction};
pub use source::{Event, EventSink, PhotonGun, PrimaryVertex};
