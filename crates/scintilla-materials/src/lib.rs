//! # Scintilla Materials
//!
//! Material definitions and the built-in catalog for the Scintilla detector
//! model. Materials are resolved by name through
//! [`MaterialCatalog::find_or_build`](catalog::MaterialCatalog::find_or_build)
//! and handed out as cheap shared [`MaterialHandle`](material::MaterialHandle)s;
//! a failed lookup is a recoverable [`MaterialError::NotFound`](catalog::MaterialError).
//!
//! ## Built-in recipes
//!
//! | Name | Composition | State |
//! |------|-------------|-------|
//! | `Air` | N/O, 70/30 by mass | gas, 293 K, 1 atm |
//! | `Water` | H₂O | liquid, 293 K, 1 atm |
//! | `Poly` | C₂H₄ polyethylene | solid |
//! | `Argon` | monatomic Ar, 2 bar gas-factor density | liquid, 77 K |

pub mod catalog;
pub mod element;
pub mod material;

pub use catalog::{MaterialCatalog, MaterialError};
pub use element::Element;
pub use material::{Composition, Material, MaterialHandle, StateOfMatter};
