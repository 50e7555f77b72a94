//! Persona domain module.
//!
//! - `model`: the `Persona` display record
//! - `catalog`: the read-only `PersonaCatalog` and its `CatalogSource` seam
//! - `preset`: client-side preview/icon decorations for stock personas

mod catalog;
mod model;
pub mod preset;

pub use catalog::{CatalogSource, PersonaCatalog};
pub use model::Persona;
