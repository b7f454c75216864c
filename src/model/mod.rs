//! Core data model: elements, materials, layers and the ion/target pair.
//!
//! - [`element`] – the element registry (H through U)
//! - [`binding`] – default displacement, lattice and surface binding energies
//! - [`composition`] – per-element composition specs and resolved entries
//! - [`formula`] – chemical formula parsing
//! - [`material`] – normalized compositions with density and phase
//! - [`layer`] – materials with a width, name and Bragg correction
//! - [`ion`], [`target`] – the projectile and the layer stack
//!
//! Every type validates at construction and is immutable afterwards;
//! `with_*` methods return re-validated copies.

pub mod binding;
pub mod composition;
pub mod element;
pub mod error;
pub mod formula;
pub mod ion;
pub mod layer;
pub mod material;
pub mod target;

pub use binding::BindingEnergies;
pub use composition::{CompositionEntry, CompositionRecord, CompositionSpec};
pub use element::{Element, ElementId};
pub use error::Error;
pub use ion::Ion;
pub use layer::Layer;
pub use material::{Material, Phase};
pub use target::Target;
