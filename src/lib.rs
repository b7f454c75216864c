//! Material modelling and input-file generation for the SRIM/TRIM ion
//! transport programs.
//!
//! The crate turns element symbols, chemical formulas and per-element
//! overrides into validated, normalized materials, stacks them into targets,
//! and writes the fixed-format `TRIM.IN`, `SR.IN` and `TRIMAUTO` files the
//! SRIM programs read.
//!
//! # Quick Start
//!
//! ```
//! use srim_input::{CalculationMode, CompositionSpec, Ion, Layer, Phase, Target, Trim, TrimSettings};
//!
//! // SiC with measured displacement energies on top of a nickel film
//! let sic = Layer::new(
//!     [
//!         ("Si", CompositionSpec::record(0.5).displacement(35.0)),
//!         ("C", CompositionSpec::record(0.5).displacement(20.0)),
//!     ],
//!     3.21,
//!     10_000.0,
//!     Phase::Solid,
//! )?;
//! let ni = Layer::from_formula("Ni", 8.9, 500.0, Phase::Solid)?;
//!
//! let trim = Trim::new(
//!     Ion::new("Ni", 3.0e6)?,
//!     Target::new(vec![ni, sic])?,
//!     1000,
//!     CalculationMode::FullCascade,
//!     TrimSettings::default(),
//! )?;
//!
//! let mut buf = Vec::new();
//! srim_input::io::trim::write(&mut buf, &trim).unwrap();
//! let text = String::from_utf8(buf).unwrap();
//! assert!(text.contains("Atom 2 = Si =     14 28.085\r\n"));
//! # Ok::<(), srim_input::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — Elements, binding energies, materials, layers, ion and target
//! - [`run`] — TRIM and SR run configurations and their settings
//! - [`io`] — Writers for `TRIM.IN`, `SR.IN` and `TRIMAUTO`
//! - [`config`] — TOML run descriptions
//!
//! # Composition Specs
//!
//! Each element of a material is given as one of:
//!
//! - a scalar stoichiometry, e.g. `1.0`;
//! - a list `[stoich, E_d, lattice, surface]` of 1 to 4 values;
//! - a record with `stoich` and optional `E_d`, `lattice` and `surface`.
//!
//! Omitted energies take SRIM's suggested defaults ([`model::binding`]).
//! Stoichiometries are normalized to sum to 1.0.

pub mod config;
pub mod io;
pub mod model;
pub mod run;

pub use model::{
    BindingEnergies, CompositionEntry, CompositionRecord, CompositionSpec, Element, ElementId,
    Error, Ion, Layer, Material, Phase, Target,
};
pub use run::{AutoTrim, CalculationMode, Sr, SrSettings, Trim, TrimSettings};
