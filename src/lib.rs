//! Terminal falling-block puzzle game.
//!
//! The crate splits into a deterministic [`core`] engine driven by discrete
//! commands and caller-supplied timestamps, a pure [`term`] rendering layer,
//! and a thin keyboard [`input`] mapping. The binary wires them together in
//! a fixed-timestep loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
