//! Step definitions for bus factory BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
