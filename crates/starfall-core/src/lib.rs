//! Core types and definitions for the STARFALL simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, constants, enums, input model, resource catalog,
//! frame snapshots, and events. It has no dependency on any
//! rendering or windowing framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod resources;
pub mod state;
pub mod types;
