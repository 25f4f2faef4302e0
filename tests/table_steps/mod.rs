//! Step definitions for project table scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
