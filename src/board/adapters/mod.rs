//! Adapter implementations for the task table and access ports.

pub mod access;
pub mod memory;
