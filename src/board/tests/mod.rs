//! Unit tests for the board module.

mod access_tests;
mod seed_tests;
