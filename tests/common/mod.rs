#![allow(dead_code)]
//! Shared test utilities for tacparse integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper pins the reference year so results do not
//! depend on the clock.

pub mod assertions;
pub mod builders;
pub mod process;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use process::*;
