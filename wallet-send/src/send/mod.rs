//! Send validation
//!
//! This module converts send amounts to atomic units, dispatches to the
//! wallet's transaction constructor, and translates construction failures
//! into localized messages.

mod types;
mod validator;
mod translate;

pub use types::*;
pub use validator::*;
