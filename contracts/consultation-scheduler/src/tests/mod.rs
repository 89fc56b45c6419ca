#![cfg(test)]

/// Shared setup and helpers
pub mod utils;






/// Randomized checks of the scheduling invariants
mod properties;
