// tests/support/mod.rs
// Shared across several integration test binaries; individual binaries use
// only a subset, so dead_code warnings are allowed at module level.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
