//! Pure, platform-agnostic logic: everything here is unit-testable on any
//! target; browser wiring lives in `crate::components`.

pub mod auth;
pub mod counter;
pub mod format;
pub mod scroll;
