//! Shared value types for the render-state binder.
//!
//! Kept free of any GPU API so that scene code and tooling can depend on it
//! without pulling in the binder itself.

pub mod math;

pub use math::{Color, safe_div};
