// ============================================================================
// Render State Module
// ============================================================================
//
// The per-object binder that owns material, lights and skeleton, and turns
// them into uniform writes for whichever program is assigned.
//
// - binder: RenderStateBinder and its Unbound/Dirty/Bound state machine
// - guard: BoundRenderState, the scoped enable/disable pair
// - tests: state transitions and upload behaviour

mod binder;
mod guard;


pub use binder::{BinderState, RenderStateBinder};
pub use guard::BoundRenderState;
