//! Creation context
//!
//! The shared rendering-context object render states are created through.
//! It tracks every resource it created so GPU context loss and recreation
//! can be forwarded to them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::render_state::RenderStateBinder;
use crate::config::BinderConfig;

/// Hooks for resources holding GPU-side state that dies with the context
pub trait GlResource {
    /// Called after a (re)created GPU context becomes current
    fn initialize_gl(&mut self);

    /// Called before the GPU context is torn down
    fn shutdown_gl(&mut self);
}

impl GlResource for RenderStateBinder {
    fn initialize_gl(&mut self) {
        // Bindings are re-resolved lazily on the next enable
    }

    fn shutdown_gl(&mut self) {
        self.shutdown();
    }
}

/// Factory and lifecycle tracker for render states.
///
/// Resources are held weakly: dropping the last strong reference destroys the
/// resource, and the dead entry is pruned on the next lifecycle pass.
pub struct CreationContext {
    config: BinderConfig,
    resources: RefCell<Vec<Weak<RefCell<dyn GlResource>>>>,
}

impl CreationContext {
    pub fn new(config: BinderConfig) -> Self {
        Self {
            config,
            resources: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Create a render state configured from this context and track it
    pub fn create_render_state(&self) -> Rc<RefCell<RenderStateBinder>> {
        let binder = Rc::new(RefCell::new(RenderStateBinder::new(&self.config)));
        self.track(binder.clone());
        binder
    }

    /// Track an externally created resource
    pub fn track(&self, resource: Rc<RefCell<dyn GlResource>>) {
        self.resources.borrow_mut().push(Rc::downgrade(&resource));
    }

    /// Forward GPU context teardown to every live resource.
    ///
    /// Resources that are borrowed elsewhere are skipped with a warning.
    /// Returns how many resources were reached.
    pub fn shutdown_gl(&self) -> usize {
        let live = self.prune();
        tracing::debug!("Shutting down GL for {} resources", live.len());
        Self::for_each_available(&live, "shutdown", |resource| resource.shutdown_gl())
    }

    /// Forward GPU context (re)creation to every live resource.
    ///
    /// Resources that are borrowed elsewhere are skipped with a warning.
    /// Returns how many resources were reached.
    pub fn initialize_gl(&self) -> usize {
        let live = self.prune();
        tracing::debug!("Initializing GL for {} resources", live.len());
        Self::for_each_available(&live, "initialize", |resource| resource.initialize_gl())
    }

    /// Number of tracked resources still alive
    pub fn live_resources(&self) -> usize {
        self.resources
            .borrow()
            .iter()
            .filter(|r| r.strong_count() > 0)
            .count()
    }

    fn for_each_available(
        live: &[Rc<RefCell<dyn GlResource>>],
        hook: &str,
        mut f: impl FnMut(&mut dyn GlResource),
    ) -> usize {
        let mut reached = 0;
        for (index, resource) in live.iter().enumerate() {
            match resource.try_borrow_mut() {
                Ok(mut resource) => {
                    f(&mut *resource);
                    reached += 1;
                }
                Err(_) => {
                    tracing::warn!("GL {} skipped resource {}: still borrowed", hook, index);
                }
            }
        }
        reached
    }

    /// Drop dead entries and upgrade the rest.
    ///
    /// The tracking list is not borrowed while hooks run, so a hook may
    /// create new resources.
    fn prune(&self) -> Vec<Rc<RefCell<dyn GlResource>>> {
        let mut resources = self.resources.borrow_mut();
        resources.retain(|r| r.strong_count() > 0);
        resources.iter().filter_map(Weak::upgrade).collect()
    }
}

impl Default for CreationContext {
    fn default() -> Self {
        Self::new(BinderConfig::default())
    }
}
