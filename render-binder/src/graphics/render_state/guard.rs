use super::binder::RenderStateBinder;
use crate::graphics::gpu::GpuContext;
use crate::graphics::program::AttributeLocation;

/// An enabled render state.
///
/// Holds the GPU context for the duration of the draw; dropping it disables
/// the binder, releasing its texture binding.
pub struct BoundRenderState<'a> {
    binder: &'a RenderStateBinder,
    gpu: &'a mut dyn GpuContext,
}

impl<'a> BoundRenderState<'a> {
    pub(super) fn new(binder: &'a RenderStateBinder, gpu: &'a mut dyn GpuContext) -> Self {
        Self { binder, gpu }
    }

    pub fn binder(&self) -> &RenderStateBinder {
        self.binder
    }

    /// GPU context, for issuing the draw itself
    pub fn gpu(&mut self) -> &mut dyn GpuContext {
        &mut *self.gpu
    }

    pub fn position(&self) -> Option<AttributeLocation> {
        self.binder.attribute_position()
    }

    pub fn normal(&self) -> Option<AttributeLocation> {
        self.binder.attribute_normal()
    }

    pub fn uv(&self) -> Option<AttributeLocation> {
        self.binder.attribute_uv()
    }

    pub fn color(&self) -> Option<AttributeLocation> {
        self.binder.attribute_color()
    }

    pub fn bone_id(&self) -> Option<AttributeLocation> {
        self.binder.attribute_bone_id()
    }

    pub fn bone_weight(&self) -> Option<AttributeLocation> {
        self.binder.attribute_bone_weight()
    }
}

impl Drop for BoundRenderState<'_> {
    fn drop(&mut self) {
        self.binder.disable(&mut *self.gpu);
    }
}
