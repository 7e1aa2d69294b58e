//! Skeleton bone-matrix buffer
//!
//! Owned, contiguous storage for the per-bone 4x4 matrices uploaded to
//! `u_jointMatrix`. Resizing always reinitializes every bone to identity.

use glam::Mat4;

/// Maximum number of bones for GPU skinning
pub const MAX_BONES: usize = 256;

/// Floats per bone matrix (4x4)
pub const FLOATS_PER_BONE: usize = 16;

/// Bone matrices of one skinned render state
///
/// Invariant: always holds exactly `bones_count` matrices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkeletonBuffer {
    matrices: Vec<Mat4>,
}

impl SkeletonBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reallocate for `count` bones, all set to identity.
    ///
    /// A count of zero releases the buffer. Counts above [`MAX_BONES`] are
    /// clamped.
    pub fn set_bones_count(&mut self, count: u16) {
        let mut count = count as usize;
        if count > MAX_BONES {
            tracing::warn!(
                "Bone count {} exceeds maximum of {}, clamping",
                count,
                MAX_BONES
            );
            count = MAX_BONES;
        }
        // Fresh allocation so a shrink gives memory back
        self.matrices = vec![Mat4::IDENTITY; count];
    }

    pub fn bones_count(&self) -> u16 {
        self.matrices.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Copy `16 * bones_count` floats from `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds fewer than `16 * bones_count` floats.
    pub fn set_matrices(&mut self, src: &[f32]) {
        let dst = self.as_floats_mut();
        let len = dst.len();
        dst.copy_from_slice(&src[..len]);
    }

    /// Copy `bones_count` matrices from `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds fewer than `bones_count` matrices.
    pub fn set_bone_matrices(&mut self, src: &[Mat4]) {
        let len = self.matrices.len();
        self.matrices.copy_from_slice(&src[..len]);
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    /// Flat float view for upload (column-major per bone)
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.matrices.as_slice())
    }

    fn as_floats_mut(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(self.matrices.as_mut_slice())
    }

    /// Drop every bone and give the allocation back
    pub fn release(&mut self) {
        self.matrices = Vec::new();
    }
}
