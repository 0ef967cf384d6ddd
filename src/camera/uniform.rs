use glam::Mat4;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the view matrix and camera metadata.
///
/// Sixteen column-major floats plus the camera position, laid out ready to
/// copy into a uniform buffer. The host renderer owns the buffer; this
/// crate only fills the bytes.
pub struct CameraUniform {
    /// World-to-camera view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position (for debug display and lighting).
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl CameraUniform {
    /// Create a new camera uniform with an identity view matrix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view(&mut self, camera: &Camera) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}
