use std::ffi::c_void;
use std::num::NonZeroU32;

use glow::HasContext;

/// `GL_TEXTURE_EXTERNAL_OES` from `OES_EGL_image_external`.
pub const TEXTURE_EXTERNAL_OES: u32 = 0x8D65;

/// Sampling applied to every external texture: clamp to edge, linear filtering.
pub const EXTERNAL_TEXTURE_PARAMETERS: [(u32, u32); 4] = [
    (glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE),
    (glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE),
    (glow::TEXTURE_MIN_FILTER, glow::LINEAR),
    (glow::TEXTURE_MAG_FILTER, glow::LINEAR),
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextureError {
    #[error("glGenTextures failed: {0}")]
    Generate(String),

    #[error("configuring texture {texture} raised GL error 0x{code:04X}")]
    Parameters { texture: u32, code: u32 },
}

/// The texture calls needed to set up an external texture.
///
/// Texture names are plain `u32`s, as they are handed to camera APIs.
pub trait GlApi {
    fn create_texture(&self) -> Result<u32, String>;
    fn delete_texture(&self, texture: u32);
    fn bind_texture(&self, target: u32, texture: u32);
    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32);
    /// `glGetError`.
    fn error(&self) -> u32;
}

/// [`GlApi`] backed by `glow`.
pub struct GlowGl {
    gl: glow::Context,
}

impl GlowGl {
    /// Loads GL entry points through `loader` (typically `eglGetProcAddress`).
    ///
    /// # Safety
    ///
    /// A GL context must be current on the calling thread, and every later
    /// call must happen while a compatible context is current.
    pub unsafe fn from_loader<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        let gl = unsafe { glow::Context::from_loader_function(loader) };
        Self { gl }
    }
}

impl GlApi for GlowGl {
    fn create_texture(&self) -> Result<u32, String> {
        let texture = unsafe { self.gl.create_texture() }?;
        Ok(texture.0.get())
    }

    fn delete_texture(&self, texture: u32) {
        if let Some(name) = NonZeroU32::new(texture) {
            unsafe { self.gl.delete_texture(glow::NativeTexture(name)) };
        }
    }

    fn bind_texture(&self, target: u32, texture: u32) {
        let texture = NonZeroU32::new(texture).map(glow::NativeTexture);
        unsafe { self.gl.bind_texture(target, texture) };
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        unsafe { self.gl.tex_parameter_i32(target, parameter, value) };
    }

    fn error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }
}

/// Allocates one texture name bound to `GL_TEXTURE_EXTERNAL_OES` with
/// [`EXTERNAL_TEXTURE_PARAMETERS`] applied. The texture is left bound.
pub fn create_external_texture<G: GlApi + ?Sized>(gl: &G) -> Result<u32, TextureError> {
    let texture = gl.create_texture().map_err(TextureError::Generate)?;

    gl.bind_texture(TEXTURE_EXTERNAL_OES, texture);
    for (parameter, value) in EXTERNAL_TEXTURE_PARAMETERS {
        gl.tex_parameter_i32(TEXTURE_EXTERNAL_OES, parameter, value as i32);
    }

    let code = gl.error();
    if code != glow::NO_ERROR {
        gl.delete_texture(texture);
        return Err(TextureError::Parameters { texture, code });
    }

    log::debug!("created external texture {texture}");
    Ok(texture)
}
