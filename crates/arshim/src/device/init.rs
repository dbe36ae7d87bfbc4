use khronos_egl as egl;

/// `EGL_OPENGL_ES3_BIT` (EGL 1.5 / `EGL_KHR_create_context`).
const OPENGL_ES3_BIT: egl::Int = 0x0040;

/// Capability request for an offscreen context.
///
/// The defaults describe what camera-texture consumers need: an RGBA8
/// ES 3 context with a 16-bit depth buffer, activated against a 1x1 pbuffer.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Minimum red channel size (`EGL_RED_SIZE`).
    pub red_bits: i32,

    /// Minimum green channel size (`EGL_GREEN_SIZE`).
    pub green_bits: i32,

    /// Minimum blue channel size (`EGL_BLUE_SIZE`).
    pub blue_bits: i32,

    /// Minimum alpha channel size (`EGL_ALPHA_SIZE`).
    pub alpha_bits: i32,

    /// Minimum depth buffer size (`EGL_DEPTH_SIZE`).
    ///
    /// 16 bits is enough for AR overlays drawn close to the camera plane.
    pub depth_bits: i32,

    /// Major OpenGL ES version passed as `EGL_CONTEXT_CLIENT_VERSION`.
    pub client_version: i32,

    /// Width of the pbuffer used only to make the context current.
    pub surface_width: i32,

    /// Height of that pbuffer.
    pub surface_height: i32,

    /// Query and log `GL_VENDOR`, `GL_RENDERER` and friends after activation.
    pub log_gl_info: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            red_bits: 8,
            green_bits: 8,
            blue_bits: 8,
            alpha_bits: 8,
            depth_bits: 16,
            client_version: 3,
            surface_width: 1,
            surface_height: 1,
            log_gl_info: true,
        }
    }
}

impl ContextConfig {
    /// Attribute list for `eglChooseConfig`.
    pub fn config_attributes(&self) -> Vec<i32> {
        vec![
            egl::RED_SIZE,
            self.red_bits,
            egl::GREEN_SIZE,
            self.green_bits,
            egl::BLUE_SIZE,
            self.blue_bits,
            egl::ALPHA_SIZE,
            self.alpha_bits,
            egl::DEPTH_SIZE,
            self.depth_bits,
            egl::RENDERABLE_TYPE,
            OPENGL_ES3_BIT,
            egl::SURFACE_TYPE,
            egl::PBUFFER_BIT,
            egl::NONE,
        ]
    }

    /// Attribute list for `eglCreateContext`.
    pub fn context_attributes(&self) -> Vec<i32> {
        vec![egl::CONTEXT_CLIENT_VERSION, self.client_version, egl::NONE]
    }

    /// Attribute list for `eglCreatePbufferSurface`.
    pub fn surface_attributes(&self) -> Vec<i32> {
        vec![
            egl::WIDTH,
            self.surface_width,
            egl::HEIGHT,
            self.surface_height,
            egl::NONE,
        ]
    }
}
