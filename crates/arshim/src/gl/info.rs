use std::ffi::{CStr, c_void};

/// `glGetString` as resolved through `eglGetProcAddress`.
type GetStringFn = unsafe extern "system" fn(u32) -> *const u8;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlInfoError {
    #[error("GL entry point {0} could not be resolved")]
    MissingEntryPoint(&'static str),

    #[error("glGetString({0}) returned null")]
    NullString(&'static str),
}

/// Identification strings of the current GL context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language_version: String,
}

impl GlInfo {
    /// Reads the identification strings of the context current on this thread.
    ///
    /// `loader` resolves GL entry points by name and returns null when unknown.
    pub fn query<F>(mut loader: F) -> Result<Self, GlInfoError>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let ptr = loader("glGetString");
        if ptr.is_null() {
            return Err(GlInfoError::MissingEntryPoint("glGetString"));
        }
        let get_string = unsafe { std::mem::transmute::<*const c_void, GetStringFn>(ptr) };

        let read = |name: u32, label: &'static str| -> Result<String, GlInfoError> {
            let raw = unsafe { get_string(name) };
            if raw.is_null() {
                return Err(GlInfoError::NullString(label));
            }
            let text = unsafe { CStr::from_ptr(raw.cast()) };
            Ok(text.to_string_lossy().into_owned())
        };

        Ok(Self {
            vendor: read(glow::VENDOR, "GL_VENDOR")?,
            renderer: read(glow::RENDERER, "GL_RENDERER")?,
            version: read(glow::VERSION, "GL_VERSION")?,
            shading_language_version: read(
                glow::SHADING_LANGUAGE_VERSION,
                "GL_SHADING_LANGUAGE_VERSION",
            )?,
        })
    }

    pub fn log(&self) {
        log::info!("GL vendor: {}", self.vendor);
        log::info!("GL renderer: {}", self.renderer);
        log::info!("GL version: {}", self.version);
        log::info!("GLSL version: {}", self.shading_language_version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    extern "system" fn fake_get_string(name: u32) -> *const u8 {
        let text: &CStr = match name {
            glow::VENDOR => c"Acme",
            glow::RENDERER => c"Acme Tile GPU",
            glow::VERSION => c"OpenGL ES 3.2",
            glow::SHADING_LANGUAGE_VERSION => c"OpenGL ES GLSL ES 3.20",
            _ => return ptr::null(),
        };
        text.as_ptr().cast()
    }

    extern "system" fn no_renderer(name: u32) -> *const u8 {
        match name {
            glow::RENDERER => ptr::null(),
            other => fake_get_string(other),
        }
    }

    fn loader_for(f: GetStringFn) -> impl FnMut(&str) -> *const c_void {
        move |name: &str| {
            if name == "glGetString" {
                f as *const c_void
            } else {
                ptr::null()
            }
        }
    }

    #[test]
    fn reads_all_four_strings() {
        let info = GlInfo::query(loader_for(fake_get_string)).unwrap();

        assert_eq!(info.vendor, "Acme");
        assert_eq!(info.renderer, "Acme Tile GPU");
        assert_eq!(info.version, "OpenGL ES 3.2");
        assert_eq!(info.shading_language_version, "OpenGL ES GLSL ES 3.20");
    }

    #[test]
    fn missing_entry_point_is_an_error() {
        let err = GlInfo::query(|_| ptr::null()).unwrap_err();
        assert_eq!(err, GlInfoError::MissingEntryPoint("glGetString"));
    }

    #[test]
    fn null_string_is_an_error() {
        let err = GlInfo::query(loader_for(no_renderer)).unwrap_err();
        assert_eq!(err, GlInfoError::NullString("GL_RENDERER"));
    }
}
