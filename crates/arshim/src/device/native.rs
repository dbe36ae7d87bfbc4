use std::ffi::c_void;
use std::ptr;

use khronos_egl as egl;

use super::{ContextError, EglApi, ErrorCode};

/// EGL 1.4 entry points resolved from the system `libEGL` at runtime.
pub struct NativeEgl {
    egl: egl::DynamicInstance<egl::EGL1_4>,
}

impl NativeEgl {
    /// Loads `libEGL` and resolves the EGL 1.4 entry points.
    pub fn load() -> Result<Self, ContextError> {
        let egl = unsafe { egl::DynamicInstance::<egl::EGL1_4>::load_required() }
            .map_err(|err| ContextError::Load(err.to_string()))?;

        log::debug!("loaded libEGL");
        Ok(Self { egl })
    }
}

impl EglApi for NativeEgl {
    type Display = egl::Display;
    type Config = egl::Config;
    type Context = egl::Context;
    type Surface = egl::Surface;

    fn default_display(&self) -> Option<egl::Display> {
        unsafe { self.egl.get_display(egl::DEFAULT_DISPLAY) }
    }

    fn initialize(&self, display: egl::Display) -> Result<(i32, i32), ErrorCode> {
        Ok(self.egl.initialize(display)?)
    }

    fn terminate(&self, display: egl::Display) -> Result<(), ErrorCode> {
        Ok(self.egl.terminate(display)?)
    }

    fn choose_config(
        &self,
        display: egl::Display,
        attributes: &[i32],
    ) -> Result<Option<egl::Config>, ErrorCode> {
        Ok(self.egl.choose_first_config(display, attributes)?)
    }

    fn create_context(
        &self,
        display: egl::Display,
        config: egl::Config,
        share: Option<egl::Context>,
        attributes: &[i32],
    ) -> Result<egl::Context, ErrorCode> {
        Ok(self.egl.create_context(display, config, share, attributes)?)
    }

    fn destroy_context(
        &self,
        display: egl::Display,
        context: egl::Context,
    ) -> Result<(), ErrorCode> {
        Ok(self.egl.destroy_context(display, context)?)
    }

    fn create_pbuffer_surface(
        &self,
        display: egl::Display,
        config: egl::Config,
        attributes: &[i32],
    ) -> Result<egl::Surface, ErrorCode> {
        Ok(self.egl.create_pbuffer_surface(display, config, attributes)?)
    }

    fn destroy_surface(
        &self,
        display: egl::Display,
        surface: egl::Surface,
    ) -> Result<(), ErrorCode> {
        Ok(self.egl.destroy_surface(display, surface)?)
    }

    fn make_current(
        &self,
        display: egl::Display,
        surface: Option<egl::Surface>,
        context: Option<egl::Context>,
    ) -> Result<(), ErrorCode> {
        Ok(self.egl.make_current(display, surface, surface, context)?)
    }

    fn current_context(&self) -> Option<egl::Context> {
        self.egl.get_current_context()
    }

    fn last_error(&self) -> Option<ErrorCode> {
        self.egl.get_error().map(ErrorCode::from)
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        self.egl
            .get_proc_address(name)
            .map_or(ptr::null(), |f| f as *const c_void)
    }
}
