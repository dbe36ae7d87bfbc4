use std::ffi::c_void;
use std::fmt;

use super::ErrorCode;

/// The subset of EGL the context helper drives.
///
/// Handles are opaque and `Copy`; "no object" sentinels are expressed as
/// `None`. Implementations forward each call to the driver and report its
/// error code.
pub trait EglApi {
    type Display: Copy + fmt::Debug;
    type Config: Copy + fmt::Debug;
    type Context: Copy + Eq + fmt::Debug;
    type Surface: Copy + fmt::Debug;

    /// `eglGetDisplay(EGL_DEFAULT_DISPLAY)`.
    fn default_display(&self) -> Option<Self::Display>;

    /// Returns the `(major, minor)` EGL version.
    fn initialize(&self, display: Self::Display) -> Result<(i32, i32), ErrorCode>;

    fn terminate(&self, display: Self::Display) -> Result<(), ErrorCode>;

    /// Returns the first matching config, or `None` if nothing matches.
    fn choose_config(
        &self,
        display: Self::Display,
        attributes: &[i32],
    ) -> Result<Option<Self::Config>, ErrorCode>;

    fn create_context(
        &self,
        display: Self::Display,
        config: Self::Config,
        share: Option<Self::Context>,
        attributes: &[i32],
    ) -> Result<Self::Context, ErrorCode>;

    fn destroy_context(&self, display: Self::Display, context: Self::Context)
    -> Result<(), ErrorCode>;

    fn create_pbuffer_surface(
        &self,
        display: Self::Display,
        config: Self::Config,
        attributes: &[i32],
    ) -> Result<Self::Surface, ErrorCode>;

    fn destroy_surface(&self, display: Self::Display, surface: Self::Surface)
    -> Result<(), ErrorCode>;

    /// Binds `context` with `surface` as both draw and read target.
    /// Passing `None` for both releases the current context.
    fn make_current(
        &self,
        display: Self::Display,
        surface: Option<Self::Surface>,
        context: Option<Self::Context>,
    ) -> Result<(), ErrorCode>;

    /// The context current on the calling thread.
    fn current_context(&self) -> Option<Self::Context>;

    /// `eglGetError`, with `EGL_SUCCESS` mapped to `None`.
    fn last_error(&self) -> Option<ErrorCode>;

    /// Client API entry point lookup; null when unknown.
    fn proc_address(&self, name: &str) -> *const c_void;
}

/// Lets several helpers drive one loaded backend.
impl<E: EglApi + ?Sized> EglApi for &E {
    type Display = E::Display;
    type Config = E::Config;
    type Context = E::Context;
    type Surface = E::Surface;

    fn default_display(&self) -> Option<Self::Display> {
        (**self).default_display()
    }

    fn initialize(&self, display: Self::Display) -> Result<(i32, i32), ErrorCode> {
        (**self).initialize(display)
    }

    fn terminate(&self, display: Self::Display) -> Result<(), ErrorCode> {
        (**self).terminate(display)
    }

    fn choose_config(
        &self,
        display: Self::Display,
        attributes: &[i32],
    ) -> Result<Option<Self::Config>, ErrorCode> {
        (**self).choose_config(display, attributes)
    }

    fn create_context(
        &self,
        display: Self::Display,
        config: Self::Config,
        share: Option<Self::Context>,
        attributes: &[i32],
    ) -> Result<Self::Context, ErrorCode> {
        (**self).create_context(display, config, share, attributes)
    }

    fn destroy_context(&self, display: Self::Display, context: Self::Context)
    -> Result<(), ErrorCode> {
        (**self).destroy_context(display, context)
    }

    fn create_pbuffer_surface(
        &self,
        display: Self::Display,
        config: Self::Config,
        attributes: &[i32],
    ) -> Result<Self::Surface, ErrorCode> {
        (**self).create_pbuffer_surface(display, config, attributes)
    }

    fn destroy_surface(&self, display: Self::Display, surface: Self::Surface)
    -> Result<(), ErrorCode> {
        (**self).destroy_surface(display, surface)
    }

    fn make_current(
        &self,
        display: Self::Display,
        surface: Option<Self::Surface>,
        context: Option<Self::Context>,
    ) -> Result<(), ErrorCode> {
        (**self).make_current(display, surface, context)
    }

    fn current_context(&self) -> Option<Self::Context> {
        (**self).current_context()
    }

    fn last_error(&self) -> Option<ErrorCode> {
        (**self).last_error()
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        (**self).proc_address(name)
    }
}
