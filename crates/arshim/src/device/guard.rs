//! Scoped ownership of handles acquired during context creation.
//!
//! Each guard releases its handle on drop unless it was kept. Guards are
//! declared in acquisition order, so an early return drops them in reverse:
//! surface, then context, then display.

use super::EglApi;

pub(crate) struct DisplayGuard<'a, E: EglApi> {
    egl: &'a E,
    display: E::Display,
    armed: bool,
}

impl<'a, E: EglApi> DisplayGuard<'a, E> {
    /// `terminate` is false when other live contexts still use the display.
    pub(crate) fn new(egl: &'a E, display: E::Display, terminate: bool) -> Self {
        Self {
            egl,
            display,
            armed: terminate,
        }
    }

    pub(crate) fn keep(mut self) -> E::Display {
        self.armed = false;
        self.display
    }
}

impl<E: EglApi> Drop for DisplayGuard<'_, E> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let display = self.display;
        match self.egl.terminate(display) {
            Ok(()) => log::debug!("rollback: terminated display {display:?}"),
            Err(code) => log::warn!("rollback: eglTerminate failed: {code}"),
        }
    }
}

pub(crate) struct ContextGuard<'a, E: EglApi> {
    egl: &'a E,
    display: E::Display,
    context: E::Context,
    armed: bool,
}

impl<'a, E: EglApi> ContextGuard<'a, E> {
    pub(crate) fn new(egl: &'a E, display: E::Display, context: E::Context) -> Self {
        Self {
            egl,
            display,
            context,
            armed: true,
        }
    }

    pub(crate) fn handle(&self) -> E::Context {
        self.context
    }

    pub(crate) fn keep(mut self) -> E::Context {
        self.armed = false;
        self.context
    }
}

impl<E: EglApi> Drop for ContextGuard<'_, E> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let context = self.context;
        match self.egl.destroy_context(self.display, context) {
            Ok(()) => log::debug!("rollback: destroyed context {context:?}"),
            Err(code) => log::warn!("rollback: eglDestroyContext failed: {code}"),
        }
    }
}

pub(crate) struct SurfaceGuard<'a, E: EglApi> {
    egl: &'a E,
    display: E::Display,
    surface: E::Surface,
    armed: bool,
}

impl<'a, E: EglApi> SurfaceGuard<'a, E> {
    pub(crate) fn new(egl: &'a E, display: E::Display, surface: E::Surface) -> Self {
        Self {
            egl,
            display,
            surface,
            armed: true,
        }
    }

    pub(crate) fn handle(&self) -> E::Surface {
        self.surface
    }

    pub(crate) fn keep(mut self) -> E::Surface {
        self.armed = false;
        self.surface
    }
}

impl<E: EglApi> Drop for SurfaceGuard<'_, E> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let surface = self.surface;
        match self.egl.destroy_surface(self.display, surface) {
            Ok(()) => log::debug!("rollback: destroyed surface {surface:?}"),
            Err(code) => log::warn!("rollback: eglDestroySurface failed: {code}"),
        }
    }
}
