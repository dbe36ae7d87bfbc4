use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::guard::{ContextGuard, DisplayGuard, SurfaceGuard};
use super::{ContextConfig, ContextError, EglApi, ErrorCode};
use crate::gl::GlInfo;

/// An activated offscreen context and the handles created with it.
///
/// There is no `Drop`: release it with [`EglHelper::destroy_context`].
#[must_use = "offscreen contexts must be released with EglHelper::destroy_context"]
pub struct OffscreenContext<E: EglApi> {
    display: E::Display,
    config: E::Config,
    context: E::Context,
    surface: E::Surface,
}

impl<E: EglApi> OffscreenContext<E> {
    /// The raw context handle.
    pub fn handle(&self) -> E::Context {
        self.context
    }

    pub fn display(&self) -> E::Display {
        self.display
    }

    pub fn config(&self) -> E::Config {
        self.config
    }

    /// The 1x1 pbuffer bound alongside the context.
    pub fn surface(&self) -> E::Surface {
        self.surface
    }
}

impl<E: EglApi> fmt::Debug for OffscreenContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffscreenContext")
            .field("display", &self.display)
            .field("config", &self.config)
            .field("context", &self.context)
            .field("surface", &self.surface)
            .finish()
    }
}

/// Creates, validates and destroys offscreen EGL contexts.
///
/// All calls act on the calling thread. The helper counts the contexts it
/// handed out so the default display is only terminated once none remain.
///
/// The default display is process-wide, but the count is not: two helpers
/// built independently with [`EglHelper::new`] do not see each other's
/// contexts, and a failed attempt on one may terminate the display under the
/// other. Helpers that coexist must come from [`EglHelper::sibling`].
pub struct EglHelper<E: EglApi> {
    egl: E,
    config: ContextConfig,
    live: Rc<Cell<usize>>,
}

impl<E: EglApi> EglHelper<E> {
    pub fn new(egl: E) -> Self {
        Self::with_config(egl, ContextConfig::default())
    }

    pub fn with_config(egl: E, config: ContextConfig) -> Self {
        Self {
            egl,
            config,
            live: Rc::new(Cell::new(0)),
        }
    }

    /// A helper over the same EGL backend that shares this helper's
    /// live-context count, and therefore its display lifetime.
    pub fn sibling(&self) -> Self
    where
        E: Clone,
    {
        Self {
            egl: self.egl.clone(),
            config: self.config.clone(),
            live: Rc::clone(&self.live),
        }
    }

    /// The underlying EGL implementation.
    pub fn api(&self) -> &E {
        &self.egl
    }

    pub fn context_config(&self) -> &ContextConfig {
        &self.config
    }

    /// Number of contexts created by this helper (or its siblings) and not
    /// yet destroyed.
    pub fn live_contexts(&self) -> usize {
        self.live.get()
    }

    /// Creates a standalone context and makes it current.
    ///
    /// Failures are logged and reported as `None`; nothing created during the
    /// attempt is left behind.
    pub fn create_context(&self) -> Option<OffscreenContext<E>> {
        self.create_logged(None)
    }

    /// Creates a context sharing objects with `share` and makes it current.
    pub fn create_shared_context(
        &self,
        share: &OffscreenContext<E>,
    ) -> Option<OffscreenContext<E>> {
        self.create_logged(Some(share))
    }

    fn create_logged(&self, share: Option<&OffscreenContext<E>>) -> Option<OffscreenContext<E>> {
        match self.try_create_context(share) {
            Ok(context) => Some(context),
            Err(err) => {
                log::error!("offscreen context creation failed ({} step): {err}", err.step());
                None
            }
        }
    }

    /// Runs the creation sequence, returning the failing step on error.
    ///
    /// Order: display, initialize, config, context, pbuffer, make current.
    /// Handles acquired before a failure are released in reverse order.
    pub fn try_create_context(
        &self,
        share: Option<&OffscreenContext<E>>,
    ) -> Result<OffscreenContext<E>, ContextError> {
        let egl = &self.egl;

        let display = egl.default_display().ok_or_else(|| match egl.last_error() {
            Some(code) => ContextError::GetDisplay(code),
            None => ContextError::NoDisplay,
        })?;

        let (major, minor) = egl.initialize(display).map_err(ContextError::Initialize)?;
        log::debug!("initialized EGL {major}.{minor} on display {display:?}");
        let display_guard = DisplayGuard::new(egl, display, self.live.get() == 0);

        let config = egl
            .choose_config(display, &self.config.config_attributes())
            .map_err(ContextError::ChooseConfig)?
            .ok_or(ContextError::NoMatchingConfig)?;
        log::debug!("chose EGL config {config:?}");

        let share_handle = share.map(OffscreenContext::handle);
        let context = egl
            .create_context(display, config, share_handle, &self.config.context_attributes())
            .map_err(ContextError::CreateContext)?;
        let context = ContextGuard::new(egl, display, context);
        log::debug!("created context {:?} (shared with {share_handle:?})", context.handle());

        let surface = egl
            .create_pbuffer_surface(display, config, &self.config.surface_attributes())
            .map_err(ContextError::CreateSurface)?;
        let surface = SurfaceGuard::new(egl, display, surface);
        log::debug!(
            "created {}x{} pbuffer {:?}",
            self.config.surface_width,
            self.config.surface_height,
            surface.handle()
        );

        egl.make_current(display, Some(surface.handle()), Some(context.handle()))
            .map_err(ContextError::MakeCurrent)?;

        if self.config.log_gl_info {
            match GlInfo::query(|name| egl.proc_address(name)) {
                Ok(info) => info.log(),
                Err(err) => log::warn!("unable to query GL identification strings: {err}"),
            }
        }

        let created = OffscreenContext {
            surface: surface.keep(),
            context: context.keep(),
            display: display_guard.keep(),
            config,
        };
        self.live.set(self.live.get() + 1);

        log::info!("offscreen context {:?} is current", created.context);
        Ok(created)
    }

    /// True when `context` is present and current on the calling thread.
    pub fn validate_context(&self, context: Option<E::Context>) -> bool {
        let Some(context) = context else {
            log::debug!("validate: no context given");
            return false;
        };

        let current = self.egl.current_context();
        let valid = current == Some(context);
        if !valid {
            log::debug!("validate: {context:?} is not current (current: {current:?})");
        }
        valid
    }

    /// Rebinds `context` and its pbuffer to the calling thread.
    pub fn make_current(&self, context: &OffscreenContext<E>) -> Result<(), ContextError> {
        self.egl
            .make_current(context.display, Some(context.surface), Some(context.context))
            .map_err(ContextError::MakeCurrent)
    }

    /// Unbinds whatever context is current on `context`'s display.
    pub fn release_current(&self, context: &OffscreenContext<E>) -> Result<(), ContextError> {
        self.egl
            .make_current(context.display, None, None)
            .map_err(ContextError::MakeCurrent)
    }

    /// Releases `context`, its pbuffer and, for the last live context, the display.
    ///
    /// # Panics
    ///
    /// If the driver refuses to destroy the context. A context that cannot be
    /// destroyed leaves the driver in an unknown state.
    pub fn destroy_context(&self, context: OffscreenContext<E>) {
        let OffscreenContext {
            display,
            context,
            surface,
            ..
        } = context;

        if self.egl.current_context() == Some(context) {
            if let Err(code) = self.egl.make_current(display, None, None) {
                log::warn!("unable to release current context {context:?}: {code}");
            }
        }

        if let Err(code) = self.egl.destroy_surface(display, surface) {
            log::warn!("eglDestroySurface failed for {surface:?}: {code}");
        }

        if let Err(code) = self.egl.destroy_context(display, context) {
            log::error!("eglDestroyContext failed for {context:?}: {code}");
            panic!("unable to destroy EGL context {context:?}: {code}");
        }
        log::debug!("destroyed context {context:?}");

        let live = self.live.get().saturating_sub(1);
        self.live.set(live);
        if live == 0 {
            if let Err(code) = self.egl.terminate(display) {
                log::warn!("eglTerminate failed: {code}");
            }
        }
    }
}
