//! In-memory EGL used by the device tests.

use std::cell::RefCell;
use std::ffi::{CStr, c_void};
use std::ptr;

use super::{EglApi, ErrorCode};

/// Calls the mock can be told to fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Call {
    GetDisplay,
    Initialize,
    ChooseConfig,
    CreateContext,
    CreateSurface,
    MakeCurrent,
    DestroyContext,
    DestroySurface,
    Terminate,
}

impl Call {
    /// Calls made, in order, by a successful creation.
    pub(crate) const CREATION: [Call; 6] = [
        Call::GetDisplay,
        Call::Initialize,
        Call::ChooseConfig,
        Call::CreateContext,
        Call::CreateSurface,
        Call::MakeCurrent,
    ];
}

const DISPLAY: u32 = 1;
const CONFIG: u32 = 7;

#[derive(Debug, Default)]
struct State {
    fail: Option<Call>,
    no_matching_config: bool,
    silent_no_display: bool,
    gl_strings: bool,
    resolved: Vec<String>,
    initialized: bool,
    next_id: u32,
    contexts: Vec<u32>,
    surfaces: Vec<u32>,
    current: Option<(u32, u32)>,
    shares: Vec<(u32, Option<u32>)>,
    last_error: Option<ErrorCode>,
    log: Vec<Call>,
}

#[derive(Debug, Default)]
pub(crate) struct MockEgl {
    state: RefCell<State>,
}

impl MockEgl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(call: Call) -> Self {
        let egl = Self::new();
        egl.fail_on(Some(call));
        egl
    }

    pub(crate) fn fail_on(&self, call: Option<Call>) {
        self.state.borrow_mut().fail = call;
    }

    pub(crate) fn without_matching_config(self) -> Self {
        self.state.borrow_mut().no_matching_config = true;
        self
    }

    /// `eglGetDisplay` fails without leaving an error behind.
    pub(crate) fn without_display(self) -> Self {
        self.state.borrow_mut().silent_no_display = true;
        self
    }

    /// Resolve `glGetString` to a fake driver string table.
    pub(crate) fn with_gl_strings(self) -> Self {
        self.state.borrow_mut().gl_strings = true;
        self
    }

    /// GL entry points looked up through `proc_address`.
    pub(crate) fn resolved(&self) -> Vec<String> {
        self.state.borrow().resolved.clone()
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    pub(crate) fn live_contexts(&self) -> usize {
        self.state.borrow().contexts.len()
    }

    pub(crate) fn live_surfaces(&self) -> usize {
        self.state.borrow().surfaces.len()
    }

    /// True when nothing created through the mock is still alive.
    pub(crate) fn is_clean(&self) -> bool {
        let state = self.state.borrow();
        !state.initialized && state.contexts.is_empty() && state.surfaces.is_empty()
    }

    pub(crate) fn share_of(&self, context: u32) -> Option<u32> {
        self.state
            .borrow()
            .shares
            .iter()
            .find(|(id, _)| *id == context)
            .and_then(|(_, share)| *share)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().log.clone()
    }

    /// Records `call` and returns the injected error if it should fail.
    fn enter(&self, call: Call, code: ErrorCode) -> Result<(), ErrorCode> {
        let mut state = self.state.borrow_mut();
        state.log.push(call);
        if state.fail == Some(call) {
            state.last_error = Some(code);
            return Err(code);
        }
        Ok(())
    }

    fn next_id(state: &mut State) -> u32 {
        state.next_id += 1;
        100 + state.next_id
    }
}

impl EglApi for MockEgl {
    type Display = u32;
    type Config = u32;
    type Context = u32;
    type Surface = u32;

    fn default_display(&self) -> Option<u32> {
        self.enter(Call::GetDisplay, ErrorCode::BadDisplay).ok()?;
        if self.state.borrow().silent_no_display {
            return None;
        }
        Some(DISPLAY)
    }

    fn initialize(&self, display: u32) -> Result<(i32, i32), ErrorCode> {
        self.enter(Call::Initialize, ErrorCode::NotInitialized)?;
        assert_eq!(display, DISPLAY);
        self.state.borrow_mut().initialized = true;
        Ok((1, 4))
    }

    fn terminate(&self, display: u32) -> Result<(), ErrorCode> {
        self.enter(Call::Terminate, ErrorCode::BadDisplay)?;
        assert_eq!(display, DISPLAY);
        // Handles still alive here are leaks; they stay visible to `is_clean`.
        self.state.borrow_mut().initialized = false;
        Ok(())
    }

    fn choose_config(&self, _display: u32, attributes: &[i32]) -> Result<Option<u32>, ErrorCode> {
        self.enter(Call::ChooseConfig, ErrorCode::BadAttribute)?;
        assert_eq!(attributes.last(), Some(&khronos_egl::NONE));
        if self.state.borrow().no_matching_config {
            return Ok(None);
        }
        Ok(Some(CONFIG))
    }

    fn create_context(
        &self,
        _display: u32,
        config: u32,
        share: Option<u32>,
        _attributes: &[i32],
    ) -> Result<u32, ErrorCode> {
        self.enter(Call::CreateContext, ErrorCode::BadConfig)?;
        assert_eq!(config, CONFIG);
        let mut state = self.state.borrow_mut();
        if let Some(share) = share {
            if !state.contexts.contains(&share) {
                state.last_error = Some(ErrorCode::BadContext);
                return Err(ErrorCode::BadContext);
            }
        }
        let id = Self::next_id(&mut state);
        state.contexts.push(id);
        state.shares.push((id, share));
        Ok(id)
    }

    fn destroy_context(&self, _display: u32, context: u32) -> Result<(), ErrorCode> {
        self.enter(Call::DestroyContext, ErrorCode::BadContext)?;
        let mut state = self.state.borrow_mut();
        let before = state.contexts.len();
        state.contexts.retain(|id| *id != context);
        if state.contexts.len() == before {
            return Err(ErrorCode::BadContext);
        }
        Ok(())
    }

    fn create_pbuffer_surface(
        &self,
        _display: u32,
        config: u32,
        _attributes: &[i32],
    ) -> Result<u32, ErrorCode> {
        self.enter(Call::CreateSurface, ErrorCode::BadAlloc)?;
        assert_eq!(config, CONFIG);
        let mut state = self.state.borrow_mut();
        let id = Self::next_id(&mut state);
        state.surfaces.push(id);
        Ok(id)
    }

    fn destroy_surface(&self, _display: u32, surface: u32) -> Result<(), ErrorCode> {
        self.enter(Call::DestroySurface, ErrorCode::BadSurface)?;
        let mut state = self.state.borrow_mut();
        let before = state.surfaces.len();
        state.surfaces.retain(|id| *id != surface);
        if state.surfaces.len() == before {
            return Err(ErrorCode::BadSurface);
        }
        Ok(())
    }

    fn make_current(
        &self,
        _display: u32,
        surface: Option<u32>,
        context: Option<u32>,
    ) -> Result<(), ErrorCode> {
        self.enter(Call::MakeCurrent, ErrorCode::BadMatch)?;
        let mut state = self.state.borrow_mut();
        state.current = match (surface, context) {
            (Some(surface), Some(context)) => Some((surface, context)),
            (None, None) => None,
            _ => return Err(ErrorCode::BadMatch),
        };
        Ok(())
    }

    fn current_context(&self) -> Option<u32> {
        self.state.borrow().current.map(|(_, context)| context)
    }

    fn last_error(&self) -> Option<ErrorCode> {
        self.state.borrow_mut().last_error.take()
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        let mut state = self.state.borrow_mut();
        state.resolved.push(name.to_owned());
        if state.gl_strings && name == "glGetString" {
            return fake_get_string as *const c_void;
        }
        ptr::null()
    }
}

extern "system" fn fake_get_string(name: u32) -> *const u8 {
    let text: &CStr = match name {
        glow::VENDOR => c"Mock",
        glow::RENDERER => c"Mock Renderer",
        glow::VERSION => c"OpenGL ES 3.0 Mock",
        glow::SHADING_LANGUAGE_VERSION => c"OpenGL ES GLSL ES 3.00",
        _ => return ptr::null(),
    };
    text.as_ptr().cast()
}
