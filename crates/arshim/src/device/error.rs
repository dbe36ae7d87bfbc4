use std::fmt;

/// Symbolic EGL error codes as reported by `eglGetError`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorCode {
    Success,
    NotInitialized,
    BadAccess,
    BadAlloc,
    BadAttribute,
    BadConfig,
    BadContext,
    BadCurrentSurface,
    BadDisplay,
    BadMatch,
    BadNativePixmap,
    BadNativeWindow,
    BadParameter,
    BadSurface,
    ContextLost,
    /// A code outside the EGL 1.4 table (vendor extension or driver bug).
    Unknown(i32),
}

impl ErrorCode {
    /// Decodes a raw `EGLint` error value.
    pub fn from_raw(code: i32) -> Self {
        match code {
            0x3000 => Self::Success,
            0x3001 => Self::NotInitialized,
            0x3002 => Self::BadAccess,
            0x3003 => Self::BadAlloc,
            0x3004 => Self::BadAttribute,
            0x3005 => Self::BadConfig,
            0x3006 => Self::BadContext,
            0x3007 => Self::BadCurrentSurface,
            0x3008 => Self::BadDisplay,
            0x3009 => Self::BadMatch,
            0x300A => Self::BadNativePixmap,
            0x300B => Self::BadNativeWindow,
            0x300C => Self::BadParameter,
            0x300D => Self::BadSurface,
            0x300E => Self::ContextLost,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw `EGLint` value.
    pub fn raw(self) -> i32 {
        match self {
            Self::Success => 0x3000,
            Self::NotInitialized => 0x3001,
            Self::BadAccess => 0x3002,
            Self::BadAlloc => 0x3003,
            Self::BadAttribute => 0x3004,
            Self::BadConfig => 0x3005,
            Self::BadContext => 0x3006,
            Self::BadCurrentSurface => 0x3007,
            Self::BadDisplay => 0x3008,
            Self::BadMatch => 0x3009,
            Self::BadNativePixmap => 0x300A,
            Self::BadNativeWindow => 0x300B,
            Self::BadParameter => 0x300C,
            Self::BadSurface => 0x300D,
            Self::ContextLost => 0x300E,
            Self::Unknown(code) => code,
        }
    }

    /// Returns the symbolic name used in the EGL headers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "EGL_SUCCESS",
            Self::NotInitialized => "EGL_NOT_INITIALIZED",
            Self::BadAccess => "EGL_BAD_ACCESS",
            Self::BadAlloc => "EGL_BAD_ALLOC",
            Self::BadAttribute => "EGL_BAD_ATTRIBUTE",
            Self::BadConfig => "EGL_BAD_CONFIG",
            Self::BadContext => "EGL_BAD_CONTEXT",
            Self::BadCurrentSurface => "EGL_BAD_CURRENT_SURFACE",
            Self::BadDisplay => "EGL_BAD_DISPLAY",
            Self::BadMatch => "EGL_BAD_MATCH",
            Self::BadNativePixmap => "EGL_BAD_NATIVE_PIXMAP",
            Self::BadNativeWindow => "EGL_BAD_NATIVE_WINDOW",
            Self::BadParameter => "EGL_BAD_PARAMETER",
            Self::BadSurface => "EGL_BAD_SURFACE",
            Self::ContextLost => "EGL_CONTEXT_LOST",
            Self::Unknown(_) => "EGL_UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.raw())
    }
}

impl From<khronos_egl::Error> for ErrorCode {
    fn from(err: khronos_egl::Error) -> Self {
        use khronos_egl::Error;

        match err {
            Error::NotInitialized => Self::NotInitialized,
            Error::BadAccess => Self::BadAccess,
            Error::BadAlloc => Self::BadAlloc,
            Error::BadAttribute => Self::BadAttribute,
            Error::BadContext => Self::BadContext,
            Error::BadConfig => Self::BadConfig,
            Error::BadCurrentSurface => Self::BadCurrentSurface,
            Error::BadDisplay => Self::BadDisplay,
            Error::BadSurface => Self::BadSurface,
            Error::BadMatch => Self::BadMatch,
            Error::BadParameter => Self::BadParameter,
            Error::BadNativePixmap => Self::BadNativePixmap,
            Error::BadNativeWindow => Self::BadNativeWindow,
            Error::ContextLost => Self::ContextLost,
        }
    }
}

/// The step of the creation sequence a failure belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    Load,
    GetDisplay,
    Initialize,
    ChooseConfig,
    CreateContext,
    CreateSurface,
    MakeCurrent,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::Load => "load",
            Step::GetDisplay => "get display",
            Step::Initialize => "initialize",
            Step::ChooseConfig => "choose config",
            Step::CreateContext => "create context",
            Step::CreateSurface => "create surface",
            Step::MakeCurrent => "make current",
        };
        f.write_str(label)
    }
}

/// Failure while building or re-binding an offscreen context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContextError {
    #[error("failed to load libEGL: {0}")]
    Load(String),

    #[error("eglGetDisplay returned no display: {0}")]
    GetDisplay(ErrorCode),

    #[error("eglGetDisplay returned no display and no pending EGL error")]
    NoDisplay,

    #[error("eglInitialize failed: {0}")]
    Initialize(ErrorCode),

    #[error("eglChooseConfig failed: {0}")]
    ChooseConfig(ErrorCode),

    #[error("no EGL config matches the requested attributes")]
    NoMatchingConfig,

    #[error("eglCreateContext failed: {0}")]
    CreateContext(ErrorCode),

    #[error("eglCreatePbufferSurface failed: {0}")]
    CreateSurface(ErrorCode),

    #[error("eglMakeCurrent failed: {0}")]
    MakeCurrent(ErrorCode),
}

impl ContextError {
    pub fn step(&self) -> Step {
        match self {
            ContextError::Load(_) => Step::Load,
            ContextError::GetDisplay(_) | ContextError::NoDisplay => Step::GetDisplay,
            ContextError::Initialize(_) => Step::Initialize,
            ContextError::ChooseConfig(_) | ContextError::NoMatchingConfig => Step::ChooseConfig,
            ContextError::CreateContext(_) => Step::CreateContext,
            ContextError::CreateSurface(_) => Step::CreateSurface,
            ContextError::MakeCurrent(_) => Step::MakeCurrent,
        }
    }

    /// Returns the decoded EGL error, when the failing call produced one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ContextError::GetDisplay(code)
            | ContextError::Initialize(code)
            | ContextError::ChooseConfig(code)
            | ContextError::CreateContext(code)
            | ContextError::CreateSurface(code)
            | ContextError::MakeCurrent(code) => Some(*code),
            ContextError::Load(_) | ContextError::NoDisplay | ContextError::NoMatchingConfig => {
                None
            }
        }
    }
}
