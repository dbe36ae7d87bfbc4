//! Offscreen EGL context management.
//!
//! This module is responsible for:
//! - choosing an RGBA8 / depth16 / ES 3 config on the default display
//! - creating contexts (optionally sharing objects) bound to a 1x1 pbuffer
//! - unwinding partially created handles when any step fails
//! - validating and destroying contexts on the calling thread

mod api;
mod context;
mod error;
mod guard;
mod init;
mod native;

#[cfg(test)]
pub(crate) mod mock;

pub use api::EglApi;
pub use context::{EglHelper, OffscreenContext};
pub use error::{ContextError, ErrorCode, Step};
pub use init::ContextConfig;
pub use native::NativeEgl;
