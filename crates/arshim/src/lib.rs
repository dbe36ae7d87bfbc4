//! arshim: offscreen EGL contexts and AR tracking helpers.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`device`] | `EglHelper`, `OffscreenContext`, `NativeEgl`, EGL error table |
//! | [`gl`] | external camera texture setup, GL identification strings |
//! | [`tracking`] | `TrackedImage::is_fully_tracked` |
//! | [`logging`] | `env_logger` initialization |

pub mod device;
pub mod gl;
pub mod logging;
pub mod tracking;
