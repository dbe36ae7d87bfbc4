//! OpenGL ES helpers that run against an already-current context.

mod info;
mod texture;

pub use info::{GlInfo, GlInfoError};
pub use texture::{
    create_external_texture, GlApi, GlowGl, TextureError, EXTERNAL_TEXTURE_PARAMETERS,
    TEXTURE_EXTERNAL_OES,
};
