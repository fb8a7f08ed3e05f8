//! # Screen Module
//!
//! The TV screen's shader surface: the typed uniform block the frame
//! loop stages every tick, and the material that owns the render
//! pipeline compositing the feed texture onto the screen quad.

mod material;
mod uniforms;

pub use material::{CameraUniform, ScreenMaterial, ScreenVertex};
pub use uniforms::ScreenUniforms;
