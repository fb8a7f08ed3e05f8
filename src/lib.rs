//! # Crt - Interactive TV-Screen Demo Core
//!
//! Crt drives the reproducible logic of a pointer-follow "TV" demo:
//! it samples pointer events into a normalized 2D offset, eases a camera
//! toward that offset once per frame, and stages a typed uniform block
//! for a screen shader that composites a live video feed (or a static
//! fallback image) with distortion, scanlines, and fog.
//!
//! ## Features
//!
//! - **Math**: Vectors and the 4x4 matrix behind the camera transforms
//! - **Input**: Pointer sampling into a normalized look offset
//! - **Camera**: Perspective projection plus an easing follow rig
//! - **Screen**: The typed uniform contract and screen material pipeline
//! - **Texture**: Video feed acquisition with static-image fallback
//! - **Loaders**: Load gating for externally decoded scene assets
//!
//! ## Example
//!
//! ```ignore
//! use crt::prelude::*;
//!
//! let mut session = Session::new(Viewport::new(1280, 720));
//! session.pointer_moved(640.0, 360.0);
//! let frame = session.advance(16.0);
//! // hand frame.uniforms and the camera pose to the renderer
//! ```

#![warn(missing_docs)]
#![allow(dead_code)]

#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

pub mod math;
pub mod core;
pub mod input;
pub mod camera;
pub mod screen;
pub mod texture;
pub mod loaders;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::math::*;
    pub use crate::core::*;
    pub use crate::input::*;
    pub use crate::camera::*;
    pub use crate::screen::*;
    pub use crate::texture::*;
    pub use crate::loaders::*;
}

/// Initialize the library for WASM environments.
/// Sets up panic hooks and console logging for the browser.
#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = "Crt";
