//! # Camera Module
//!
//! Perspective projection plus the pointer-follow rig that eases the
//! camera toward the sampled offset and aims it at a focus point.

mod perspective;
mod rig;

pub use perspective::PerspectiveCamera;
pub use rig::{CameraRig, FocusTransition};
