//! # Input Module
//!
//! Pointer event sampling: converts raw pointer positions into the
//! normalized offset that drives the camera rig and shader parallax.

mod pointer;

pub use pointer::PointerSampler;
