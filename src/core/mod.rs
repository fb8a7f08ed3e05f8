//! # Core Module
//!
//! Session state, timing, viewport bookkeeping, the wgpu surface
//! context, and the frame loop that ties pointer input to camera and
//! uniform updates.

mod clock;
mod context;
mod frame;
mod session;
mod settings;
mod viewport;

pub use clock::Clock;
pub use context::{Context, ContextError};
pub use frame::FrameLoop;
pub use session::{FrameState, Session};
pub use settings::{SettingDescriptor, Settings};
pub use viewport::Viewport;
