//! Infrastructure layer
//!
//! Access to the injected platform and the guarded chat call built on top of it.

pub mod ai;
pub mod platform;

pub use platform::{global_platform_slot, PlatformAccessor, PlatformSlot};
