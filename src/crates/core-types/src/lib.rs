//! Factcheck Core Types
//!
//! Plain data shared between the orchestration core and its consumers.
//! Nothing in here performs I/O.

pub mod feedback;
pub mod session;
pub mod snapshot;
pub mod verdict;

pub use feedback::*;
pub use session::*;
pub use snapshot::*;
pub use verdict::*;
