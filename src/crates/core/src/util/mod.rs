pub mod chunker;
pub mod errors;

pub use chunker::*;
pub use errors::*;
