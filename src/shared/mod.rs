pub mod cancel;
pub mod error;
pub mod result;

pub use cancel::CancellationFlag;
pub use result::Result;
