mod barrier;

pub use barrier::{CompletionBarrier, CompletionGuard};
