mod debounce;
mod latch;

pub use crate::debounce::Debouncer;
pub use crate::latch::Latch;
