// Internals
// ---------
pub mod heap_index;

// Priority queue engine
// ---------------------
pub mod pqueue;
pub mod priority;

// Diagnostics
// -----------
pub mod dump;

pub use crate::pqueue::Entry;
pub use crate::pqueue::PQueue;
pub use crate::pqueue::PQueueError;
pub use crate::priority::Priority;
