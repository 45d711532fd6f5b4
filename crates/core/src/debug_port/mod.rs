//! Debug server port selection

pub mod allocator;

pub use allocator::{EPHEMERAL_PORT_END, EPHEMERAL_PORT_START, PortAllocator};
