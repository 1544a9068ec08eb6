//! Share store implementations.

pub mod memory;
pub mod share;

pub use memory::MemoryShareRepository;
pub use share::ShareRepository;
