//! Quote store adapters

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlQuoteStore;
pub use memory::MemoryQuoteStore;
