//! Overflow-checked byte layout planning for packed allocations.
//!
//! Given an ordered sequence of [`Chunk`] descriptors, [`compute`] (or the
//! incremental [`Planner`]) returns exactly how many bytes a contiguous block
//! needs so every chunk fits at its required alignment. Once a real block of
//! that size is obtained from an allocator, [`next`] and [`prev`] step
//! between the packed objects. Every size computation is overflow-checked;
//! the crate itself never allocates.

mod align;
mod chunk;
mod error;
mod plan;
mod pointer;

pub use align::{align_down, aligned};
pub use chunk::Chunk;
pub use error::{LayoutError, LayoutResult};
pub use plan::{Planner, compute};
pub use pointer::{BytePtr, next, prev};
