//! The compiled command representation
//!
//! A frame compiles into a [`RenderCommandBuffer`]: a fixed number of
//! [`RenderCommandList`]s addressed by index. The backend executes lists
//! strictly in index order and commands within a list strictly in sequence;
//! that ordering is the entire contract between compiler and backend.

mod buffer;
mod list;

pub use buffer::RenderCommandBuffer;
pub use list::{RenderCommand, RenderCommandList};
