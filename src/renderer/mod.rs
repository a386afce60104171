//! Rendering module
//!
//! Two halves: a software rasterizer that paints the world into a
//! low-resolution RGBA frame, and a WebGPU pipeline that upscales that
//! frame to the display surface with nearest-neighbor sampling.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod scene;

pub use frame::Frame;
pub use pipeline::BlitRenderState;
pub use scene::paint;
