pub mod blit;
pub mod canvas;
pub mod gpu_context;
pub mod image;
pub mod input;
pub mod render_target;
pub mod surface_renderer;

pub use blit::Blit;
pub use canvas::Canvas;
pub use gpu_context::GpuContext;
pub use image::{Image, Rgba};
pub use input::{translate, ClipSelector, InputEvent, Key, QuitPolicy};
pub use render_target::RenderTarget;
pub use surface_renderer::{SurfaceRenderer, WindowTarget};
