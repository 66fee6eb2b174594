pub mod date_picker;
pub mod gallery_view;
pub mod text_renderer;
pub mod theme;
pub mod tui_debug;

pub use date_picker::*;
pub use gallery_view::*;
pub use text_renderer::*;
pub use theme::*;
pub use tui_debug::*;
