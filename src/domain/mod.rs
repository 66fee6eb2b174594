pub mod detail;
pub mod entry;
pub mod session;
pub mod tile;
pub mod view_state;
pub mod window;

pub use detail::*;
pub use entry::*;
pub use session::*;
pub use tile::*;
pub use view_state::*;
pub use window::*;
