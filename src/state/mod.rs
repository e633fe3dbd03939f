pub mod clock;
pub mod input;
pub mod layout;
pub mod session;
pub mod store;
pub mod surface;
pub mod touch;

pub use input::key_command;
pub use session::{Effect, Hud, Phase, Session};
pub use store::browser_store;
pub use surface::Surface;
pub use touch::SwipeTracker;
