pub mod drag;
pub mod export;
pub mod hover;
pub mod selection;
pub mod session;
pub mod throttle;
pub mod views;

pub use drag::*;
pub use export::*;
pub use hover::*;
pub use selection::*;
pub use session::*;
pub use throttle::*;
pub use views::*;
