pub mod feature;
pub mod list;
pub mod overlay;
pub mod session;
pub mod viewport;

pub use feature::{Feature, Popup, Style};
pub use list::{ResultEntry, ResultList};
pub use overlay::OverlayGroup;
pub use session::{MapSession, Notice, QueryTicket, TileLayer};
pub use viewport::Viewport;
