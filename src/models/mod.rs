pub mod scope;
pub mod status_event;
pub mod status_kind;

pub use scope::Scope;
pub use status_event::StatusEvent;
pub use status_kind::StatusKind;
