//! Domain models and request/response payloads

pub mod booking;
pub mod equipment;
pub mod notification;
pub mod room;
pub mod studio;
pub mod user;

pub use booking::*;
pub use equipment::*;
pub use notification::*;
pub use room::*;
pub use studio::*;
pub use user::*;
