//! Repositories for database operations, one per table

pub mod bookings;
pub mod equipment;
pub mod notifications;
pub mod rooms;
pub mod studios;
pub mod users;

pub use bookings::BookingRepository;
pub use equipment::EquipmentRepository;
pub use notifications::NotificationRepository;
pub use rooms::RoomRepository;
pub use studios::StudioRepository;
pub use users::UserRepository;
