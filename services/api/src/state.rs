//! Application state shared across handlers

use common::cache::Cache;

use crate::auth::JwtVerifier;
use crate::repositories::{
    BookingRepository, EquipmentRepository, NotificationRepository, RoomRepository,
    StudioRepository, UserRepository,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Cache,
    pub jwt: JwtVerifier,
    pub users: UserRepository,
    pub studios: StudioRepository,
    pub rooms: RoomRepository,
    pub equipment: EquipmentRepository,
    pub bookings: BookingRepository,
    pub notifications: NotificationRepository,
}
