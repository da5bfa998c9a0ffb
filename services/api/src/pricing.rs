//! Booking price computation
//!
//! A room charges its hourly rate pro-rata by the minute. Once a booking
//! reaches the daily-rate threshold the flat daily price applies instead.
//! Selected equipment adds its rental price on top.

use crate::models::{Equipment, Room};

/// Bookings of at least this many minutes charge the daily rate
pub const DAILY_RATE_THRESHOLD_MINUTES: i64 = 8 * 60;

/// Cost of the room alone for a booking of the given length
pub fn room_cost(hourly_price: i64, daily_price: i64, minutes: i64) -> i64 {
    if minutes >= DAILY_RATE_THRESHOLD_MINUTES {
        daily_price
    } else {
        minutes * hourly_price / 60
    }
}

/// Total price of a booking: room cost plus equipment add-ons
pub fn booking_total(room: &Room, minutes: i64, equipment: &[Equipment]) -> i64 {
    let add_ons: i64 = equipment.iter().map(|e| e.rental_price).sum();
    room_cost(room.hourly_price, room.daily_price, minutes) + add_ons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn room(hourly_price: i64, daily_price: i64) -> Room {
        Room {
            id: Uuid::new_v4(),
            studio_id: Uuid::new_v4(),
            name: "Daylight room".to_string(),
            description: None,
            hourly_price,
            daily_price,
            features: vec![],
            images: vec![],
            created_at: Utc::now(),
        }
    }

    fn equipment(rental_price: i64) -> Equipment {
        Equipment {
            id: Uuid::new_v4(),
            studio_id: Uuid::new_v4(),
            name: "Strobe".to_string(),
            brand: None,
            kind: "lighting".to_string(),
            rental_price,
            condition: None,
            serial_number: None,
            barcode_code: "EQ1700000000000123".to_string(),
            barcode_image_url: None,
            status: EquipmentStatus::Available,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn short_bookings_charge_the_hourly_rate_pro_rata() {
        assert_eq!(room_cost(60_000, 300_000, 60), 60_000);
        assert_eq!(room_cost(60_000, 300_000, 90), 90_000);
    }

    #[test]
    fn fractional_hours_truncate_toward_zero() {
        // 50 minutes at 1_000/h is 833.33, stored as 833
        assert_eq!(room_cost(1_000, 100_000, 50), 833);
    }

    #[test]
    fn eight_hours_or_more_charge_the_daily_rate() {
        // exactly at the threshold
        assert_eq!(room_cost(60_000, 300_000, 480), 300_000);
        // far past it, and regardless of how large the hourly rate is
        assert_eq!(room_cost(1_000_000, 300_000, 600), 300_000);
    }

    #[test]
    fn just_under_the_threshold_still_charges_hourly() {
        assert_eq!(room_cost(60_000, 300_000, 479), 479 * 60_000 / 60);
    }

    #[test]
    fn total_is_room_cost_plus_equipment_add_ons() {
        let room = room(60_000, 300_000);
        let items = [equipment(25_000), equipment(40_000)];

        assert_eq!(booking_total(&room, 120, &items), 120_000 + 65_000);
    }

    #[test]
    fn total_without_equipment_is_the_room_cost() {
        let room = room(60_000, 300_000);
        assert_eq!(booking_total(&room, 480, &[]), 300_000);
    }
}
