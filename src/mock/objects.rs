// src/mock/objects.rs

use crate::domain::listing::{Listing, ListingStatus};
use chrono::NaiveDate;

fn listing(
    key: &str,
    title: &str,
    status: ListingStatus,
    price: u64,
    rooms: u32,
    (y, m, d): (i32, u32, u32),
) -> Listing {
    Listing {
        key: key.to_string(),
        title: title.to_string(),
        status,
        price,
        rooms,
        // Fixed calendar dates; fall back to the epoch rather than panic.
        updated_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Москва, Квартира, ул. Ленина, 1",
            ListingStatus::Active,
            15_000_000,
            3,
            (2023, 8, 15),
        ),
        listing(
            "2",
            "Санкт-Петербург, Дом, пр. Невский, 25",
            ListingStatus::Active,
            32_500_000,
            5,
            (2023, 8, 14),
        ),
        listing(
            "3",
            "Екатеринбург, Апартаменты, ул. Малышева, 51",
            ListingStatus::Hidden,
            8_200_000,
            1,
            (2023, 8, 12),
        ),
        listing(
            "4",
            "Москва, Квартира, ул. Тверская, 10",
            ListingStatus::Active,
            21_000_000,
            2,
            (2023, 8, 11),
        ),
    ]
}
