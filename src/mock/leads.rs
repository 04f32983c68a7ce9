// src/mock/leads.rs

use crate::catalog::{Contact, DealType, Lead, PropertyType, RoomCount};

/// Cities offered by the filter panel: (code, display name).
pub const CITIES: &[(&str, &str)] = &[
    ("moscow", "Москва"),
    ("saint-petersburg", "Санкт-Петербург"),
    ("kazan", "Казань"),
    ("yekaterinburg", "Екатеринбург"),
];

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    (city_code, city): (&str, &str),
    deal_type: DealType,
    property_type: PropertyType,
    rooms: RoomCount,
    budget: (Option<u64>, Option<u64>),
    budget_label: Option<&str>,
    source: &str,
    match_percent: u8,
    contact: Contact,
    exclusive: bool,
) -> Lead {
    Lead {
        id: id.to_string(),
        city: city.to_string(),
        city_code: city_code.to_string(),
        deal_type,
        property_type,
        rooms,
        budget_from: budget.0,
        budget_to: budget.1,
        budget_label: budget_label.map(str::to_string),
        source: source.to_string(),
        contact,
        match_percent,
        exclusive,
    }
}

/// Reference dataset, newest first.
pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            "lead-1",
            CITIES[0],
            DealType::Sale,
            PropertyType::Flat,
            RoomCount::Exact(3),
            (Some(15_000_000), Some(20_000_000)),
            None,
            "Циан",
            92,
            Contact::new("Иван П.", "+7 9** *** ** 12", "i***@mail.ru"),
            true,
        ),
        lead(
            "lead-2",
            CITIES[1],
            DealType::Rent,
            PropertyType::House,
            RoomCount::FivePlus,
            (None, None),
            Some("Бюджет: 80-100k ₽ в мес."),
            "Avito",
            78,
            Contact::new("Мария К.", "+7 9** *** ** 45", "m***@gmail.com"),
            false,
        ),
        lead(
            "lead-3",
            CITIES[0],
            DealType::Sale,
            PropertyType::Flat,
            RoomCount::Exact(1),
            (Some(8_000_000), Some(10_000_000)),
            None,
            "Звонок",
            45,
            Contact::new("Алексей С.", "+7 9** *** ** 99", "a***@yandex.ru"),
            false,
        ),
        lead(
            "lead-4",
            CITIES[2],
            DealType::Sale,
            PropertyType::Apartment,
            RoomCount::Exact(2),
            (Some(9_500_000), Some(11_000_000)),
            None,
            "Lead Exchange",
            84,
            Contact::new("Ольга Р.", "+7 9** *** ** 07", "o***@mail.ru"),
            true,
        ),
        lead(
            "lead-5",
            CITIES[3],
            DealType::Rent,
            PropertyType::Commercial,
            RoomCount::FourPlus,
            (None, None),
            Some("Бюджет: 200-300k ₽ в мес."),
            "Сарафанное радио",
            65,
            Contact::new("Светлана Н.", "+7 9** *** ** 51", "s***@corp.ru"),
            false,
        ),
        lead(
            "lead-6",
            CITIES[0],
            DealType::Sale,
            PropertyType::House,
            RoomCount::Exact(4),
            (Some(32_000_000), Some(36_000_000)),
            None,
            "Личный сайт",
            88,
            Contact::new("Павел Т.", "+7 9** *** ** 33", "p***@mail.ru"),
            false,
        ),
    ]
}
