// src/domain/listing.rs

use crate::domain::format::format_rub;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Hidden,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Active => "Активен",
            ListingStatus::Hidden => "Скрыт",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ListingStatus::Active => "status-active",
            ListingStatus::Hidden => "status-hidden",
        }
    }
}

/// One of the agent's own objects on the "My objects" page.
#[derive(Debug, Clone)]
pub struct Listing {
    pub key: String,
    pub title: String,
    pub status: ListingStatus,
    pub price: u64,
    pub rooms: u32,
    pub updated_at: NaiveDate,
}

impl Listing {
    pub fn price_label(&self) -> String {
        format_rub(self.price)
    }

    pub fn updated_label(&self) -> String {
        self.updated_at.format("%d.%m.%Y").to_string()
    }
}

/// Case-insensitive substring search over titles ("Поиск по адресу или городу").
pub fn search_listings<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return listings.iter().collect();
    }

    listings
        .iter()
        .filter(|l| l.title.to_lowercase().contains(&needle))
        .collect()
}
