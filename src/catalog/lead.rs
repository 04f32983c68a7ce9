// src/catalog/lead.rs

use crate::catalog::error::CatalogError;
use crate::domain::format::{group_digits, mask_to_bullets};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    Sale,
    Rent,
}

impl DealType {
    pub const ALL: [DealType; 2] = [DealType::Sale, DealType::Rent];

    pub fn as_str(self) -> &'static str {
        match self {
            DealType::Sale => "sale",
            DealType::Rent => "rent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DealType::Sale => "Продажа",
            DealType::Rent => "Аренда",
        }
    }
}

impl FromStr for DealType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(DealType::Sale),
            "rent" => Ok(DealType::Rent),
            other => Err(CatalogError::unknown("deal type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Flat,
    House,
    Apartment,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Flat,
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Commercial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Flat => "flat",
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Flat => "Квартира",
            PropertyType::House => "Дом",
            PropertyType::Apartment => "Апартаменты",
            PropertyType::Commercial => "Коммерческая недвижимость",
        }
    }
}

impl FromStr for PropertyType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(PropertyType::Flat),
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "commercial" => Ok(PropertyType::Commercial),
            other => Err(CatalogError::unknown("property type", other)),
        }
    }
}

/// Number of rooms a client is looking for.
///
/// High-end requests are captured as open bands rather than exact counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCount {
    Exact(u32),
    FourPlus,
    FivePlus,
}

impl fmt::Display for RoomCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomCount::Exact(n) => write!(f, "{n}"),
            RoomCount::FourPlus => f.write_str("4+"),
            RoomCount::FivePlus => f.write_str("5+"),
        }
    }
}

impl Serialize for RoomCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoomCount::Exact(n) => serializer.serialize_u32(*n),
            band => serializer.serialize_str(&band.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    /// Masked, e.g. "+7 9** *** ** 12".
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn phone_protected(&self) -> String {
        mask_to_bullets(&self.phone)
    }

    pub fn email_protected(&self) -> String {
        mask_to_bullets(&self.email)
    }
}

/// Colour band of the match badge on a lead card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTier::High => "score-high",
            ScoreTier::Medium => "score-medium",
            ScoreTier::Low => "score-low",
        }
    }
}

/// A prospective client inquiry surfaced in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub city: String,
    pub city_code: String,
    pub deal_type: DealType,
    pub property_type: PropertyType,
    pub rooms: RoomCount,
    pub budget_from: Option<u64>,
    pub budget_to: Option<u64>,
    /// Precomputed label for budgets that do not fit a plain range (monthly rent etc).
    pub budget_label: Option<String>,
    pub source: String,
    pub contact: Contact,
    pub match_percent: u8,
    pub exclusive: bool,
}

impl Lead {
    /// Effective single value used when ordering by budget, highest end first.
    pub fn budget_high(&self) -> u64 {
        self.budget_to.or(self.budget_from).unwrap_or(0)
    }

    /// Effective single value used when ordering by budget, lowest end first.
    pub fn budget_low(&self) -> u64 {
        self.budget_from.or(self.budget_to).unwrap_or(0)
    }

    /// Closed budget range with a missing end collapsed onto the present one.
    pub fn budget_range(&self) -> Option<(u64, u64)> {
        match (self.budget_from, self.budget_to) {
            (Some(from), Some(to)) => Some((from, to)),
            (Some(from), None) => Some((from, from)),
            (None, Some(to)) => Some((to, to)),
            (None, None) => None,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "{} · {} · {}",
            self.city,
            self.deal_type.label(),
            self.property_type.label()
        )
    }

    pub fn display_budget(&self) -> Option<String> {
        if let Some(label) = &self.budget_label {
            return Some(label.clone());
        }

        // Zero bounds are treated as "not provided" on the card.
        let from = self.budget_from.filter(|v| *v > 0).map(group_digits);
        let to = self.budget_to.filter(|v| *v > 0).map(group_digits);

        match (from, to) {
            (Some(from), Some(to)) => Some(format!("Бюджет: {from}–{to} ₽")),
            (Some(from), None) => Some(format!("Бюджет от {from} ₽")),
            (None, Some(to)) => Some(format!("Бюджет до {to} ₽")),
            (None, None) => None,
        }
    }

    pub fn score_tier(&self) -> ScoreTier {
        if self.match_percent >= 80 {
            ScoreTier::High
        } else if self.match_percent >= 60 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}
