// src/domain/object_form.rs

use crate::catalog::{DealType, PropertyType};
use crate::domain::format::format_rub;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectTag {
    Exclusive,
    Urgent,
    Discount,
    Verified,
}

impl ObjectTag {
    pub const ALL: [ObjectTag; 4] = [
        ObjectTag::Exclusive,
        ObjectTag::Urgent,
        ObjectTag::Discount,
        ObjectTag::Verified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectTag::Exclusive => "exclusive",
            ObjectTag::Urgent => "urgent",
            ObjectTag::Discount => "discount",
            ObjectTag::Verified => "verified",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectTag::Exclusive => "Эксклюзив",
            ObjectTag::Urgent => "Срочно",
            ObjectTag::Discount => "Скидка",
            ObjectTag::Verified => "Проверено",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        ObjectTag::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildingType {
    #[default]
    New,
    Secondary,
}

impl BuildingType {
    pub const ALL: [BuildingType; 2] = [BuildingType::New, BuildingType::Secondary];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildingType::New => "new",
            BuildingType::Secondary => "secondary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildingType::New => "Новостройка",
            BuildingType::Secondary => "Вторичка",
        }
    }
}

/// The new-object form exactly as submitted. Numeric fields stay raw so an
/// invalid submission can be re-rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectDraft {
    pub title: String,
    pub city: String,
    pub address: String,
    pub price: String,
    pub area: String,
    pub floor: String,
    pub floors_total: String,
    pub rooms: String,
    pub property_type: String,
    pub deal_type: String,
    pub description: String,
    pub tags: Vec<ObjectTag>,
    pub building_type: BuildingType,
    pub publish: bool,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewObject {
    pub title: String,
    pub city: String,
    pub address: String,
    pub price: u64,
    pub area: f64,
    pub floor: u32,
    pub floors_total: u32,
    pub rooms: u32,
    pub property_type: PropertyType,
    pub deal_type: DealType,
    pub description: String,
    pub tags: Vec<ObjectTag>,
    pub building_type: BuildingType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, &'static str)>,
}

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push((field, message));
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

pub const MSG_SAVED_DRAFT: &str = "Черновик объекта сохранён";
pub const MSG_PUBLISHED: &str = "Объект сохранён и отправлен на публикацию";
pub const MSG_INVALID: &str = "Проверьте заполнение обязательных полей";

const MSG_MIN_ONE: &str = "Значение должно быть не меньше 1";
const MSG_NOT_NUMBER: &str = "Введите число";

fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &'static str,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, message);
    }
    value.to_string()
}

fn required_count(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &'static str,
) -> u32 {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, message);
        return 0;
    }
    match value.parse::<u32>() {
        Ok(0) => {
            errors.push(field, MSG_MIN_ONE);
            0
        }
        Ok(n) => n,
        Err(_) => {
            errors.push(field, MSG_NOT_NUMBER);
            0
        }
    }
}

/// Strip digit-group separators from a typed amount.
fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect()
}

impl ObjectDraft {
    /// The prefilled example shown on a fresh form.
    pub fn example() -> Self {
        Self {
            title: "Двухкомнатная квартира в ЖК «Горизонт»".into(),
            city: "Москва".into(),
            address: "ул. Ленина, д. 45, кв. 112".into(),
            price: "15500000".into(),
            area: "65.5".into(),
            floor: "7".into(),
            floors_total: "16".into(),
            rooms: "2".into(),
            property_type: PropertyType::Flat.as_str().into(),
            deal_type: DealType::Sale.as_str().into(),
            description: "Просторная двухкомнатная квартира с дизайнерским ремонтом в новом жилом комплексе «Горизонт». Панорамные окна, вид на парк. Развитая инфраструктура и закрытая территория.".into(),
            tags: vec![ObjectTag::Exclusive],
            building_type: BuildingType::New,
            publish: false,
        }
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn from_form(body: &[u8]) -> Self {
        let mut draft = ObjectDraft::default();

        for (key, value) in form_urlencoded::parse(body) {
            let value = value.into_owned();
            match key.as_ref() {
                "title" => draft.title = value,
                "city" => draft.city = value,
                "address" => draft.address = value,
                "price" => draft.price = value,
                "area" => draft.area = value,
                "floor" => draft.floor = value,
                "floorsTotal" => draft.floors_total = value,
                "rooms" => draft.rooms = value,
                "propertyType" => draft.property_type = value,
                "dealType" => draft.deal_type = value,
                "description" => draft.description = value,
                "tags" => {
                    if let Some(tag) = ObjectTag::parse(&value) {
                        if !draft.tags.contains(&tag) {
                            draft.tags.push(tag);
                        }
                    }
                }
                "buildingType" => {
                    if value == BuildingType::Secondary.as_str() {
                        draft.building_type = BuildingType::Secondary;
                    }
                }
                "publish" => draft.publish = matches!(value.as_str(), "1" | "true" | "on"),
                _ => {}
            }
        }

        draft
    }

    pub fn validate(&self) -> Result<NewObject, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = required_text(&mut errors, "title", &self.title, "Введите заголовок");
        let city = required_text(&mut errors, "city", &self.city, "Укажите город");
        let address = required_text(&mut errors, "address", &self.address, "Укажите адрес");

        let area = match self.area.trim().replace(',', ".") {
            raw if raw.is_empty() => {
                errors.push("area", "Введите площадь");
                0.0
            }
            raw => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 1.0 => v,
                Ok(_) => {
                    errors.push("area", MSG_MIN_ONE);
                    0.0
                }
                Err(_) => {
                    errors.push("area", MSG_NOT_NUMBER);
                    0.0
                }
            },
        };

        let floor = required_count(&mut errors, "floor", &self.floor, "Укажите этаж");
        let floors_total = required_count(
            &mut errors,
            "floorsTotal",
            &self.floors_total,
            "Укажите общее количество этажей",
        );
        if floor > 0 && floors_total > 0 && floor > floors_total {
            errors.push("floor", "Этаж не может быть выше этажности дома");
        }
        let rooms = required_count(&mut errors, "rooms", &self.rooms, "Укажите количество комнат");

        let property_type = self.property_type.parse::<PropertyType>().ok();
        if property_type.is_none() {
            errors.push("propertyType", "Выберите тип объекта");
        }
        let deal_type = self.deal_type.parse::<DealType>().ok();
        if deal_type.is_none() {
            errors.push("dealType", "Выберите тип сделки");
        }

        let price = match compact(&self.price) {
            raw if raw.is_empty() => {
                errors.push("price", "Укажите цену");
                0
            }
            raw => raw.parse::<u64>().unwrap_or_else(|_| {
                errors.push("price", MSG_NOT_NUMBER);
                0
            }),
        };

        let description = required_text(
            &mut errors,
            "description",
            &self.description,
            "Добавьте описание объекта",
        );

        match (property_type, deal_type) {
            (Some(property_type), Some(deal_type)) if errors.is_empty() => Ok(NewObject {
                title,
                city,
                address,
                price,
                area,
                floor,
                floors_total,
                rooms,
                property_type,
                deal_type,
                description,
                tags: self.tags.clone(),
                building_type: self.building_type,
            }),
            _ => Err(errors),
        }
    }

    /// Price for the live preview card; "—" until it parses.
    pub fn price_preview(&self) -> String {
        compact(&self.price)
            .parse::<u64>()
            .map(format_rub)
            .unwrap_or_else(|_| "—".to_string())
    }

    pub fn tags_preview(&self) -> String {
        if self.tags.is_empty() {
            return "Без тегов".to_string();
        }
        self.tags
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl NewObject {
    pub fn outcome_message(publish: bool) -> &'static str {
        if publish {
            MSG_PUBLISHED
        } else {
            MSG_SAVED_DRAFT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_draft_is_valid() {
        let obj = ObjectDraft::example().validate().unwrap();
        assert_eq!(obj.rooms, 2);
        assert_eq!(obj.price, 15_500_000);
        assert_eq!(obj.area, 65.5);
        assert_eq!(obj.property_type, PropertyType::Flat);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ObjectDraft::default().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Введите заголовок"));
        assert_eq!(errors.get("price"), Some("Укажите цену"));
        assert_eq!(errors.get("floorsTotal"), Some("Укажите общее количество этажей"));
        assert_eq!(errors.get("dealType"), Some("Выберите тип сделки"));
        assert_eq!(errors.len(), 11);
    }

    #[test]
    fn numeric_minimums_and_floor_order() {
        let mut draft = ObjectDraft::example();
        draft.rooms = "0".into();
        draft.area = "0,5".into();
        draft.floor = "20".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("rooms"), Some(MSG_MIN_ONE));
        assert_eq!(errors.get("area"), Some(MSG_MIN_ONE));
        assert_eq!(errors.get("floor"), Some("Этаж не может быть выше этажности дома"));
    }

    #[test]
    fn infinite_area_is_rejected() {
        for raw in ["inf", "infinity", "NaN"] {
            let mut draft = ObjectDraft::example();
            draft.area = raw.into();
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.get("area"), Some(MSG_MIN_ONE), "{raw}");
        }
    }

    #[test]
    fn decodes_form_body() {
        let body = b"title=%D0%94%D0%BE%D0%BC&city=Kazan&address=a&price=9+500+000&area=120%2C5\
&floor=1&floorsTotal=2&rooms=4&propertyType=house&dealType=rent&description=d\
&tags=urgent&tags=verified&tags=urgent&buildingType=secondary&publish=1";
        let draft = ObjectDraft::from_form(body);
        assert_eq!(draft.title, "Дом");
        assert_eq!(draft.tags, vec![ObjectTag::Urgent, ObjectTag::Verified]);
        assert_eq!(draft.building_type, BuildingType::Secondary);
        assert!(draft.publish);

        let obj = draft.validate().unwrap();
        assert_eq!(obj.price, 9_500_000);
        assert_eq!(obj.area, 120.5);
        assert_eq!(obj.deal_type, DealType::Rent);
    }

    #[test]
    fn previews() {
        let mut draft = ObjectDraft::example();
        assert_eq!(draft.price_preview(), "15\u{a0}500\u{a0}000 ₽");
        assert_eq!(draft.tags_preview(), "Эксклюзив");
        draft.price = "abc".into();
        draft.tags.clear();
        assert_eq!(draft.price_preview(), "—");
        assert_eq!(draft.tags_preview(), "Без тегов");
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(NewObject::outcome_message(true), MSG_PUBLISHED);
        assert_eq!(NewObject::outcome_message(false), MSG_SAVED_DRAFT);
    }
}
