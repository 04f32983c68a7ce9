use crate::catalog::{DealType, PropertyType};
use crate::domain::object_form::{BuildingType, FieldErrors, ObjectDraft, ObjectTag, MSG_INVALID};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

/// Outcome of the last submission, if any.
pub enum FormNotice {
    Saved(&'static str),
    Invalid(FieldErrors),
}

fn field_error(errors: Option<&FieldErrors>, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.and_then(|e| e.get(field)) {
            span class="field-error" role="alert" { (message) }
        }
    }
}

fn text_field(label: &str, name: &str, value: &str, kind: &str, errors: Option<&FieldErrors>) -> Markup {
    html! {
        label class="form-field" {
            span { (label) }
            input type=(kind) name=(name) value=(value)
                aria-invalid=[errors.and_then(|e| e.get(name)).map(|_| "true")];
            (field_error(errors, name))
        }
    }
}

pub fn new_object_page(draft: &ObjectDraft, notice: Option<&FormNotice>) -> Markup {
    let errors = match notice {
        Some(FormNotice::Invalid(errors)) => Some(errors),
        _ => None,
    };

    desktop_layout(
        "Новый объект",
        NavItem::MyObjects,
        html! {
            div class="page-header" {
                h1 { "Создание объекта" }
                a class="link-button" href="/my-objects" { "← К списку объектов" }
            }

            @match notice {
                Some(FormNotice::Saved(message)) => {
                    div class="notice notice-success" role="status" { (message) }
                },
                Some(FormNotice::Invalid(_)) => {
                    div class="notice notice-error" role="alert" { (MSG_INVALID) }
                },
                None => {},
            }

            div class="object-form-layout" {
                form method="post" action="/my-objects/new" class="object-form" {
                    (text_field("Заголовок", "title", &draft.title, "text", errors))
                    (text_field("Город", "city", &draft.city, "text", errors))
                    (text_field("Адрес", "address", &draft.address, "text", errors))

                    div class="inline-group" {
                        (text_field("Цена, ₽", "price", &draft.price, "number", errors))
                        (text_field("Площадь, м²", "area", &draft.area, "text", errors))
                    }
                    div class="inline-group" {
                        (text_field("Этаж", "floor", &draft.floor, "number", errors))
                        (text_field("Этажей в доме", "floorsTotal", &draft.floors_total, "number", errors))
                        (text_field("Комнаты", "rooms", &draft.rooms, "number", errors))
                    }

                    div class="inline-group" {
                        label class="form-field" {
                            span { "Тип объекта" }
                            select name="propertyType" {
                                option value="" selected[draft.property_type.is_empty()] { "Выберите тип" }
                                @for kind in PropertyType::ALL {
                                    option value=(kind.as_str()) selected[draft.property_type == kind.as_str()] { (kind.label()) }
                                }
                            }
                            (field_error(errors, "propertyType"))
                        }
                        label class="form-field" {
                            span { "Тип сделки" }
                            select name="dealType" {
                                option value="" selected[draft.deal_type.is_empty()] { "Выберите тип" }
                                @for deal in DealType::ALL {
                                    option value=(deal.as_str()) selected[draft.deal_type == deal.as_str()] { (deal.label()) }
                                }
                            }
                            (field_error(errors, "dealType"))
                        }
                    }

                    label class="form-field" {
                        span { "Описание" }
                        textarea name="description" rows="5" { (draft.description) }
                        (field_error(errors, "description"))
                    }

                    fieldset class="tags-group" {
                        legend { "Теги" }
                        @for tag in ObjectTag::ALL {
                            label class="checkbox" {
                                input type="checkbox" name="tags" value=(tag.as_str()) checked[draft.tags.contains(&tag)];
                                (tag.label())
                            }
                        }
                    }

                    fieldset class="building-group" {
                        legend { "Тип дома" }
                        @for building in BuildingType::ALL {
                            label class="radio" {
                                input type="radio" name="buildingType" value=(building.as_str()) checked[draft.building_type == building];
                                (building.label())
                            }
                        }
                    }

                    div class="form-actions" {
                        button type="submit" name="publish" value="0" class="button" { "Сохранить черновик" }
                        button type="submit" name="publish" value="1" class="button primary" { "Опубликовать" }
                    }
                }

                aside class="object-preview" aria-label="Предпросмотр" {
                    h3 { "Предпросмотр" }
                    div class="preview-card" {
                        h4 {
                            @if draft.title.trim().is_empty() { "Без названия" } @else { (draft.title) }
                        }
                        p class="object-price" { (draft.price_preview()) }
                        p class="muted" { (draft.tags_preview()) }
                    }
                }
            }
        },
    )
}
