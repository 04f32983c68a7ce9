use crate::catalog::{CatalogQuery, DealType, PropertyType, RoomBand};
use crate::mock::leads::CITIES;
use maud::{html, Markup};

/// Filter panel. Submits a GET to the catalog; sort and view ride along as
/// hidden fields and the page is dropped, so every apply lands on page 1.
pub fn lead_filters(query: &CatalogQuery, reset_href: &str) -> Markup {
    let c = &query.criteria;

    html! {
        div class="filters-panel" {
            div class="filters-header" {
                h3 { "Фильтры" }
                a class="link-button" href=(reset_href) { "Сбросить" }
            }
            form method="get" action="/leads-catalog" class="filters-form" {
                input type="hidden" name="sort" value=(query.sort.as_str());
                input type="hidden" name="view" value=(query.view.as_str());

                div class="filters-section" {
                    span class="section-title" { "Локация" }
                    label for="city" { "Город" }
                    select name="city" id="city" {
                        option value="" selected[c.city.is_none()] { "Выберите город" }
                        @for (code, name) in CITIES {
                            option value=(code) selected[c.city.as_deref() == Some(*code)] { (name) }
                        }
                    }
                }

                div class="filters-section" {
                    span class="section-title" { "Параметры сделки" }

                    label for="dealType" { "Тип сделки" }
                    select name="dealType" id="dealType" {
                        option value="" selected[c.deal_type.is_none()] { "Выберите тип" }
                        @for deal in DealType::ALL {
                            option value=(deal.as_str()) selected[c.deal_type == Some(deal)] { (deal.label()) }
                        }
                    }

                    label for="propertyType" { "Тип объекта" }
                    select name="propertyType" id="propertyType" {
                        option value="" selected[c.property_type.is_none()] { "Выберите тип" }
                        @for kind in PropertyType::ALL {
                            option value=(kind.as_str()) selected[c.property_type == Some(kind)] { (kind.label()) }
                        }
                    }

                    div class="inline-group" {
                        label {
                            "Бюджет, ₽"
                            input type="number" name="budgetFrom" min="0" placeholder="от"
                                value=[c.budget_from];
                        }
                        label {
                            span class="sr-only" { "Бюджет до" }
                            input type="number" name="budgetTo" min="0" placeholder="до"
                                value=[c.budget_to];
                        }
                    }

                    fieldset class="rooms-group" {
                        legend { "Комнаты" }
                        label class=(if c.rooms.is_none() { "room-button active" } else { "room-button" }) {
                            input type="radio" name="rooms" value="" checked[c.rooms.is_none()];
                            "Любое"
                        }
                        @for band in RoomBand::ALL {
                            label class=(if c.rooms == Some(band) { "room-button active" } else { "room-button" }) {
                                input type="radio" name="rooms" value=(band.as_str()) checked[c.rooms == Some(band)];
                                (band.as_str())
                            }
                        }
                    }

                    label class="checkbox" {
                        input type="checkbox" name="exclusive" value="true" checked[c.exclusive];
                        "Только эксклюзив"
                    }
                }

                div class="filters-actions" {
                    button type="submit" class="button primary" { "Применить фильтр" }
                    a class="button" href=(reset_href) { "Очистить" }
                }
            }
        }
    }
}
