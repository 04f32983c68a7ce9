use crate::catalog::{CatalogQuery, ViewMode};
use crate::domain::dashboard::MetricsRange;
use crate::domain::listing::search_listings;
use crate::domain::object_form::{NewObject, ObjectDraft};
use crate::domain::proposal::DealsTab;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, json_response, redirect, ResultResp};
use crate::spreadsheets::export_leads_xlsx;
use crate::state::AppState;
use crate::templates::components::contact_card;
use crate::templates::pages::{self, FormNotice};
use astra::Request;
use std::io::Read;
use tracing::debug;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let query = query.as_deref();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let range = match query_param(query, "range") {
                Some(raw) => raw.parse::<MetricsRange>()?,
                None => MetricsRange::default(),
            };
            html_response(pages::dashboard_page(&state.dashboard, range))
        }

        ("GET", "/my-objects") => {
            let q = query_param(query, "q").unwrap_or_default();
            let view = match query_param(query, "view") {
                Some(raw) => raw.parse::<ViewMode>()?,
                None => ViewMode::default(),
            };
            let found = search_listings(&state.listings, &q);
            html_response(pages::my_objects_page(&found, &q, view))
        }

        ("GET", "/my-objects/new") => {
            html_response(pages::new_object_page(&ObjectDraft::example(), None))
        }

        ("POST", "/my-objects/new") => {
            let mut body = Vec::new();
            req.into_body()
                .reader()
                .read_to_end(&mut body)
                .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

            let draft = ObjectDraft::from_form(&body);
            let notice = match draft.validate() {
                Ok(object) => {
                    debug!(title = %object.title, publish = draft.publish, "object accepted");
                    FormNotice::Saved(NewObject::outcome_message(draft.publish))
                }
                Err(errors) => {
                    debug!(errors = errors.len(), "object rejected");
                    FormNotice::Invalid(errors)
                }
            };
            html_response(pages::new_object_page(&draft, Some(&notice)))
        }

        ("GET", "/leads-catalog") => {
            let catalog_query = CatalogQuery::parse(query)?;
            let controller = catalog_query.controller(&state.leads);
            html_response(pages::leads_catalog_page(&controller, &catalog_query))
        }

        ("GET", "/leads-catalog/export") => {
            let controller = CatalogQuery::parse(query)?.controller(&state.leads);
            export_leads_xlsx(controller.ordered())
        }

        ("GET", "/api/leads") => {
            let controller = CatalogQuery::parse(query)?.controller(&state.leads);
            json_response(&controller.snapshot())
        }

        ("GET", "/deals") => {
            let tab = match query_param(query, "tab") {
                Some(raw) => raw.parse::<DealsTab>()?,
                None => DealsTab::default(),
            };
            html_response(pages::deals_page(&state.proposals, tab))
        }

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", p) => match contacts_lead_id(p) {
            Some(id) => {
                let lead = state.leads.get(id).ok_or(ServerError::NotFound)?;
                html_response(contact_card(lead))
            }
            None => redirect("/"),
        },

        _ => Err(ServerError::NotFound),
    }
}

/// `/leads-catalog/{id}/contacts` -> `{id}`.
fn contacts_lead_id(path: &str) -> Option<&str> {
    path.strip_prefix("/leads-catalog/")?
        .strip_suffix("/contacts")
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// First non-empty value of `key`, percent-decoded.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(_, v)| v.trim().to_string())
}
