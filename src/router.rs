use crate::catalog::Catalog;
use crate::domain::inquiry::{FieldError, InquiryForm, InquiryKind};
use crate::domain::{Criteria, Mode, Property, PropertyType, SearchScope, SearchState};
use crate::errors::ServerError;
use crate::requests::{is_htmx, parse_form, parse_query};
use crate::responses::{
    error_to_response, html_response, html_response_with_status, json_response,
    static_file_response, ResultResp,
};
use crate::templates::components::{
    contact_form, enquiry_form, inquiry_ack, suggestion_list, CardLayout,
};
use crate::templates::pages::{self, ContactVm, EnquireVm, HomeVm, PropertiesVm};
use astra::{Request, Response};
use chrono::Utc;
use maud::Markup;
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything a request handler may read. Shared by reference across workers.
pub struct AppState {
    pub catalog: Catalog,
    pub static_dir: PathBuf,
}

/// Server entry point: route, turn errors into pages, log the outcome.
pub fn respond(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(%method, %path, error = %err, "request failed");
            error_to_response(err)
        }
    };

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, state),
        ("GET", "/properties") => properties(&req, state),
        ("GET", "/suggest") => {
            let params = parse_query(&req);
            let suggestions = state.catalog.suggest(query_value(&params, "q"));
            html_response(suggestion_list(&suggestions))
        }
        ("GET", "/about") => html_response(pages::about_page()),
        ("GET", "/services") => html_response(pages::services_page()),
        ("GET", "/contact") => html_response(pages::contact_page(&ContactVm {
            form: &InquiryForm::default(),
            errors: &[],
            submitted: None,
        })),
        ("POST", "/contact") => submit_inquiry(&mut req, state, InquiryKind::Contact),
        ("GET", "/enquire") => enquire(&req, state),
        ("POST", "/enquire") => submit_inquiry(&mut req, state, InquiryKind::Enquiry),

        ("GET", "/api/properties") => {
            let criteria = Criteria::from_params(&parse_query(&req));
            let found = state.catalog.filter(&criteria);
            json_response(
                200,
                &json!({
                    "total": state.catalog.len(),
                    "count": found.len(),
                    "properties": found,
                }),
            )
        }
        ("GET", "/api/suggest") => {
            let params = parse_query(&req);
            json_response(200, &state.catalog.suggest(query_value(&params, "q")))
        }
        ("GET", p) if p.starts_with("/api/properties/") => {
            let found = parse_id(&p["/api/properties/".len()..])
                .and_then(|id| state.catalog.find_by_id(id));
            match found {
                Some(property) => json_response(200, property),
                None => json_response(404, &json!({ "error": "Property not found" })),
            }
        }

        ("GET", p) if p.starts_with("/property/") => {
            property_detail(&req, state, &p["/property/".len()..])
        }
        ("GET", p) if p.starts_with("/static/") => {
            static_file_response(&state.static_dir, &p["/static/".len()..])
        }

        _ => Err(ServerError::NotFound),
    }
}

fn home(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let query = query_value(&params, "q").trim().to_string();
    let mode = params.get("mode").and_then(|m| Mode::parse(m));
    let property_type = params.get("type").and_then(|t| PropertyType::parse(t));

    // Any of the quick-search fields present means the visitor pressed Search.
    let searched = ["q", "mode", "type"].iter().any(|k| params.contains_key(*k));
    let search = if searched {
        let criteria = Criteria {
            search_term: Some(query.clone()),
            mode,
            property_type,
            ..Criteria::default()
        }
        .with_scope(SearchScope::Extended);
        let found = state.catalog.filter(&criteria);
        debug!(?criteria, count = found.len(), "home search");
        SearchState::Searched(found)
    } else {
        SearchState::NotSearched
    };

    html_response(pages::home_page(&HomeVm {
        query,
        mode,
        property_type,
        featured: state.catalog.featured(),
        search,
    }))
}

fn properties(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let criteria = Criteria::from_params(&params);
    let layout = CardLayout::parse(params.get("view").map(String::as_str));
    let results = state.catalog.filter(&criteria);
    debug!(?criteria, count = results.len(), "properties filtered");

    html_response(pages::properties_page(&PropertiesVm {
        criteria,
        layout,
        results,
        total: state.catalog.len(),
    }))
}

fn property_detail(req: &Request, state: &AppState, raw_id: &str) -> ResultResp {
    let Some(property) = parse_id(raw_id).and_then(|id| state.catalog.find_by_id(id)) else {
        return html_response_with_status(404, pages::property_not_found_page());
    };

    let image = parse_query(req)
        .get("image")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    let host = req
        .headers()
        .get("Host")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let share_url = format!("http://{host}/property/{}", property.id);

    html_response(pages::property_detail_page(property, image, &share_url))
}

fn enquire(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let property = params
        .get("property")
        .and_then(|v| parse_id(v))
        .and_then(|id| state.catalog.find_by_id(id));

    let form = InquiryForm {
        property_id: property.map(|p| p.id),
        ..InquiryForm::default()
    };

    html_response(pages::enquire_page(&EnquireVm {
        form: &form,
        errors: &[],
        property,
        submitted: None,
    }))
}

/// Validate a posted form. htmx callers get the panel fragment back, with a
/// 200 even when invalid; plain posts get the whole page, 422 when invalid.
fn submit_inquiry(req: &mut Request, state: &AppState, kind: InquiryKind) -> ResultResp {
    let htmx = is_htmx(req);
    let form = InquiryForm::from_params(&parse_form(req)?);
    let property = form.property_id.and_then(|id| state.catalog.find_by_id(id));

    match form.validate(kind, Utc::now()) {
        Ok(inquiry) => {
            info!(
                kind = inquiry.kind.as_str(),
                subject = inquiry.subject.unwrap_or("none"),
                property = ?inquiry.property_id,
                received_at = %inquiry.received_at.to_rfc3339(),
                "inquiry received"
            );

            let ack = inquiry_ack(kind, &inquiry.name);
            if htmx {
                return html_response(ack);
            }
            html_response(inquiry_page(kind, &form, &[], property, Some(ack)))
        }
        Err(errors) => {
            debug!(kind = kind.as_str(), invalid = errors.len(), "inquiry rejected");

            if htmx {
                let fragment = match kind {
                    InquiryKind::Contact => contact_form(&form, &errors),
                    InquiryKind::Enquiry => enquiry_form(&form, &errors, property),
                };
                return html_response(fragment);
            }
            html_response_with_status(422, inquiry_page(kind, &form, &errors, property, None))
        }
    }
}

fn inquiry_page(
    kind: InquiryKind,
    form: &InquiryForm,
    errors: &[FieldError],
    property: Option<&Property>,
    submitted: Option<Markup>,
) -> Markup {
    match kind {
        InquiryKind::Contact => pages::contact_page(&ContactVm {
            form,
            errors,
            submitted,
        }),
        InquiryKind::Enquiry => pages::enquire_page(&EnquireVm {
            form,
            errors,
            property,
            submitted,
        }),
    }
}

fn query_value<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn parse_id(raw: &str) -> Option<u32> {
    raw.trim_end_matches('/').parse().ok()
}
