// requests.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Form bodies beyond this are rejected outright.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Query string as a map. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_pairs(q.as_bytes()))
        .unwrap_or_default()
}

/// Read an `application/x-www-form-urlencoded` body.
pub fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form is too large".into()));
    }

    Ok(parse_pairs(&raw))
}

/// True when the request came from htmx and expects a fragment back.
pub fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_pairs(input: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}
