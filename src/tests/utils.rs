use crate::catalog::Catalog;
use crate::router::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::PathBuf;

/// App state over the embedded sample listings and the repo's `static/` dir.
pub fn test_state() -> AppState {
    AppState {
        catalog: Catalog::sample().unwrap_or_else(|e| panic!("sample catalog failed: {e}")),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
    }
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Form POST; `htmx` adds the header htmx sends with every request.
pub fn post_form(uri: &str, form: &str, htmx: bool) -> astra::Request {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
