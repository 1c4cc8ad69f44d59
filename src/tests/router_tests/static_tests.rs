use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{content_type, get, test_state};

#[test]
fn serves_stylesheet() {
    let state = test_state();

    let resp = handle(get("/static/main.css"), &state).expect("stylesheet missing");
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "text/css; charset=utf-8");
}

#[test]
fn serves_favicon_as_svg() {
    let state = test_state();

    let resp = handle(get("/static/favicon.svg"), &state).unwrap();
    assert_eq!(content_type(&resp), "image/svg+xml");
}

#[test]
fn rejects_traversal_and_missing_files() {
    let state = test_state();

    for uri in ["/static/../Cargo.toml", "/static/nope.css", "/static/"] {
        assert!(
            matches!(handle(get(uri), &state), Err(ServerError::NotFound)),
            "{uri}"
        );
    }
}
