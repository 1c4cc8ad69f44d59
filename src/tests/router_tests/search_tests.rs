use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn suggest_returns_links_to_listing_search() {
    let state = test_state();

    let resp = handle(get("/suggest?q=aus"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Austin, TX"));
    assert!(body.contains(r#"href="/properties?q=Austin%2C+TX""#));
    // Partial for htmx, not a page
    assert!(!body.contains("<html"));
}

#[test]
fn suggest_is_silent_below_three_chars() {
    let state = test_state();

    let body = body_string(handle(get("/suggest?q=au"), &state).unwrap());
    assert!(body.trim().is_empty());
}

#[test]
fn suggest_lists_locations_in_catalog_order() {
    let state = test_state();

    let body = body_string(handle(get("/suggest?q=%2C+c"), &state).unwrap());
    assert_eq!(body.matches("<li").count(), 5);

    let first = body.find("Beverly Hills, CA").unwrap();
    let last = body.find("Aspen, CO").unwrap();
    assert!(first < last);
}
