use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_shows_featured_before_any_search() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Featured Properties"));
    assert!(body.contains("Luxury Modern Villa"));
    assert!(body.contains("Beachfront Penthouse"));
    // Not featured
    assert!(!body.contains("Cozy Suburban Ranch"));
    assert!(!body.contains("Search Results"));
}

#[test]
fn home_quick_search_matches_description_and_type() {
    let state = test_state();

    let resp = handle(get("/?q=cabin&mode=Buy&type=All"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Search Results"));
    assert!(body.contains("Mountain Cabin Retreat"));
    assert!(!body.contains("Featured Properties"));
    assert!(!body.contains("Luxury Modern Villa"));
}

#[test]
fn home_search_with_no_hits_shows_empty_state() {
    let state = test_state();

    let body = body_string(handle(get("/?q=igloo"), &state).unwrap());
    assert!(body.contains("Search Results"));
    assert!(body.contains("No Properties Found"));
}

#[test]
fn properties_lists_everything_by_default() {
    let state = test_state();

    let resp = handle(get("/properties"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing 12 of 12 properties"));
    assert!(body.contains(r#"class="property-grid""#));
}

#[test]
fn properties_applies_price_bucket() {
    let state = test_state();

    let body = body_string(handle(get("/properties?price=Under+500k"), &state).unwrap());
    assert!(body.contains("Showing 2 of 12 properties"));
    assert!(body.contains("Cozy Suburban Ranch"));
    assert!(body.contains("Mountain Cabin Retreat"));
    assert!(!body.contains("Urban Loft Apartment"));
}

#[test]
fn properties_ignores_unknown_filter_values() {
    let state = test_state();

    let body = body_string(
        handle(get("/properties?status=Pending&type=Castle&price=Free"), &state).unwrap(),
    );
    assert!(body.contains("Showing 12 of 12 properties"));
}

#[test]
fn properties_list_view() {
    let state = test_state();

    let body = body_string(handle(get("/properties?type=Condo&view=list"), &state).unwrap());
    assert!(body.contains(r#"class="property-list""#));
    assert!(body.contains("Showing 2 of 12 properties"));
}

#[test]
fn detail_page_renders_property() {
    let state = test_state();

    let resp = handle(get("/property/1"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury Modern Villa"));
    assert!(body.contains("$1,200,000"));
    assert!(body.contains("Sarah Johnson"));
    assert!(body.contains(">SJ<"));
    assert!(body.contains("1 / 3"));
    assert!(body.contains("/enquire?property=1"));
}

#[test]
fn detail_gallery_index_wraps() {
    let state = test_state();

    let body = body_string(handle(get("/property/1?image=4"), &state).unwrap());
    assert!(body.contains("2 / 3"));
}

#[test]
fn rental_detail_shows_monthly_price() {
    let state = test_state();

    let body = body_string(handle(get("/property/6"), &state).unwrap());
    assert!(body.contains("$3,200/mo"));
}

#[test]
fn unknown_property_is_404_page() {
    let state = test_state();

    for uri in ["/property/999", "/property/abc"] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(resp.status(), 404, "{uri}");
        assert!(body_string(resp).contains("Property Not Found"));
    }
}

#[test]
fn marketing_pages_render() {
    let state = test_state();

    for (uri, heading) in [
        ("/about", "About EliteHomes"),
        ("/services", "Our Services"),
        ("/contact", "Send Us a Message"),
        ("/enquire", "Send Us an Enquiry"),
    ] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(resp.status(), 200, "{uri}");
        assert!(body_string(resp).contains(heading), "{uri}");
    }
}

#[test]
fn enquire_names_the_property() {
    let state = test_state();

    let body = body_string(handle(get("/enquire?property=6"), &state).unwrap());
    assert!(body.contains("Enquire About This Property"));
    assert!(body.contains("Urban Loft Apartment"));
    assert!(body.contains(r#"name="property" value="6""#));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    assert!(matches!(
        handle(get("/nowhere"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn properties_keeps_mode_across_view_switch() {
    let state = test_state();

    let body = body_string(handle(get("/properties?mode=Rent"), &state).unwrap());
    assert!(body.contains("Showing 1 of 12 properties"));
    assert!(body.contains(r#"href="/properties?mode=Rent&amp;view=list""#));
    assert!(body.contains(r#"name="mode" value="Rent""#));
}

#[test]
fn detail_share_link_uses_request_host() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/property/1")
        .header("Host", "elitehomes.test")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &state).unwrap());
    assert!(body.contains(
        "mailto:?subject=Luxury%20Modern%20Villa&amp;body=http%3A%2F%2Felitehomes.test%2Fproperty%2F1"
    ));
    assert!(body.contains(r#"name="phone""#));
}

#[test]
fn respond_turns_errors_into_pages() {
    let state = test_state();

    let resp = respond(get("/nowhere"), &state);
    assert_eq!(resp.status(), 404);
    let body = body_string(resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("<html"));

    let resp = respond(get("/about"), &state);
    assert_eq!(resp.status(), 200);
}
