use crate::router::handle;
use crate::tests::utils::{body_string, content_type, get, test_state};
use serde_json::Value;

fn json_body(uri: &str) -> (u16, Value) {
    let state = test_state();
    let resp = handle(get(uri), &state).expect("Failed to handle request");
    let status = resp.status().as_u16();
    assert_eq!(content_type(&resp), "application/json");
    let value = serde_json::from_str(&body_string(resp)).expect("body is not JSON");
    (status, value)
}

#[test]
fn api_lists_all_properties() {
    let (status, json) = json_body("/api/properties");

    assert_eq!(status, 200);
    assert_eq!(json["total"], 12);
    assert_eq!(json["count"], 12);
    assert_eq!(json["properties"].as_array().map(Vec::len), Some(12));
    assert_eq!(json["properties"][0]["yearBuilt"], 2020);
}

#[test]
fn api_filters_like_listing_page() {
    let (_, json) = json_body("/api/properties?mode=Rent");

    assert_eq!(json["count"], 1);
    assert_eq!(json["properties"][0]["id"], 6);
    assert_eq!(json["properties"][0]["status"], "For Rent");
    assert_eq!(json["properties"][0]["type"], "Apartment");

    let (_, json) = json_body("/api/properties?q=VILLA");
    let ids: Vec<u64> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 12]);
}

#[test]
fn api_property_by_id() {
    let (status, json) = json_body("/api/properties/8");
    assert_eq!(status, 200);
    assert_eq!(json["title"], "Beachfront Penthouse");
    assert_eq!(json["agent"]["name"], "Robert Garcia");
}

#[test]
fn api_unknown_property_is_json_404() {
    let (status, json) = json_body("/api/properties/999");
    assert_eq!(status, 404);
    assert_eq!(json["error"], "Property not found");
}

#[test]
fn api_suggest_returns_array() {
    let (status, json) = json_body("/api/suggest?q=lux");
    assert_eq!(status, 200);
    assert_eq!(
        json,
        serde_json::json!(["Luxury Modern Villa", "Downtown Luxury Condo", "Luxury Townhome"])
    );

    let (_, json) = json_body("/api/suggest?q=au");
    assert_eq!(json, serde_json::json!([]));
}
