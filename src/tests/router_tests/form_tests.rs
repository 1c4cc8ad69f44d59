use crate::router::handle;
use crate::tests::utils::{body_string, post_form, test_state};

const VALID_CONTACT: &str =
    "name=Jane+Doe&email=jane%40example.com&subject=buying&preferredTime=morning&message=Looking+for+a+house";

#[test]
fn contact_returns_partial_ack_for_htmx() {
    let state = test_state();

    let resp = handle(post_form("/contact", VALID_CONTACT, true), &state)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("Jane Doe"));
    // Partial for htmx swapping
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn contact_plain_post_gets_full_page() {
    let state = test_state();

    let resp = handle(post_form("/contact", VALID_CONTACT, false), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<html"));
    assert!(body.contains("Message Sent!"));
    assert!(!body.contains(r#"action="/contact""#));
}

#[test]
fn invalid_contact_is_422_with_messages() {
    let state = test_state();

    let resp = handle(
        post_form("/contact", "name=Jane+Doe&email=not-an-email&message=", false),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("Please enter a message."));
    assert!(!body.contains("Please enter your name."));
    // Keeps what was typed
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(body.contains(r#"value="not-an-email""#));
}

#[test]
fn invalid_contact_over_htmx_swaps_form_back() {
    let state = test_state();

    let resp = handle(post_form("/contact", "email=jane%40example.com", true), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"id="inquiry-panel""#));
    assert!(body.contains("Please enter your name."));
    assert!(!body.contains("<html"));
}

#[test]
fn enquiry_about_property_is_acknowledged() {
    let state = test_state();

    let resp = handle(
        post_form(
            "/enquire",
            "property=1&name=Sam&email=sam%40example.com&message=Still+available%3F",
            false,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Thank you!"));
    assert!(body.contains("Enquire About This Property"));
}

#[test]
fn invalid_enquiry_keeps_property_context() {
    let state = test_state();

    let resp = handle(post_form("/enquire", "property=1&name=Sam", true), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury Modern Villa"));
    assert!(body.contains(r#"name="property" value="1""#));
    assert!(body.contains("Please enter a message."));
}
