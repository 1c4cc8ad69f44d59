use crate::domain::inquiry::{
    FieldError, InquiryForm, InquiryKind, PREFERRED_TIMES, PROPERTY_INTERESTS, SUBJECTS,
};
use crate::domain::property::Property;
use maud::{html, Markup};

fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn field_error(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @if let Some(msg) = error_for(errors, field) {
            p class="field-error" { (msg) }
        }
    }
}

fn select(name: &str, placeholder: &str, options: &[(&str, &str)], current: &str) -> Markup {
    html! {
        select id=(name) name=(name) {
            option value="" selected[current.is_empty()] { (placeholder) }
            @for (value, label) in options {
                option value=(value) selected[current == *value] { (label) }
            }
        }
    }
}

/// Name / email / message inputs shared by both forms.
fn core_fields(form: &InquiryForm, errors: &[FieldError]) -> Markup {
    html! {
        div class="field" {
            label for="name" { "Your Name" }
            input type="text" id="name" name="name" value=(form.name) placeholder="John Doe" autocomplete="name" required;
            (field_error(errors, "name"))
        }
        div class="field" {
            label for="email" { "Email" }
            input type="email" id="email" name="email" value=(form.email) placeholder="you@example.com" autocomplete="email" required;
            (field_error(errors, "email"))
        }
    }
}

fn message_field(form: &InquiryForm, errors: &[FieldError]) -> Markup {
    html! {
        div class="field" {
            label for="message" { "Message" }
            textarea id="message" name="message" rows="5" placeholder="Write your message here..." required { (form.message) }
            (field_error(errors, "message"))
        }
    }
}

pub fn contact_form(form: &InquiryForm, errors: &[FieldError]) -> Markup {
    html! {
        div id="inquiry-panel" class="inquiry-panel" {
            form
                method="post"
                action="/contact"
                hx-post="/contact"
                hx-target="#inquiry-panel"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="inquiry-form"
            {
                div class="field-row" {
                    (core_fields(form, errors))
                }
                div class="field-row" {
                    div class="field" {
                        label for="phone" { "Phone" }
                        input type="tel" id="phone" name="phone" value=(form.phone) placeholder="+1 (555) 000-0000" autocomplete="tel";
                    }
                    div class="field" {
                        label for="preferredTime" { "Preferred Contact Time" }
                        (select("preferredTime", "Select preferred time", PREFERRED_TIMES, &form.preferred_time))
                    }
                }
                div class="field-row" {
                    div class="field" {
                        label for="subject" { "Subject" }
                        (select("subject", "Select a subject", SUBJECTS, &form.subject))
                    }
                    div class="field" {
                        label for="propertyType" { "Property Type" }
                        (select("propertyType", "Select property type", PROPERTY_INTERESTS, &form.property_type))
                    }
                }
                (message_field(form, errors))
                button type="submit" class="btn primary block" { "Send Message" }
            }
        }
    }
}

/// Enquiry form, optionally about one listing.
pub fn enquiry_form(form: &InquiryForm, errors: &[FieldError], property: Option<&Property>) -> Markup {
    html! {
        div id="inquiry-panel" class="inquiry-panel" {
            @if let Some(p) = property {
                p class="enquiry-subject" { "About: " strong { (p.title) } " · " (p.location) }
            }
            form
                method="post"
                action="/enquire"
                hx-post="/enquire"
                hx-target="#inquiry-panel"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="inquiry-form"
            {
                @if let Some(p) = property {
                    input type="hidden" name="property" value=(p.id);
                }
                (core_fields(form, errors))
                div class="field" {
                    label for="phone" { "Phone" }
                    input type="tel" id="phone" name="phone" value=(form.phone) placeholder="+1 (555) 000-0000" autocomplete="tel";
                }
                (message_field(form, errors))
                button type="submit" class="btn primary block" { "✉️ Send Enquiry" }
            }
        }
    }
}

/// Acknowledgement that replaces the form after a valid submission.
pub fn inquiry_ack(kind: InquiryKind, name: &str) -> Markup {
    html! {
        div id="inquiry-panel" class="inquiry-panel ack fade-in" {
            @match kind {
                InquiryKind::Contact => {
                    h3 { "Message Sent!" }
                    p { "Thank you for contacting us, " (name) ". We'll get back to you soon." }
                }
                InquiryKind::Enquiry => {
                    h3 { "🎉 Thank you!" }
                    p { "We'll get back to you very soon, " (name) "." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_keeps_values_and_errors() {
        let form = InquiryForm {
            name: "Jane".into(),
            subject: "renting".into(),
            ..InquiryForm::default()
        };
        let errors = vec![FieldError {
            field: "email",
            message: "Please enter a valid email address.",
        }];
        let html = contact_form(&form, &errors).into_string();

        assert!(html.contains(r#"value="Jane""#));
        assert!(html.contains(r#"<option value="renting" selected>"#));
        assert!(html.contains("Please enter a valid email address."));
    }

    #[test]
    fn enquiry_form_asks_for_phone() {
        let form = InquiryForm {
            phone: "555-0100".into(),
            property_id: Some(1),
            ..InquiryForm::default()
        };
        let html = enquiry_form(&form, &[], None).into_string();
        assert!(html.contains(r#"name="phone" value="555-0100""#));
    }

    #[test]
    fn ack_is_a_fragment() {
        let html = inquiry_ack(InquiryKind::Contact, "Jane").into_string();
        assert!(html.contains("Message Sent!"));
        assert!(!html.contains("<html"));
    }
}
