use maud::{html, Markup};

pub mod error;
pub mod inquiry_form;
pub mod panel;
pub mod property_card;
pub mod suggestions;

pub use error::error_page;
pub use inquiry_form::{contact_form, enquiry_form, inquiry_ack};
pub use panel::{blurb_panel, service_panel};
pub use property_card::{property_card, CardLayout};
pub use suggestions::suggestion_list;

/// Blue gradient page banner used by the marketing pages.
pub fn hero(title: &str, subtitle: &str, background: &str) -> Markup {
    html! {
        section class="hero" style=(format!("background-image: url('{background}')")) {
            div class="hero-inner" {
                h1 { (title) }
                p class="lead" { (subtitle) }
            }
        }
    }
}

pub fn section_heading(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="section-heading" {
            h2 { (title) }
            p { (subtitle) }
        }
    }
}

pub fn cta_band(title: &str, body: &str, links: &[(&str, &str)]) -> Markup {
    html! {
        section class="cta-band" {
            h2 { (title) }
            p { (body) }
            div class="cta-links" {
                @for (href, label) in links {
                    a href=(href) class="btn" { (label) }
                }
            }
        }
    }
}
