use crate::domain::inquiry::InquiryForm;
use crate::domain::property::{group_thousands, Property};
use crate::templates::components::enquiry_form;
use crate::templates::desktop_layout;
use maud::{html, Markup, Render};

/// Detail page. `image` is the requested gallery position; out-of-range
/// values wrap. `share_url` is the absolute link put in the share email.
pub fn property_detail_page(property: &Property, image: usize, share_url: &str) -> Markup {
    let gallery = property.gallery(image);
    let base = format!("/property/{}", property.id);

    desktop_layout(
        &property.title,
        "/properties",
        html! {
            main class="container detail" {
                a href="/properties" class="back-link" { "← Back to Properties" }

                div class="gallery" {
                    img
                        src=(property.images[gallery.current])
                        alt=(format!("{} image {}", property.title, gallery.current + 1));
                    span class="badge" { (property.status.as_str()) }
                    span class="image-count" { (gallery.current + 1) " / " (gallery.len) }
                    @if gallery.len > 1 {
                        a class="gallery-nav prev" href=(format!("{base}?image={}", gallery.prev)) aria-label="Previous Image" { "‹" }
                        a class="gallery-nav next" href=(format!("{base}?image={}", gallery.next)) aria-label="Next Image" { "›" }
                        div class="thumbs" {
                            @for (idx, src) in property.images.iter().enumerate() {
                                a href=(format!("{base}?image={idx}"))
                                    class=[(idx == gallery.current).then_some("current")]
                                    aria-label=(format!("View image {}", idx + 1))
                                {
                                    img src=(src) alt=(format!("Thumbnail {}", idx + 1));
                                }
                            }
                        }
                    }
                }

                div class="detail-layout" {
                    div class="detail-main" {
                        header class="panel" {
                            div class="property-head" {
                                h1 { (property.title) }
                                span class="price big" { (property.price_label()) }
                            }
                            p class="location" { "📍 " (property.location) }
                            div class="info-cards" {
                                (info_card("Bedrooms", property.bedrooms))
                                (info_card("Bathrooms", property.bathrooms))
                                (info_card("Square Feet", group_thousands(property.sqft.into())))
                                (info_card("Garage", property.garage))
                            }
                        }

                        section class="panel" {
                            h2 { "Description" }
                            p { (property.description) }
                        }

                        section class="panel" {
                            h2 { "Property Details" }
                            div class="two-col" {
                                (details_table("Property Information", &[
                                    ("Type", property.property_type.as_str().to_string()),
                                    ("Year Built", property.year_built.to_string()),
                                    ("Lot Size", property.lot_size.clone()),
                                    ("Status", property.status.as_str().to_string()),
                                ]))
                                (details_table("Interior Features", &[
                                    ("Bedrooms", property.bedrooms.to_string()),
                                    ("Bathrooms", property.bathrooms.to_string()),
                                    ("Square Feet", group_thousands(property.sqft.into())),
                                    ("Garage Spaces", property.garage.to_string()),
                                ]))
                            }
                        }

                        section class="panel" {
                            h2 { "Amenities" }
                            ul class="chips" {
                                @for amenity in &property.amenities {
                                    li { (amenity) }
                                }
                            }
                        }
                    }

                    aside class="panel agent" {
                        h3 { "Contact Agent" }
                        div class="agent-head" {
                            div class="avatar" { (property.agent.initials()) }
                            div {
                                p class="agent-name" { (property.agent.name) }
                                p class="muted" { "Real Estate Agent" }
                            }
                        }
                        a href=(format!("tel:{}", property.agent.phone)) class="contact-link" { "📞 " (property.agent.phone) }
                        a href=(format!("mailto:{}", property.agent.email)) class="contact-link" { "✉️ " (property.agent.email) }

                        details class="request-info" {
                            summary class="btn primary block" { "Request Information" }
                            (enquiry_form(&InquiryForm::default(), &[], Some(property)))
                        }
                        a href=(format!("/enquire?property={}", property.id)) class="btn outline block" { "Schedule Tour" }
                        a href=(share_mailto(property, share_url)) class="btn outline block" { "🔗 Share" }
                    }
                }
            }
        },
    )
}

/// Shown for an id that is not in the catalog.
pub fn property_not_found_page() -> Markup {
    desktop_layout(
        "Property Not Found",
        "/properties",
        html! {
            main class="container narrow center" {
                h2 { "Property Not Found" }
                a href="/properties" class="btn primary" { "Back to Properties" }
            }
        },
    )
}

/// `mailto:` link with the listing title as subject and its URL as body.
fn share_mailto(property: &Property, share_url: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        mailto_encode(&property.title),
        mailto_encode(share_url)
    )
}

// `+` is literal inside mailto URIs; spaces must be %20.
fn mailto_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn info_card(title: &str, value: impl Render) -> Markup {
    html! {
        div class="info-card" {
            span class="value" { (value) }
            span class="label" { (title) }
        }
    }
}

fn details_table(title: &str, rows: &[(&str, String)]) -> Markup {
    html! {
        div {
            h3 { (title) }
            dl {
                @for (name, value) in rows {
                    div class="row" {
                        dt { (name) ":" }
                        dd { (value) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn share_link_encodes_title_and_url() {
        let catalog = Catalog::sample().unwrap();
        let villa = catalog.find_by_id(1).unwrap();
        assert_eq!(
            share_mailto(villa, "http://example.com/property/1"),
            "mailto:?subject=Luxury%20Modern%20Villa&body=http%3A%2F%2Fexample.com%2Fproperty%2F1"
        );
    }
}
