use crate::content::{Blurb, Service};
use maud::{html, Markup};

/// White bordered box holding one titled blurb.
pub fn blurb_panel(blurb: &Blurb, centered: bool) -> Markup {
    html! {
        div class=(if centered { "panel center" } else { "panel" }) {
            h3 { (blurb.title) }
            p { (blurb.body) }
        }
    }
}

pub fn service_panel(service: &Service) -> Markup {
    html! {
        div class="panel service" {
            h3 { (service.title) }
            p { (service.description) }
            ul class="checklist" {
                @for feature in service.features {
                    li { (feature) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SERVICES, VALUES};

    #[test]
    fn blurb_panel_centering() {
        let centered = blurb_panel(&VALUES[0], true).into_string();
        assert!(centered.starts_with(r#"<div class="panel center">"#));
        assert!(centered.contains(VALUES[0].title));

        let plain = blurb_panel(&VALUES[0], false).into_string();
        assert!(plain.starts_with(r#"<div class="panel">"#));
    }

    #[test]
    fn service_panel_lists_every_feature() {
        let service = &SERVICES[0];
        let html = service_panel(service).into_string();
        assert!(html.contains(r#"class="panel service""#));
        assert_eq!(html.matches("<li>").count(), service.features.len());
    }
}
