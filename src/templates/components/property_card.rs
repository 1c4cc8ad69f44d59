use crate::domain::property::{group_thousands, Property};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLayout {
    #[default]
    Grid,
    List,
}

impl CardLayout {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("list") => CardLayout::List,
            _ => CardLayout::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardLayout::Grid => "grid",
            CardLayout::List => "list",
        }
    }
}

pub fn property_card(property: &Property, layout: CardLayout) -> Markup {
    let class = match layout {
        CardLayout::Grid => "property-card",
        CardLayout::List => "property-card list",
    };

    html! {
        article class=(class) {
            div class="property-media" {
                img src=(property.cover_image()) alt=(property.title) loading="lazy";
                span class="badge" { (property.status.as_str()) }
            }
            div class="property-body" {
                div class="property-head" {
                    h3 { (property.title) }
                    span class="price" { (property.price_label()) }
                }
                p class="location" { "📍 " (property.location) }
                @if layout == CardLayout::List {
                    p class="description" { (property.description) }
                }
                ul class="facts" {
                    li { (property.bedrooms) " bed" }
                    li { (property.bathrooms) " bath" }
                    li { (group_thousands(property.sqft.into())) " sqft" }
                }
                a href=(format!("/property/{}", property.id)) class="btn primary block" {
                    "View Details →"
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
    fn card_links_to_detail_and_shows_rent() {
        let catalog = Catalog::sample().unwrap();
        let loft = catalog.find_by_id(6).unwrap();
        let html = property_card(loft, CardLayout::Grid).into_string();

        assert!(html.contains(r#"href="/property/6""#));
        assert!(html.contains("$3,200/mo"));
        assert!(html.contains("For Rent"));
        assert!(!html.contains("exposed brick"));
    }

    #[test]
    fn list_layout_includes_description() {
        let catalog = Catalog::sample().unwrap();
        let loft = catalog.find_by_id(6).unwrap();
        let html = property_card(loft, CardLayout::List).into_string();
        assert!(html.contains("exposed brick"));
    }

    #[test]
    fn layout_parse_defaults_to_grid() {
        assert_eq!(CardLayout::parse(None), CardLayout::Grid);
        assert_eq!(CardLayout::parse(Some("LIST")), CardLayout::List);
        assert_eq!(CardLayout::parse(Some("table")), CardLayout::Grid);
    }
}
