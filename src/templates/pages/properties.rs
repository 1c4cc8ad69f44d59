use crate::domain::{Criteria, PriceRange, Property, PropertyStatus, PropertyType};
use crate::templates::components::{property_card, CardLayout};
use crate::templates::desktop_layout;
use crate::templates::pages::home::no_results;
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    pub criteria: Criteria,
    pub layout: CardLayout,
    pub results: Vec<&'a Property>,
    pub total: usize,
}

impl PropertiesVm<'_> {
    /// Current filters as a query string, with the view mode swapped.
    fn query_with_view(&self, layout: CardLayout) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if let Some(q) = &self.criteria.search_term {
            ser.append_pair("q", q);
        }
        if let Some(s) = self.criteria.status {
            ser.append_pair("status", s.as_str());
        }
        if let Some(t) = self.criteria.property_type {
            ser.append_pair("type", t.as_str());
        }
        if let Some(r) = self.criteria.price_range {
            ser.append_pair("price", r.as_str());
        }
        if let Some(m) = self.criteria.mode {
            ser.append_pair("mode", m.as_str());
        }
        ser.append_pair("view", layout.as_str());
        format!("/properties?{}", ser.finish())
    }
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    let c = &vm.criteria;

    desktop_layout(
        "Properties",
        "/properties",
        html! {
            main class="container" {
                div class="page-head" {
                    h1 { "Properties" }
                    p class="lead" { "Discover your perfect home from our extensive collection" }
                }

                form class="filters" method="get" action="/properties" {
                    input type="hidden" name="view" value=(vm.layout.as_str());
                    @if let Some(mode) = c.mode {
                        input type="hidden" name="mode" value=(mode.as_str());
                    }
                    div class="search-input wide" {
                        input
                            type="text"
                            name="q"
                            value=(c.search_term.as_deref().unwrap_or(""))
                            placeholder="Search properties..."
                            autocomplete="off"
                            hx-get="/suggest"
                            hx-trigger="keyup changed delay:200ms"
                            hx-target="#filter-suggestions"
                            hx-swap="innerHTML";
                        div id="filter-suggestions" {}
                    }
                    select name="status" {
                        option value="All" { "All Status" }
                        @for s in PropertyStatus::ALL {
                            option value=(s.as_str()) selected[c.status == Some(s)] { (s.as_str()) }
                        }
                    }
                    select name="type" {
                        option value="All" { "All Types" }
                        @for t in PropertyType::ALL {
                            option value=(t.as_str()) selected[c.property_type == Some(t)] { (t.as_str()) }
                        }
                    }
                    select name="price" {
                        option value="All" { "All Prices" }
                        @for r in PriceRange::ALL {
                            option value=(r.as_str()) selected[c.price_range == Some(r)] { (r.display()) }
                        }
                    }
                    button type="submit" class="btn primary" { "Filter" }
                    @if !c.is_empty() {
                        a href=(format!("/properties?view={}", vm.layout.as_str())) class="btn outline" { "Clear" }
                    }
                    div class="view-toggle" {
                        a href=(vm.query_with_view(CardLayout::Grid))
                            class=[(vm.layout == CardLayout::Grid).then_some("active")]
                            aria-label="Grid View" { "▦" }
                        a href=(vm.query_with_view(CardLayout::List))
                            class=[(vm.layout == CardLayout::List).then_some("active")]
                            aria-label="List View" { "☰" }
                    }
                }

                p class="result-count" {
                    "Showing " (vm.results.len()) " of " (vm.total) " properties"
                }

                @if vm.results.is_empty() {
                    (no_results())
                } @else {
                    div class=(match vm.layout { CardLayout::Grid => "property-grid", CardLayout::List => "property-list" }) {
                        @for p in &vm.results {
                            (property_card(p, vm.layout))
                        }
                    }
                }
            }
        },
    )
}
