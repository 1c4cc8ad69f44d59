// templates/pages/home.rs

use crate::content::{STATS, WHY_US};
use crate::domain::{Mode, Property, PropertyType, SearchState};
use crate::templates::components::{blurb_panel, cta_band, property_card, section_heading, CardLayout};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub query: String,
    pub mode: Option<Mode>,
    pub property_type: Option<PropertyType>,
    pub featured: Vec<&'a Property>,
    pub search: SearchState<'a>,
}

// The hero search offers the common residential types only.
const HERO_TYPES: [PropertyType; 3] = [
    PropertyType::House,
    PropertyType::Condo,
    PropertyType::Apartment,
];

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        "/",
        html! {
            section class="hero home-hero" {
                div class="hero-inner" {
                    h1 { "Find Your" span class="accent" { "Dream Home" } }
                    p class="lead" { "Discover the perfect property with our expert guidance and personalized service" }
                    (search_bar(vm))
                }
            }

            section class="stats" {
                div class="container stats-grid" {
                    @for stat in STATS {
                        div class="stat" {
                            h3 { (stat.value) }
                            p { (stat.label) }
                        }
                    }
                }
            }

            section class="container" id="listings" {
                @match vm.search.results() {
                    None => {
                        (section_heading(
                            "Featured Properties",
                            "Discover our handpicked selection of premium properties that offer exceptional value and luxury",
                        ))
                        (grid(&vm.featured))
                    }
                    Some(found) => {
                        (section_heading(
                            "Search Results",
                            &format!("{} matching {}", found.len(), if found.len() == 1 { "property" } else { "properties" }),
                        ))
                        @if found.is_empty() {
                            (no_results())
                        } @else {
                            (grid(found))
                        }
                    }
                }
                div class="center" {
                    a href="/properties" class="btn dark" { "View All Properties →" }
                }
            }

            section class="why-us" {
                div class="container" {
                    (section_heading(
                        "Why Choose EliteHomes",
                        "We provide exceptional service and expertise to help you find the perfect property",
                    ))
                    div class="three-col" {
                        @for item in WHY_US {
                            (blurb_panel(item, false))
                        }
                    }
                }
            }

            (cta_band(
                "Ready to Find Your Dream Home?",
                "Let our expert team help you navigate the real estate market and find the perfect property for your needs.",
                &[("/properties", "Browse Properties"), ("/contact", "Contact Us Today")],
            ))
        },
    )
}

fn search_bar(vm: &HomeVm) -> Markup {
    html! {
        form class="search-bar" method="get" action="/" {
            div class="search-input" {
                input
                    type="text"
                    name="q"
                    value=(vm.query)
                    placeholder="Enter location, property type, or keywords..."
                    autocomplete="off"
                    hx-get="/suggest"
                    hx-trigger="keyup changed delay:200ms"
                    hx-target="#hero-suggestions"
                    hx-swap="innerHTML";
                div id="hero-suggestions" {}
            }
            select name="mode" {
                @for mode in [Mode::Buy, Mode::Rent] {
                    option value=(mode.as_str()) selected[vm.mode == Some(mode)] { (mode.as_str()) }
                }
            }
            select name="type" {
                option value="All" { "All Types" }
                @for t in HERO_TYPES {
                    option value=(t.as_str()) selected[vm.property_type == Some(t)] { (t.as_str()) }
                }
            }
            button type="submit" class="btn primary" { "Search" }
        }
    }
}

fn grid(properties: &[&Property]) -> Markup {
    html! {
        div class="property-grid" {
            @for p in properties {
                (property_card(p, CardLayout::Grid))
            }
        }
    }
}

pub fn no_results() -> Markup {
    html! {
        div class="empty-state" {
            h3 { "No Properties Found" }
            p { "Try adjusting your search criteria to find more properties." }
        }
    }
}
