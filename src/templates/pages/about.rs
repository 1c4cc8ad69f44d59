use crate::content::{LEADERSHIP, OFFICE_ADDRESS, STATS, STORY, VALUES};
use crate::templates::components::{blurb_panel, cta_band, hero, section_heading};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn about_page() -> Markup {
    desktop_layout(
        "About",
        "/about",
        html! {
            (hero(
                "About EliteHomes",
                "Your trusted partner in real estate for over 15 years, helping thousands of families find their perfect home",
                "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=1920",
            ))

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

            section class="container two-col story" {
                div {
                    h2 { "Our Story" }
                    @for para in STORY {
                        p { (para) }
                    }
                }
                div class="story-image" {
                    img src="https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800" alt="Our office";
                    div class="badge-box" {
                        h3 { "15+" }
                        p { "Years of Excellence" }
                    }
                }
            }

            section class="container" {
                (section_heading(
                    "Our Values",
                    "The principles that guide everything we do and shape every interaction with our clients",
                ))
                div class="four-col" {
                    @for value in VALUES {
                        (blurb_panel(value, true))
                    }
                }
            }

            section class="container" {
                (section_heading(
                    "Meet Our Team",
                    "Our experienced professionals are dedicated to providing you with exceptional service and expertise",
                ))
                div class="four-col" {
                    @for member in LEADERSHIP {
                        div class="team-card" {
                            img src=(member.image) alt=(member.name) loading="lazy";
                            div class="team-body" {
                                h3 { (member.name) }
                                p class="role" { (member.role) }
                                p class="muted" { (member.bio) }
                            }
                        }
                    }
                }
            }

            section class="container two-col" {
                div {
                    h2 { "Visit Our Office" }
                    h3 { "Address" }
                    p {
                        @for (i, line) in OFFICE_ADDRESS.iter().enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                    p {
                        "Our modern office is conveniently located in the heart of the business district, \
                         easily accessible by public transportation and with ample parking available."
                    }
                }
                div class="map-placeholder" { p { "Interactive Map Would Go Here" } }
            }

            (cta_band(
                "Ready to Get Started?",
                "Whether you're buying, selling, or just exploring your options, we're here to help you every step of the way.",
                &[("/properties", "Browse Properties"), ("/contact", "Contact Us")],
            ))
        },
    )
}
