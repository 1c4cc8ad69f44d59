use crate::content::{BENEFITS, PROCESS, SERVICES, SPECIALIZED};
use crate::templates::components::{blurb_panel, cta_band, hero, section_heading, service_panel};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn services_page() -> Markup {
    desktop_layout(
        "Services",
        "/services",
        html! {
            (hero(
                "Our Services",
                "Comprehensive real estate solutions tailored to your unique needs and goals",
                "https://images.pexels.com/photos/1571457/pexels-photo-1571457.jpeg?auto=compress&cs=tinysrgb&w=1920",
            ))

            section class="container" {
                (section_heading(
                    "What We Offer",
                    "From buying and selling to property management and investment consulting, we provide comprehensive real estate services",
                ))
                div class="three-col" {
                    @for service in SERVICES {
                        (service_panel(service))
                    }
                }
            }

            section class="container" {
                (section_heading(
                    "Our Process",
                    "A proven, step-by-step approach that ensures successful outcomes for every client",
                ))
                ol class="timeline" {
                    @for step in PROCESS {
                        li {
                            span class="step-number" { (step.number) }
                            div {
                                h3 { (step.title) }
                                p { (step.description) }
                            }
                        }
                    }
                }
            }

            section class="container two-col" {
                div {
                    h2 { "Why Choose EliteHomes" }
                    p {
                        "With over 15 years of experience and a track record of successful transactions, \
                         we bring unmatched expertise and dedication to every client relationship."
                    }
                    ul class="checklist" {
                        @for benefit in BENEFITS {
                            li { (benefit) }
                        }
                    }
                }
                img src="https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg?auto=compress&cs=tinysrgb&w=800"
                    alt="Real estate consultation" class="rounded";
            }

            section class="container" {
                (section_heading(
                    "Specialized Services",
                    "Additional services tailored to specific client needs and market segments",
                ))
                div class="three-col" {
                    @for item in SPECIALIZED {
                        (blurb_panel(item, true))
                    }
                }
            }

            (cta_band(
                "Ready to Get Started?",
                "Contact us today to discuss your real estate needs and learn how we can help you achieve your goals.",
                &[("/contact", "Schedule Consultation"), ("tel:+1234567890", "Call Now")],
            ))
        },
    )
}
