use crate::content::{CONTACT_CHANNELS, OFFICE_ADDRESS, SPECIALISTS};
use crate::domain::inquiry::{FieldError, InquiryForm};
use crate::domain::property::initials;
use crate::templates::components::{contact_form, hero, section_heading};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ContactVm<'a> {
    pub form: &'a InquiryForm,
    pub errors: &'a [FieldError],
    /// Replaces the form when a submission was accepted.
    pub submitted: Option<Markup>,
}

pub fn contact_page(vm: &ContactVm) -> Markup {
    desktop_layout(
        "Contact",
        "/contact",
        html! {
            (hero(
                "Contact Us",
                "Ready to start your real estate journey? We're here to help every step of the way",
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg?auto=compress&cs=tinysrgb&w=1920",
            ))

            section class="container" {
                (section_heading(
                    "Get In Touch",
                    "Multiple ways to reach our team of real estate experts",
                ))
                div class="four-col" {
                    @for channel in CONTACT_CHANNELS {
                        div class="panel center" {
                            h3 { (channel.title) }
                            @for line in channel.details {
                                p { (line) }
                            }
                            span class="link" { (channel.action) }
                        }
                    }
                }
            }

            section class="container narrow" id="send-message" {
                (section_heading(
                    "Send Us a Message",
                    "Fill out the form below and we'll get back to you within 24 hours",
                ))
                div class="panel" {
                    @match &vm.submitted {
                        Some(ack) => { (ack) }
                        None => { (contact_form(vm.form, vm.errors)) }
                    }
                }
            }

            section class="container" {
                (section_heading(
                    "Contact Our Team",
                    "Speak directly with one of our specialists who can provide expert guidance for your specific needs",
                ))
                div class="three-col" {
                    @for member in SPECIALISTS {
                        div class="panel center" {
                            div class="avatar" { (initials(member.name)) }
                            h3 { (member.name) }
                            p class="role" { (member.role) }
                            a href=(format!("tel:{}", member.phone)) class="contact-link" { (member.phone) }
                            a href=(format!("mailto:{}", member.email)) class="contact-link" { (member.email) }
                            ul class="chips" {
                                @for s in member.specialties {
                                    li { (s) }
                                }
                            }
                        }
                    }
                }
            }

            section class="container two-col" {
                div class="map-placeholder" { p { "Interactive Map Would Go Here" } }
                div {
                    h3 { "Visit Us Today" }
                    @for line in OFFICE_ADDRESS {
                        p { (line) }
                    }
                    p {
                        "Our modern office space is designed to provide a comfortable environment for \
                         consultations and meetings."
                    }
                }
            }
        },
    )
}
