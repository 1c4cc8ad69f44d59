use crate::domain::inquiry::{FieldError, InquiryForm};
use crate::domain::Property;
use crate::templates::components::enquiry_form;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct EnquireVm<'a> {
    pub form: &'a InquiryForm,
    pub errors: &'a [FieldError],
    pub property: Option<&'a Property>,
    pub submitted: Option<Markup>,
}

pub fn enquire_page(vm: &EnquireVm) -> Markup {
    let heading = match vm.property {
        Some(_) => "Enquire About This Property",
        None => "Send Us an Enquiry",
    };

    desktop_layout(
        "Enquire",
        "/enquire",
        html! {
            section class="enquire" {
                div class="glass-card" {
                    h2 { (heading) }
                    @match &vm.submitted {
                        Some(ack) => { (ack) }
                        None => { (enquiry_form(vm.form, vm.errors, vm.property)) }
                    }
                }
            }
        },
    )
}
