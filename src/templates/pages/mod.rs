pub mod about;
pub mod contact;
pub mod enquire;
pub mod home;
pub mod properties;
pub mod property_detail;
pub mod services;

pub use about::about_page;
pub use contact::{contact_page, ContactVm};
pub use enquire::{enquire_page, EnquireVm};
pub use home::{home_page, HomeVm};
pub use properties::{properties_page, PropertiesVm};
pub use property_detail::{property_detail_page, property_not_found_page};
pub use services::services_page;
