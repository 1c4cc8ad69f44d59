use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Error page body, wrapped in the site layout.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        "",
        html! {
            main class="container narrow error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
