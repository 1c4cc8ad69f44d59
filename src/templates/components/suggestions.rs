use maud::{html, Markup};

/// Autocomplete dropdown swapped in under the search inputs.
pub fn suggestion_list(suggestions: &[&str]) -> Markup {
    html! {
        @if !suggestions.is_empty() {
            ul class="suggestions" role="listbox" {
                @for s in suggestions {
                    li role="option" {
                        a href=(format!("/properties?q={}", encode(s))) { (s) }
                    }
                }
            }
        }
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
