use crate::content::{BRAND, OFFICE_ADDRESS};
use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/properties", "Properties"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/contact", "Contact"),
];

/// Full page shell. `current` is the request path, used to highlight the
/// active nav entry.
pub fn desktop_layout(title: &str, current: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (BRAND) }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="28"
                          height="28"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#2563eb"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { (BRAND) }
                  }
                  nav {
                      ul {
                          @for (href, label) in NAV {
                              li {
                                  a href=(href) class=[is_active(href, current).then_some("active")] { (label) }
                              }
                          }
                      }
                  }
                  a href="/enquire" class="btn primary" { "Enquire" }
              }
                (content)
              footer class="site-footer" {
                  div class="container footer-grid" {
                      div {
                          h4 { (BRAND) }
                          p { "Your trusted partner in finding the perfect home." }
                      }
                      div {
                          h4 { "Visit us" }
                          @for line in OFFICE_ADDRESS {
                              p { (line) }
                          }
                      }
                  }
                  p class="copyright" { "© " (Utc::now().year()) " " (BRAND) ". All rights reserved." }
              }
            }
        }
    }
}

fn is_active(href: &str, current: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current.starts_with(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_highlights_section() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
        assert!(is_active("/properties", "/properties"));
        assert!(!is_active("/properties", "/property/3"));
    }

    #[test]
    fn layout_wraps_content() {
        let page = desktop_layout("About", "/about", html! { p { "hello" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>About | EliteHomes</title>"));
        assert!(page.contains("<p>hello</p>"));
        assert!(page.contains(r#"<a href="/about" class="active">About</a>"#));
    }
}
