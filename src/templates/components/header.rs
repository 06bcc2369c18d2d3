use maud::{html, Markup};

pub const SITE_TITLE: &str = "Discovery Dino";
pub const TAGLINE: &str = "Always Stay Ahead!";
const PARTNER_LINK: (&str, &str) = ("Visit G2", "https://www.g2.com/");

/// Branded banner. Takes no input and holds no state.
pub fn site_header() -> Markup {
    let (label, href) = PARTNER_LINK;
    html! {
        header class="site-header" {
            div class="site-header-inner" {
                div class="brand" {
                    div class="brand-logo" {
                        img src="/static/logo.svg" alt="Logo" width="60" height="60";
                    }
                    div class="brand-text" {
                        h1 { (SITE_TITLE) }
                        p { (TAGLINE) }
                    }
                }
                nav {
                    ul {
                        li { a href=(href) { (label) } }
                    }
                }
            }
        }
    }
}
