use crate::domain::viewport::VIEWPORT_HINT;
use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta http-equiv="Accept-CH" content=(VIEWPORT_HINT);
                title { (title) }
                link rel="icon" type="image/svg+xml" href="/static/logo.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@2.0.4" defer {}
            }
            body {
                (content)
            }
        }
    }
}
