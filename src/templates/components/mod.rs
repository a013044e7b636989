use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        h2 { (title) }
        (body)
    }
}

/// Box the browser fills in with the absolute feed URL once the page loads.
pub fn feed_url_box(element_id: &str) -> Markup {
    html! {
        div class="feed-url" {
            strong { "Use this URL in Facebook Commerce Manager:" }
            br; br;
            code id=(element_id) { "Loading..." }
        }
    }
}
