// templates/pages/status.rs

use crate::templates::{
    components::{card, feed_url_box},
    desktop_layout,
};
use maud::{html, Markup, PreEscaped};

const FEED_URL_ELEMENT: &str = "feedUrl";
const COMMERCE_MANAGER_URL: &str = "https://business.facebook.com/commerce/";

/// What the status page shows about the last run.
pub struct StatusVm {
    pub dealer_name: String,
    pub site_url: String,
    pub feed_file: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub updated_at: String,
    pub total_vehicles: usize,
    pub listed: usize,
    pub skipped: usize,
}

pub fn status_page(vm: &StatusVm) -> Markup {
    // The page is served next to the feed, so the absolute feed URL is only
    // known in the browser.
    let script = format!(
        "const feedUrl = window.location.origin + window.location.pathname + '{}';\n\
         document.getElementById('{}').textContent = feedUrl;",
        vm.feed_file, FEED_URL_ELEMENT
    );

    desktop_layout(
        &format!("{} Facebook Feed", vm.dealer_name),
        &format!("🚗 {} Facebook Dynamic Ads Feed", vm.dealer_name),
        html! {
            (card("Feed URL", feed_url_box(FEED_URL_ELEMENT)))

            (card("Status", html! {
                p { "✅ Feed is active and updating automatically every hour" }
                p { "Last updated: " strong { (vm.updated_at) } }
                p { "Total vehicles: " strong { (vm.total_vehicles) } }
                p { "Listings in feed: " strong { (vm.listed) } }
                @if vm.skipped > 0 {
                    p { "Skipped (missing or unreadable data): " strong { (vm.skipped) } }
                }
            }))

            (card("Quick Links", html! {
                ul {
                    li { a href=(vm.feed_file) { "View XML Feed" } }
                    li { a href=(COMMERCE_MANAGER_URL) target="_blank" { "Facebook Commerce Manager" } }
                    li { a href=(vm.site_url) target="_blank" { (vm.dealer_name) " Website" } }
                }
            }))

            script { (PreEscaped(script)) }
        },
    )
}
