use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = "
    body { font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; }
    h1 { color: #333; }
    .info { background: #f0f0f0; padding: 20px; border-radius: 5px; }
    .feed-url { background: #e8f5e9; padding: 15px; border-radius: 5px; margin: 20px 0; word-break: break-all; }
    code { background: #f5f5f5; padding: 2px 6px; border-radius: 3px; }
";

pub fn desktop_layout(title: &str, heading: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (title) }
                meta charset="utf-8";
                style { (PreEscaped(STYLES)) }
            }
            body {
                h1 { (heading) }
                div class="info" {
                    (content)
                }
            }
        }
    }
}
