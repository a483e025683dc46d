use dioxus::prelude::*;
use shared_ui::FormCard;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page.css") }

        div { class: "page",
            FormCard {
                heading: "Page Not Found",
                subheading: "Nothing is served at this address.",
                p { class: "not-found-path", "{path}" }
                Link { to: Route::Dashboard {}, class: "page-link", "Back to origin" }
            }
        }
    }
}
