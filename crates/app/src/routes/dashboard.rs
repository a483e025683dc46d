use dioxus::prelude::*;
use shared_ui::FormCard;

use crate::routes::Route;

/// Landing page of the origin web UI; the password form returns here.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page.css") }

        div { class: "page",
            FormCard {
                heading: "Origin",
                subheading: "Pelican origin web interface",
                Link { to: Route::SetPassword {}, class: "page-link", "Set root metrics password" }
            }
        }
    }
}
