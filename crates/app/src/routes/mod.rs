pub mod dashboard;
pub mod not_found;
pub mod set_password;

use dioxus::prelude::*;

use dashboard::Dashboard;
use not_found::NotFound;
use set_password::SetPassword;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/initialization/password/")]
    SetPassword {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
