use client::Navigator;
use dioxus::prelude::*;

use crate::routes::Route;

/// Bridges the password form to the Dioxus router.
#[derive(Clone, Debug, PartialEq)]
pub struct RouterNavigator {
    current: String,
}

impl RouterNavigator {
    pub fn new(current: &Route) -> Self {
        Self {
            current: current.to_string(),
        }
    }
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.current.clone()
    }

    fn push(&self, path: &str) {
        tracing::info!(from = %self.current, to = path, "Navigating");
        match path.parse::<Route>() {
            Ok(route) => {
                navigator().push(route);
            }
            Err(_) => {
                navigator().push(NavigationTarget::<Route>::External(path.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn current_path_is_the_route_path() {
        let nav = RouterNavigator::new(&Route::SetPassword {});
        assert_eq!(nav.current_path(), "/initialization/password/");
    }

    #[test]
    fn dashboard_path_is_root() {
        assert_eq!(RouterNavigator::new(&Route::Dashboard {}).current_path(), "/");
    }

    #[test]
    fn parent_of_set_password_is_dashboard() {
        let nav = RouterNavigator::new(&Route::SetPassword {});
        let target = client::resolve_relative(&nav.current_path(), client::PARENT_ROUTE);
        assert_eq!(target.parse::<Route>().ok(), Some(Route::Dashboard {}));
    }
}
