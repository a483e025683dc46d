use url::Url;

/// Where the password form sends the user after a successful reset:
/// two segments above the current route.
pub const PARENT_ROUTE: &str = "../../";

// Only the path survives; the host is a placeholder for `Url::join`.
const RESOLVE_BASE: &str = "http://origin.invalid/";

/// Router seam for the password form.
pub trait Navigator {
    /// Path of the route currently displayed, e.g. `/initialization/password/`.
    fn current_path(&self) -> String;

    fn push(&self, path: &str);
}

/// Resolve `relative` against `current_path` the way a browser resolves a
/// relative link, returning the resulting path and query.
///
/// Leading `..` segments never climb above `/`.
pub fn resolve_relative(current_path: &str, relative: &str) -> String {
    let resolved = Url::parse(RESOLVE_BASE)
        .and_then(|base| base.join(current_path))
        .and_then(|current| current.join(relative));

    match resolved {
        Ok(url) => match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        },
        Err(_) => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parent_of_password_page_is_root() {
        assert_eq!(resolve_relative("/initialization/password/", PARENT_ROUTE), "/");
    }

    #[test]
    fn parent_keeps_mount_prefix() {
        assert_eq!(
            resolve_relative("/view/origin/initialization/password/", PARENT_ROUTE),
            "/view/origin/"
        );
    }

    #[test]
    fn missing_trailing_slash_drops_last_segment_first() {
        // Same semantics as a browser: the last segment is a "file".
        assert_eq!(
            resolve_relative("/view/origin/initialization/password", PARENT_ROUTE),
            "/view/"
        );
    }

    #[test]
    fn never_climbs_above_root() {
        assert_eq!(resolve_relative("/password/", PARENT_ROUTE), "/");
        assert_eq!(resolve_relative("/", PARENT_ROUTE), "/");
    }

    #[test]
    fn relative_path_without_leading_slash() {
        assert_eq!(resolve_relative("a/b/c/", PARENT_ROUTE), "/a/");
    }

    #[test]
    fn query_is_preserved_on_target() {
        assert_eq!(resolve_relative("/a/b/c/", "../?done=1"), "/a/b/?done=1");
    }
}
