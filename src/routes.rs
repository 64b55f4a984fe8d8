use std::fmt;

use crate::domain::contact::ContactId;

/// The three navigable destinations of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Create,
    Edit(ContactId),
}

impl Route {
    /// Resolves a path. Anything unrecognised falls back to [`Route::List`].
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::List,
            ["add"] => Route::Create,
            ["edit", id] => id.parse().map(Route::Edit).unwrap_or_default(),
            _ => Route::List,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::Create => write!(f, "/add"),
            Route::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse("/add"), Route::Create);
        assert_eq!(Route::parse("add/"), Route::Create);
        assert_eq!(Route::parse("/edit/3"), Route::Edit(3));
    }

    #[test]
    fn unknown_paths_redirect_to_list() {
        assert_eq!(Route::parse("/contacts"), Route::List);
        assert_eq!(Route::parse("/edit"), Route::List);
        assert_eq!(Route::parse("/edit/abc"), Route::List);
        assert_eq!(Route::parse("/edit/3/extra"), Route::List);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for route in [Route::List, Route::Create, Route::Edit(12)] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }
}
