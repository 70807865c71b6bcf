use crate::error::{Result, TodoError};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::{fmt, str::FromStr};

/// Characters escaped when a list title becomes a path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client-side location: the overview, or one list keyed by its title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Overview,
    List(String),
}

impl Route {
    /// Parses a request path.
    ///
    /// `/` (or an empty path) is the overview; a single segment selects the
    /// list with that (percent-decoded) title.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::Overview);
        }
        if trimmed.contains('/') {
            return Err(TodoError::InvalidRoute(path.to_string()));
        }

        let title = percent_decode_str(trimmed)
            .decode_utf8()
            .map_err(|_| TodoError::InvalidRoute(path.to_string()))?;
        Ok(Self::List(title.into_owned()))
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Overview => "/".to_string(),
            Self::List(title) => {
                format!("/{}", utf8_percent_encode(title, SEGMENT_ENCODE_SET))
            }
        }
    }
}

impl FromStr for Route {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_overview() {
        assert_eq!(Route::parse("/").unwrap(), Route::Overview);
        assert_eq!(Route::parse("").unwrap(), Route::Overview);
    }

    #[test]
    fn test_single_segment_selects_list() {
        assert_eq!(
            Route::parse("/Shopping%20List").unwrap(),
            Route::List("Shopping List".to_string())
        );
        assert_eq!(
            Route::parse("/Chores/").unwrap(),
            Route::List("Chores".to_string())
        );
    }

    #[test]
    fn test_nested_path_is_invalid() {
        assert!(matches!(
            Route::parse("/a/b"),
            Err(TodoError::InvalidRoute(p)) if p == "/a/b"
        ));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(Route::parse("/%FF%FE").is_err());
    }

    #[test]
    fn test_to_path_escapes_title() {
        let route = Route::List("React 101 / Lesson?".to_string());
        assert_eq!(route.to_path(), "/React%20101%20%2F%20Lesson%3F");
        assert_eq!(Route::parse(&route.to_path()).unwrap(), route);
        assert_eq!(Route::Overview.to_string(), "/");
    }
}
