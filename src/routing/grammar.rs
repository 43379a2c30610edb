//! URL grammars recognised by the resolver.
//!
//! Two grammars, tried in a fixed order:
//!
//! ```text
//! 1. <prefix>/(app_i|app_direct_i)/<app>/<instance><sub_path>
//! 2. <prefix>/(app|app_direct)/<app><sub_path>
//! ```
//!
//! The prefix is matched lazily, so the left-most selector segment wins.
//! A structural match of grammar 1 ends the search even when its captures
//! are later rejected by validation.

use regex::Regex;
use std::sync::LazyLock;

static INSTANCE_QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*?/(app_i|app_direct_i)/([^/]*)/([^/]*)(/?.*)$").unwrap()
});

static UNQUALIFIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*?/(app|app_direct)/([^/]*)(/?.*)$").unwrap());

/// Which grammar a path matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `app_i` / `app_direct_i`: carries an explicit instance segment.
    InstanceQualified,
    /// `app` / `app_direct`: no instance segment.
    Unqualified,
}

impl Grammar {
    /// Priority order in which grammars are tried.
    pub const ORDERED: [Grammar; 2] = [Grammar::InstanceQualified, Grammar::Unqualified];

    fn pattern(self) -> &'static Regex {
        match self {
            Grammar::InstanceQualified => &INSTANCE_QUALIFIED,
            Grammar::Unqualified => &UNQUALIFIED,
        }
    }

    fn capture<'a>(self, path: &'a str) -> Option<Captures<'a>> {
        let caps = self.pattern().captures(path)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        Some(match self {
            Grammar::InstanceQualified => Captures {
                selector: group(1).unwrap_or_default(),
                app_name: group(2),
                app_instance: group(3),
                sub_path: group(4),
            },
            Grammar::Unqualified => Captures {
                selector: group(1).unwrap_or_default(),
                app_name: group(2),
                app_instance: None,
                sub_path: group(3),
            },
        })
    }
}

/// Raw, unvalidated segments captured from a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captures<'a> {
    /// The selector literal, e.g. `app_direct_i`.
    pub selector: &'a str,
    pub app_name: Option<&'a str>,
    /// Always `None` for [`Grammar::Unqualified`].
    pub app_instance: Option<&'a str>,
    pub sub_path: Option<&'a str>,
}

/// Outcome of matching a path against the grammar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch<'a> {
    Matched {
        grammar: Grammar,
        captures: Captures<'a>,
    },
    NoMatch,
}

/// Match `path` against each grammar in priority order; first structural match wins.
pub fn match_path(path: &str) -> PathMatch<'_> {
    Grammar::ORDERED
        .into_iter()
        .find_map(|grammar| {
            grammar
                .capture(path)
                .map(|captures| PathMatch::Matched { grammar, captures })
        })
        .unwrap_or(PathMatch::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(path: &str) -> (Grammar, Captures<'_>) {
        match match_path(path) {
            PathMatch::Matched { grammar, captures } => (grammar, captures),
            PathMatch::NoMatch => panic!("expected {path} to match"),
        }
    }

    #[test]
    fn test_instance_qualified_captures() {
        let (grammar, caps) = matched("/app_i/myapp/one/plots/1.png");
        assert_eq!(grammar, Grammar::InstanceQualified);
        assert_eq!(caps.selector, "app_i");
        assert_eq!(caps.app_name, Some("myapp"));
        assert_eq!(caps.app_instance, Some("one"));
        assert_eq!(caps.sub_path, Some("/plots/1.png"));
    }

    #[test]
    fn test_unqualified_captures() {
        let (grammar, caps) = matched("/prefix/app_direct/myapp/");
        assert_eq!(grammar, Grammar::Unqualified);
        assert_eq!(caps.selector, "app_direct");
        assert_eq!(caps.app_name, Some("myapp"));
        assert_eq!(caps.app_instance, None);
        assert_eq!(caps.sub_path, Some("/"));
    }

    #[test]
    fn test_instance_grammar_takes_priority() {
        // Both grammars could apply; the instance-qualified one is tried first
        let (grammar, caps) = matched("/app/x/app_i/myapp/one");
        assert_eq!(grammar, Grammar::InstanceQualified);
        assert_eq!(caps.app_name, Some("myapp"));
        assert_eq!(caps.app_instance, Some("one"));
        assert_eq!(caps.sub_path, Some(""));
    }

    #[test]
    fn test_leftmost_selector_wins() {
        let (_, caps) = matched("/app_i/a/b/app_i/c/d");
        assert_eq!(caps.app_name, Some("a"));
        assert_eq!(caps.app_instance, Some("b"));
        assert_eq!(caps.sub_path, Some("/app_i/c/d"));
    }

    #[test]
    fn test_empty_instance_is_still_a_structural_match() {
        let (grammar, caps) = matched("/app_i/myapp//rest");
        assert_eq!(grammar, Grammar::InstanceQualified);
        assert_eq!(caps.app_instance, Some(""));
        assert_eq!(caps.sub_path, Some("/rest"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_path("/static/foo.js"), PathMatch::NoMatch);
        assert_eq!(match_path("/"), PathMatch::NoMatch);
        assert_eq!(match_path(""), PathMatch::NoMatch);
        assert_eq!(match_path("/apps/myapp"), PathMatch::NoMatch);
        // Selector must be a whole segment preceded by '/'
        assert_eq!(match_path("app/myapp"), PathMatch::NoMatch);
        // app_i without an instance segment fits neither grammar
        assert_eq!(match_path("/app_i/myapp"), PathMatch::NoMatch);
    }
}
