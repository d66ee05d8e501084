//! Path template compilation and named-parameter extraction.
//!
//! Templates use `{name}` placeholders for single path segments, e.g.
//! `/users/{id}` or `/users/{user_id}/posts/{post_id}`. At registration time a
//! template is compiled into an anchored regex plus an ordered list of
//! parameter names; at resolution time the compiled form is matched against
//! the concrete request path and yields the captured `(name, value)` pairs.
//!
//! A placeholder matches exactly one non-empty segment: `/items/{id}` matches
//! `/items/42` but not `/items` or `/items/42/extra`.

use regex::Regex;
use smallvec::SmallVec;

use crate::error::RouterError;

/// Maximum number of path parameters before heap allocation.
///
/// Most REST-style paths carry at most a handful of parameters
/// (e.g. `/users/{id}/posts/{post_id}`), so captures stay on the stack.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the resolution hot path.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// A compiled path template.
///
/// Compilation happens once, when a route is registered; matching a request
/// path is a single anchored regex test.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl PathTemplate {
    /// Compile a path template into a matcher.
    ///
    /// `/users/{id}` becomes `^/users/([^/]+)$` with parameter names `["id"]`.
    /// The root template `/` matches only the root path. Literal segments are
    /// regex-escaped, so characters like `.` in a path stay literal.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidTemplate`] if the generated regex fails
    /// to compile.
    pub fn compile(pattern: &str) -> Result<Self, RouterError> {
        let mut regex_source = String::with_capacity(pattern.len() + 8);
        regex_source.push('^');
        let mut param_names = Vec::with_capacity(pattern.matches('{').count());

        if pattern == "/" {
            regex_source.push('/');
        } else {
            for segment in pattern.split('/') {
                if segment.starts_with('{') && segment.ends_with('}') && segment.len() > 2 {
                    let name = segment.trim_start_matches('{').trim_end_matches('}');
                    regex_source.push_str("/([^/]+)");
                    param_names.push(name.to_string());
                } else if !segment.is_empty() {
                    regex_source.push('/');
                    regex_source.push_str(&regex::escape(segment));
                }
            }
        }
        regex_source.push('$');

        let regex = Regex::new(&regex_source).map_err(|err| RouterError::InvalidTemplate {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// The template string this matcher was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Ordered parameter names declared by the template.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Match a concrete request path against the template.
    ///
    /// Returns the captured `(name, value)` pairs on a full-path match,
    /// `None` otherwise.
    #[must_use]
    pub fn extract(&self, path: &str) -> Option<ParamVec> {
        let captures = self.regex.captures(path)?;
        let params = self
            .param_names
            .iter()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, capture)| {
                capture.map(|c| (name.clone(), c.as_str().to_string()))
            })
            .collect();
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_template_matches_only_root() {
        let template = PathTemplate::compile("/").unwrap();
        assert!(template.param_names().is_empty());
        assert!(template.extract("/").is_some());
        assert!(template.extract("/users").is_none());
    }

    #[test]
    fn literal_template_requires_exact_path() {
        let template = PathTemplate::compile("/users").unwrap();
        assert!(template.extract("/users").is_some());
        assert!(template.extract("/users/1").is_none());
        assert!(template.extract("/user").is_none());
    }

    #[test]
    fn placeholder_captures_one_segment() {
        let template = PathTemplate::compile("/items/{id}").unwrap();
        assert_eq!(template.pattern(), "/items/{id}");
        assert_eq!(template.param_names().to_vec(), vec!["id"]);

        let params = template.extract("/items/42").unwrap();
        assert_eq!(
            params.as_slice(),
            [("id".to_string(), "42".to_string())].as_slice()
        );

        // A placeholder is exactly one segment, never zero or two.
        assert!(template.extract("/items").is_none());
        assert!(template.extract("/items/42/extra").is_none());
    }

    #[test]
    fn multiple_placeholders() {
        let template = PathTemplate::compile("/users/{user_id}/posts/{post_id}").unwrap();
        let params = template.extract("/users/7/posts/99").unwrap();
        assert_eq!(
            params.as_slice(),
            [
                ("user_id".to_string(), "7".to_string()),
                ("post_id".to_string(), "99".to_string()),
            ]
            .as_slice()
        );
    }

    #[test]
    fn literal_segments_are_escaped() {
        let template = PathTemplate::compile("/files/archive.tar").unwrap();
        assert!(template.extract("/files/archive.tar").is_some());
        assert!(template.extract("/files/archiveXtar").is_none());
    }
}
