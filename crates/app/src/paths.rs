//! Data paths and navigation routes.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashMap;
use thiserror::Error;
use uuid::Uuid;

/// Characters the realtime store refuses inside a path segment.
const FORBIDDEN_CHARS: [char; 5] = ['.', '#', '$', '[', ']'];

/// A path or key the store would refuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path contains an empty segment: {0:?}")]
    EmptySegment(String),

    #[error("path segment {0:?} contains a forbidden character")]
    ForbiddenCharacter(String),
}

/// Location of a node in the realtime document tree.
///
/// Segments are validated on construction, so a `DataPath` can always be
/// handed to a channel as-is. The root is the path with no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataPath {
    segments: Vec<String>,
}

impl DataPath {
    /// The root of the tree.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Top-level collection with a name known to be a valid segment.
    pub(crate) fn collection(name: &'static str) -> Self {
        Self {
            segments: vec![name.to_string()],
        }
    }

    /// Parse a slash-separated path. Leading and trailing slashes are ignored,
    /// so `"products/"` and `"/products"` name the same node.
    ///
    /// # Errors
    ///
    /// Returns an error when an inner segment is empty or contains a
    /// character the store forbids.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let trimmed = path.trim_matches('/');

        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let segments = trimmed
            .split('/')
            .map(|segment| validate_segment(segment, path).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    /// Path of the child `key` below this node.
    ///
    /// # Errors
    ///
    /// Returns an error when `key` is not a valid single segment.
    pub fn child(&self, key: &str) -> Result<Self, PathError> {
        if key.contains('/') {
            return Err(PathError::ForbiddenCharacter(key.to_string()));
        }

        validate_segment(key, key)?;

        Ok(self.with_segment(key.to_string()))
    }

    /// Child path keyed by a freshly generated, time-ordered identifier.
    pub(crate) fn generated_child(&self, id: Uuid) -> Self {
        self.with_segment(id.simple().to_string())
    }

    fn with_segment(&self, segment: String) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment, which is the entity key for `collection/{key}` paths.
    #[must_use]
    pub fn last_key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether `self` is `other` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Whether one of the two paths contains the other. A write to either
    /// can change the value observed at the other.
    #[must_use]
    pub fn is_related(&self, other: &Self) -> bool {
        self.is_ancestor_of(other) || other.is_ancestor_of(self)
    }
}

impl Display for DataPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn validate_segment<'a>(segment: &'a str, path: &str) -> Result<&'a str, PathError> {
    if segment.is_empty() {
        return Err(PathError::EmptySegment(path.to_string()));
    }

    if segment
        .chars()
        .any(|c| FORBIDDEN_CHARS.contains(&c) || c.is_ascii_control())
    {
        return Err(PathError::ForbiddenCharacter(segment.to_string()));
    }

    Ok(segment)
}

/// Parameters extracted from the current route, e.g. `id` in `/products/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(FxHashMap<String, String>);

impl RouteParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Value of parameter `name`, if the route carries it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_ignores_outer_slashes() -> TestResult {
        let a = DataPath::parse("products/")?;
        let b = DataPath::parse("/products")?;

        assert_eq!(a, b, "outer slashes should not matter");
        assert_eq!(a.to_string(), "products");

        Ok(())
    }

    #[test]
    fn parse_empty_is_root() -> TestResult {
        assert!(DataPath::parse("")?.is_root(), "empty path should be root");
        assert!(DataPath::parse("/")?.is_root(), "lone slash should be root");

        Ok(())
    }

    #[test]
    fn parse_rejects_empty_inner_segment() {
        let result = DataPath::parse("products//p1");

        assert!(
            matches!(result, Err(PathError::EmptySegment(_))),
            "expected EmptySegment, got {result:?}"
        );
    }

    #[test]
    fn child_rejects_forbidden_characters() -> TestResult {
        let products = DataPath::parse("products")?;

        for key in ["a.b", "a#b", "a$b", "a[b", "a]b", "a/b"] {
            let result = products.child(key);

            assert!(
                matches!(result, Err(PathError::ForbiddenCharacter(_))),
                "expected ForbiddenCharacter for {key:?}, got {result:?}"
            );
        }

        Ok(())
    }

    #[test]
    fn child_rejects_empty_key() -> TestResult {
        let result = DataPath::parse("products")?.child("");

        assert!(
            matches!(result, Err(PathError::EmptySegment(_))),
            "expected EmptySegment, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn related_paths() -> TestResult {
        let products = DataPath::parse("products")?;
        let p1 = products.child("p1")?;
        let p2 = products.child("p2")?;

        assert!(products.is_related(&p1), "parent relates to child");
        assert!(p1.is_related(&products), "child relates to parent");
        assert!(!p1.is_related(&p2), "siblings are unrelated");
        assert!(DataPath::root().is_related(&p2), "root relates to everything");
        assert_eq!(p1.last_key(), Some("p1"));

        Ok(())
    }

    #[test]
    fn route_params_lookup() {
        let params = RouteParams::new().with("id", "p1");

        assert_eq!(params.get("id"), Some("p1"));
        assert_eq!(params.get("missing"), None);
    }
}
