//! Location of a value inside a nested structure.

use std::fmt;

/// One step from a container into one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Entry of a mapping.
    Key(String),
    /// Element of a sequence.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "[{}]", key),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Ordered segments leading from the root operand to a nested value.
///
/// Renders as a run of bracketed segments, e.g. `[F][name][first]` or `[8]`.
/// The root itself renders as the empty string.
///
/// # Examples
///
/// ```rust
/// use strproc::KeyPath;
///
/// let mut path = KeyPath::new();
/// path.push_key("F");
/// path.push_key("name");
/// assert_eq!(path.to_string(), "[F][name]");
/// assert_eq!(path.depth(), 2);
///
/// path.pop();
/// assert_eq!(path.to_string(), "[F]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<Segment>);

impl KeyPath {
    #[must_use]
    pub fn new() -> Self {
        KeyPath(Vec::new())
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn push_key(&mut self, key: &str) {
        self.0.push(Segment::Key(key.to_string()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(Segment::Index(index));
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    /// Returns a copy of this path extended by one mapping key.
    #[must_use]
    pub fn with_key(&self, key: &str) -> Self {
        let mut path = self.clone();
        path.push_key(key);
        path
    }

    /// Returns a copy of this path extended by one sequence index.
    #[must_use]
    pub fn with_index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push_index(index);
        path
    }

    /// Number of containers entered from the root.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns the mapping keys along the path, skipping sequence indices.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Key(key) => Some(key.as_str()),
            Segment::Index(_) => None,
        })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for KeyPath {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        KeyPath(iter.into_iter().map(|k| Segment::Key(k.to_string())).collect())
    }
}
