//! Index-based addressing of nodes in the work breakdown and in the team
//!
//! A [`Path`] lists the 1-based position of a node among its siblings, from the
//! root downwards. `WP 1.3` is the third child of the first top-level activity.

use crate::error::PathError;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Location of a node, as a list of 1-based child indices
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<usize>);

impl Path {
    /// Empty path, as held by a traversal before it enters the tree
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Parse any text carrying dotted indices, such as `T 1.2`, `WP3` or `1.2.1`
    ///
    /// Everything but the digits is ignored, so prefixes and separators do not
    /// matter.
    pub fn from_text(text: &str) -> Result<Self, PathError> {
        let re = Regex::new(r"\d+")?;
        let mut indices = Vec::new();
        for found in re.find_iter(text) {
            let index: usize = found
                .as_str()
                .parse()
                .map_err(|_| PathError::InvalidIndex(found.as_str().to_string()))?;
            if index == 0 {
                return Err(PathError::ZeroIndex(text.to_string()));
            }
            indices.push(index);
        }
        if indices.is_empty() {
            return Err(PathError::NoIndex(text.to_string()));
        }
        Ok(Self(indices))
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent path, `None` for top-level nodes and for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Descend into the child at the given 1-based index
    pub fn enter(&mut self, index: usize) {
        debug_assert!(index > 0, "path indices are 1-based");
        self.0.push(index);
    }

    /// Climb back to the parent, returning the index that was left
    pub fn exit(&mut self) -> Option<usize> {
        debug_assert!(!self.0.is_empty(), "cannot exit the root path");
        self.0.pop()
    }

    /// True when `other` is this path or lies below it
    #[must_use]
    pub fn includes(&self, other: &Path) -> bool {
        self.0.len() <= other.0.len() && self.0[..] == other.0[..self.0.len()]
    }

    /// Render as `"<prefix> i.j.k"`, or just `"i.j.k"` for an empty prefix
    #[must_use]
    pub fn as_identifier(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", prefix, self)
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identifier_with_prefix() {
        let path = Path::from_indices(vec![1, 3, 2]);
        assert_eq!(path.as_identifier("WP"), "WP 1.3.2");
        assert_eq!(path.as_identifier(""), "1.3.2");
    }

    #[test]
    fn test_from_text_ignores_prefix() {
        assert_eq!(Path::from_text("T 1.2").unwrap().indices(), &[1, 2]);
        assert_eq!(Path::from_text("WP3").unwrap().indices(), &[3]);
        assert_eq!(Path::from_text("A 2.10.1").unwrap().indices(), &[2, 10, 1]);
    }

    #[test]
    fn test_from_text_rejects_garbage() {
        assert!(matches!(Path::from_text("WP"), Err(PathError::NoIndex(_))));
        assert!(matches!(
            Path::from_text("T 1.0"),
            Err(PathError::ZeroIndex(_))
        ));
    }

    #[test]
    fn test_enter_exit_are_paired() {
        let mut path = Path::new();
        path.enter(2);
        path.enter(4);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.exit(), Some(4));
        assert_eq!(path.indices(), &[2]);
    }

    #[test]
    fn test_parent() {
        let path = Path::from_indices(vec![1, 2, 3]);
        assert_eq!(path.parent(), Some(Path::from_indices(vec![1, 2])));
        assert_eq!(Path::from_indices(vec![1]).parent(), None);
    }

    #[test]
    fn test_includes_is_segment_wise() {
        let wp = Path::from_indices(vec![1, 1]);
        assert!(wp.includes(&Path::from_indices(vec![1, 1])));
        assert!(wp.includes(&Path::from_indices(vec![1, 1, 4])));
        assert!(!wp.includes(&Path::from_indices(vec![1, 10])));
        assert!(!wp.includes(&Path::from_indices(vec![1])));
    }

    proptest! {
        #[test]
        fn test_text_round_trip(indices in prop::collection::vec(1usize..500, 1..6)) {
            let mut path = Path::new();
            for index in &indices {
                path.enter(*index);
            }
            let parsed = Path::from_text(&path.as_identifier("")).unwrap();
            prop_assert_eq!(parsed.indices(), &indices[..]);
        }
    }
}
