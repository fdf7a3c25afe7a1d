//! Configuration key addressing

use std::fmt;

/// A dotted configuration key split into section and leaf.
///
/// `"editor.bracketPairs.colors"` addresses leaf `colors` in section
/// `editor.bracketPairs`. A name with no dot lives in the top-level
/// namespace: its section is empty and the leaf is the whole name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyName {
    section: String,
    leaf: String,
}

impl KeyName {
    /// Split `full_name` at its last `.`.
    ///
    /// No validation is performed; callers reject empty names first.
    pub fn split(full_name: &str) -> Self {
        match full_name.rsplit_once('.') {
            Some((section, leaf)) => Self {
                section: section.to_string(),
                leaf: leaf.to_string(),
            },
            None => Self {
                section: String::new(),
                leaf: full_name.to_string(),
            },
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// The dotted name this key was split from.
    pub fn full_name(&self) -> String {
        if self.section.is_empty() {
            self.leaf.clone()
        } else {
            format!("{}.{}", self.section, self.leaf)
        }
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.section.is_empty() {
            f.write_str(&self.leaf)
        } else {
            write!(f, "{}.{}", self.section, self.leaf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a.b.c", "a.b", "c")]
    #[case("ext.goodDefault", "ext", "goodDefault")]
    #[case("tabSize", "", "tabSize")]
    #[case("trailing.", "trailing", "")]
    #[case(".leading", "", "leading")]
    fn split_at_last_dot(#[case] full: &str, #[case] section: &str, #[case] leaf: &str) {
        let key = KeyName::split(full);
        assert_eq!(key.section(), section);
        assert_eq!(key.leaf(), leaf);
    }

    #[test]
    fn display_restores_full_name() {
        for full in ["a.b.c", "tabSize", "ext.goodDefault"] {
            let key = KeyName::split(full);
            assert_eq!(key.to_string(), full);
            assert_eq!(key.full_name(), full);
        }
    }
}
