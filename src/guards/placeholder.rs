use std::collections::HashSet;

/// Reserved title value.
pub const TITLE_PLACEHOLDERS: [&str; 1] = ["sin titulo"];

/// Values that mean "no ingredients" even though they are not empty.
pub const INGREDIENT_PLACEHOLDERS: [&str; 7] = [
    "sin ingredientes",
    "n/a",
    "ninguno",
    "-",
    "none",
    "na",
    "null",
];

/// Set of comparison keys treated as semantically empty.
///
/// Entries are stored in key form (see [`placeholder_key`]), so a denylist
/// built from `"N/A"` matches `"n/a"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    keys: HashSet<String>,
}

impl Denylist {
    /// Built-in denylist for recipe titles
    pub fn title() -> Self {
        TITLE_PLACEHOLDERS.into_iter().collect()
    }

    /// Built-in denylist for ingredient lists
    pub fn ingredients() -> Self {
        INGREDIENT_PLACEHOLDERS.into_iter().collect()
    }

    pub fn insert(&mut self, entry: &str) -> bool {
        let key = placeholder_key(entry);
        if key.is_empty() {
            return false;
        }
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Denylist::default();
        list.extend(iter);
        list
    }
}

impl<S: AsRef<str>> Extend<S> for Denylist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry.as_ref());
        }
    }
}

/// Comparison key: every whitespace run (line feeds included) becomes one
/// space, then the result is trimmed and lower-cased.
pub fn placeholder_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

/// True when `normalized` reduces to an entry of `denylist`.
pub fn is_placeholder(normalized: &str, denylist: &Denylist) -> bool {
    denylist.contains(&placeholder_key(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_collapses_whitespace_and_case() {
        assert_eq!(placeholder_key("  Sin\n  INGREDIENTES \t"), "sin ingredientes");
        assert_eq!(placeholder_key("N/A"), "n/a");
    }

    #[test]
    fn test_builtin_ingredient_placeholders() {
        let list = Denylist::ingredients();
        assert_eq!(list.len(), 7);
        for value in ["sin ingredientes", "N/A", "Ninguno", "-", "NONE", "na", "Null"] {
            assert!(is_placeholder(value, &list), "{value} should be a placeholder");
        }
        assert!(is_placeholder("sin\ningredientes", &list));
    }

    #[test]
    fn test_real_values_are_not_placeholders() {
        let list = Denylist::ingredients();
        assert!(!is_placeholder("harina", &list));
        assert!(!is_placeholder("sin ingredientes extra", &list));
        assert!(!is_placeholder("nada", &list));
    }

    #[test]
    fn test_title_denylist() {
        let list = Denylist::title();
        assert!(is_placeholder("Sin Titulo", &list));
        assert!(is_placeholder("sin   titulo", &list));
        assert!(!is_placeholder("sin ingredientes", &list));
    }

    #[test]
    fn test_extend_ignores_blank_entries() {
        let mut list = Denylist::title();
        list.extend(["  TBD ", "", "   "]);
        assert_eq!(list.len(), 2);
        assert!(is_placeholder("tbd", &list));
    }
}
