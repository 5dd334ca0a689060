//! Code-to-label lookup tables with a fallback policy

use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::LazyLock;

/// What a lookup returns for a code that is not in its table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Echo the raw code, lower-cased
    EchoLowercase,
    /// A fixed string (empty means "omit this field")
    Fixed(&'static str),
}

/// Result of resolving one code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub label: Cow<'static, str>,
    /// Whether the code was found in the table
    pub matched: bool,
}

/// A fixed code-to-label mapping plus a fallback policy.
#[derive(Debug, Clone)]
pub struct DefaultingLookup<K> {
    table: HashMap<K, &'static str>,
    fallback: Fallback,
}

impl<K: Eq + Hash> DefaultingLookup<K> {
    /// Build a lookup from `(code, label)` pairs
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (K, &'static str)>, fallback: Fallback) -> Self {
        Self {
            table: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Resolve `code`, reporting whether it matched
    #[must_use]
    pub fn resolve<Q>(&self, code: &Q) -> Resolved
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        if let Some(label) = self.table.get(code) {
            return Resolved {
                label: Cow::Borrowed(*label),
                matched: true,
            };
        }
        let label = match self.fallback {
            Fallback::EchoLowercase => Cow::Owned(code.to_string().to_lowercase()),
            Fallback::Fixed(default) => Cow::Borrowed(default),
        };
        Resolved {
            label,
            matched: false,
        }
    }

    /// Resolve `code` to its label
    #[must_use]
    pub fn get<Q>(&self, code: &Q) -> Cow<'static, str>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.resolve(code).label
    }
}

/// Symbol kind codes; unknown kinds are echoed lower-cased
pub static HUMAN_KIND: LazyLock<DefaultingLookup<&'static str>> = LazyLock::new(|| {
    DefaultingLookup::new(
        [
            ("ParmVar", "function parameter"),
            ("Var", "variable"),
            ("CXXRecord", "struct or class"),
            ("CXXMethod", "method"),
            ("EnumConstant", "enum value"),
        ],
        Fallback::EchoLowercase,
    )
});

/// Linkage codes; unknown codes resolve to an empty label
pub static HUMAN_LINKAGE: LazyLock<DefaultingLookup<i64>> = LazyLock::new(|| {
    DefaultingLookup::new(
        [(1, "local"), (2, "local"), (3, "global"), (4, "global")],
        Fallback::Fixed(""),
    )
});

/// Access codes; unknown codes resolve to an empty label
pub static HUMAN_ACCESS: LazyLock<DefaultingLookup<i64>> = LazyLock::new(|| {
    DefaultingLookup::new(
        [(0, "public"), (1, "protected"), (2, "private")],
        Fallback::Fixed(""),
    )
});
