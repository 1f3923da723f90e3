// SPDX-License-Identifier: MPL-2.0
//! Snackbar identifiers.
//!
//! Callers may pick their own key (a number or a string) or let the provider
//! generate one. Generated keys live in their own namespace, so a caller key
//! can never collide with a generated one.

use std::fmt;

/// Identifier of an enqueued snackbar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnackbarKey {
    /// Caller-supplied numeric key. `0` is a valid key.
    Number(i64),
    /// Caller-supplied string key. An empty string does not count as a key;
    /// the provider generates one instead.
    Text(String),
    /// Key produced by the provider's [`KeyGenerator`].
    Generated(u64),
}

impl SnackbarKey {
    /// Returns true if the key was produced by the provider.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, SnackbarKey::Generated(_))
    }

    /// False only for the empty string key.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !matches!(self, SnackbarKey::Text(text) if text.is_empty())
    }
}

impl fmt::Display for SnackbarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnackbarKey::Number(n) => write!(f, "{n}"),
            SnackbarKey::Text(s) => write!(f, "{s}"),
            SnackbarKey::Generated(n) => write!(f, "snack-{n}"),
        }
    }
}

impl From<i64> for SnackbarKey {
    fn from(value: i64) -> Self {
        SnackbarKey::Number(value)
    }
}

impl From<i32> for SnackbarKey {
    fn from(value: i32) -> Self {
        SnackbarKey::Number(i64::from(value))
    }
}

impl From<&str> for SnackbarKey {
    fn from(value: &str) -> Self {
        SnackbarKey::Text(value.to_string())
    }
}

impl From<String> for SnackbarKey {
    fn from(value: String) -> Self {
        SnackbarKey::Text(value)
    }
}

/// Monotonic source of generated keys.
///
/// Each provider owns one, so keys are unique for the provider's lifetime.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    next: u64,
}

impl KeyGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a key never returned before by this generator.
    pub fn next_key(&mut self) -> SnackbarKey {
        let key = SnackbarKey::Generated(self.next);
        self.next += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_unique_and_increasing() {
        let mut keys = KeyGenerator::new();
        let first = keys.next_key();
        let second = keys.next_key();

        assert_ne!(first, second);
        assert_eq!(first, SnackbarKey::Generated(0));
        assert_eq!(second, SnackbarKey::Generated(1));
    }

    #[test]
    fn generated_key_never_equals_caller_key() {
        let mut keys = KeyGenerator::new();
        assert_ne!(keys.next_key(), SnackbarKey::from(0));
    }

    #[test]
    fn zero_is_defined_but_empty_text_is_not() {
        assert!(SnackbarKey::from(0).is_defined());
        assert!(SnackbarKey::from("0").is_defined());
        assert!(!SnackbarKey::from("").is_defined());
        assert!(SnackbarKey::Generated(0).is_defined());
    }

    #[test]
    fn display_formats_each_variant() {
        assert_eq!(SnackbarKey::from(42).to_string(), "42");
        assert_eq!(SnackbarKey::from("upload").to_string(), "upload");
        assert_eq!(SnackbarKey::Generated(7).to_string(), "snack-7");
    }
}
