//! Language selection for display.

use crate::language::{Language, LocalizedText};

/// Picks one value out of a [`LocalizedText`] using a fixed preference order.
///
/// Dutch is preferred, then English, then untagged text. If none of those
/// are present any remaining value is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageResolutionPolicy;

impl LanguageResolutionPolicy {
    /// Preference order, most preferred first.
    pub const PREFERRED: [Language; 3] = [Language::Dutch, Language::English, Language::Unknown];

    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the preferred value of `text`, or `None` if it is empty.
    #[must_use]
    pub fn resolve<'a>(&self, text: &'a LocalizedText) -> Option<&'a str> {
        Self::PREFERRED
            .iter()
            .find_map(|language| text.get(*language))
            .or_else(|| text.iter().next().map(|(_, value)| value))
    }

    /// Resolves an optional field into an owned value.
    #[must_use]
    pub fn resolve_field(&self, text: Option<&LocalizedText>) -> Option<String> {
        text.and_then(|t| self.resolve(t)).map(str::to_owned)
    }
}
