use std::collections::HashSet;

use ammonia::Builder;

/// Inline formatting tags preserved by the allow-list. Everything else is
/// stripped, script/style bodies included.
const ALLOWED_TAGS: &[&str] = &["b", "i", "em", "strong", "u", "br"];

/// Whitelist-based HTML sanitizer applied to every submitted form field.
///
/// The allow-list is configured once at startup; `clean` only reads it, so a
/// single instance is shared across requests.
pub struct FieldSanitizer {
    builder: Builder<'static>,
}

impl FieldSanitizer {
    pub fn new() -> Self {
        let mut builder = Builder::new();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
            .generic_attributes(HashSet::new());
        Self { builder }
    }

    /// Sanitize one field value for safe inclusion in an HTML response.
    pub fn sanitize(&self, input: &str) -> String {
        self.builder.clean(input).to_string()
    }
}

impl Default for FieldSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
