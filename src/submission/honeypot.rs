/// Check if the honeypot field is filled. Returns true if spam detected.
pub fn is_spam(pairs: &[(String, String)], honeypot_field: Option<&str>) -> bool {
    let Some(field) = honeypot_field else {
        return false;
    };

    if field.is_empty() {
        return false;
    }

    pairs
        .iter()
        .any(|(name, value)| name == field && !value.is_empty())
}
