use url::Url;

/// Resolve a possibly-relative reference against a base URL.
///
/// References that are already absolute come back unchanged, as does anything
/// that cannot be resolved (an unparseable base, an empty reference, or a
/// join failure). Resolution never fails.
pub fn resolve_url(base: &str, reference: &str) -> String {
    match Url::parse(base) {
        Ok(base) => resolve_with_base(&base, reference),
        Err(_) => reference.to_string(),
    }
}

/// Same as [`resolve_url`] with an already parsed base
pub fn resolve_with_base(base: &Url, reference: &str) -> String {
    if reference.trim().is_empty() || is_absolute(reference) {
        return reference.to_string();
    }

    match base.join(reference) {
        Ok(resolved) => resolved.into(),
        Err(_) => reference.to_string(),
    }
}

/// Whether a reference carries its own scheme (`https:`, `mailto:`, `data:` ...)
fn is_absolute(reference: &str) -> bool {
    Url::parse(reference).is_ok()
}
