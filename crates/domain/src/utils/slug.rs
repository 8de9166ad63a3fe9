//! Pure string utility for deriving URL-safe slugs from display names

/// Turn a display name into a lowercase, dash-separated slug.
///
/// ASCII alphanumerics are kept and lowercased; every other run of
/// characters collapses into a single dash. Leading and trailing dashes are
/// dropped, so `"Support - Acme Corp"` becomes `"support-acme-corp"`.
///
/// # Examples
///
/// ```
/// use hourbridge_domain::utils::slugify;
///
/// assert_eq!(slugify("Acme Corp"), "acme-corp");
/// assert_eq!(slugify("  Widgets & Co.  "), "widgets-co");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
