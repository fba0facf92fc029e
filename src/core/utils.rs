//! String helpers for namespace handling and console answers

/// Separator used by PHP namespaces.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Joins namespace fragments with a single backslash.
///
/// Configuration values conventionally carry a trailing backslash on the base
/// namespace (`App\`) and none on the category namespaces
/// (`Repositories\Contracts`). Fragments are trimmed of surrounding
/// backslashes and empty fragments are skipped, so either convention works.
///
/// # Examples
/// ```
/// use repokit::core::utils::join_namespace;
///
/// assert_eq!(
///     join_namespace(&["App\\", "Repositories\\Contracts", "Blog"]),
///     "App\\Repositories\\Contracts\\Blog"
/// );
/// assert_eq!(join_namespace(&["App\\", ""]), "App");
/// ```
pub fn join_namespace(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim().trim_matches(NAMESPACE_SEPARATOR))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\\")
}

/// Returns true when a console answer means "yes".
///
/// Only `y` and `yes` (any casing) are affirmative; everything else,
/// including an empty answer, is negative.
pub fn is_response_positive(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Uppercases the first character of `s`.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
