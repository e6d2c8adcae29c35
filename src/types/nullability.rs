//! Nullability markers.

/// Markers declaring that a value may be null.
static NULLABLE_MARKERS: &[&str] = &["Nullable", "CheckForNull"];

/// Markers declaring that a value is never null.
static NON_NULL_MARKERS: &[&str] = &["NonNull", "Nonnull", "NotNull", "NotBlank", "NotEmpty"];

/// Reads nullability from marker simple names.
///
/// Returns `Some(true)` for nullable, `Some(false)` for non-null and `None` when
/// no nullability marker is present. A nullable marker wins over a non-null one.
pub fn nullability_from_markers<'a, I>(simple_names: I) -> Option<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = None;
    for name in simple_names {
        if NULLABLE_MARKERS.contains(&name) {
            return Some(true);
        }
        if NON_NULL_MARKERS.contains(&name) {
            result = Some(false);
        }
    }
    result
}
