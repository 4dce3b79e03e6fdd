//! Page slicing for ordered collections.

/// Default number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return the `page`-th slice of `items`, `page_size` elements per page.
///
/// Pages are 1-based. A page of zero or less, a page past the end of the
/// data, or a zero `page_size` all yield an empty slice. The last page may be
/// shorter than `page_size`.
///
/// This never fails; callers that treat an empty page as "not found" should
/// pass the result through [`crate::guards::require_nonempty`].
#[must_use]
pub fn paginate<T>(page: i64, items: &[T], page_size: usize) -> &[T] {
    if page < 1 || page_size == 0 {
        return &[];
    }
    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|index| index.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
