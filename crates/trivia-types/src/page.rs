//! Pagination over the full question list.

use std::ops::Range;

/// Number of questions returned per page by `GET /questions`.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Computes the slice of a `total`-length list shown on a 1-based `page`.
///
/// Returns `None` when the window is empty: `page < 1`, or the first index
/// of the page is at or beyond `total`. The returned range is clamped to
/// `total`, so the last page may be shorter than [`QUESTIONS_PER_PAGE`].
pub fn page_window(page: i64, total: usize) -> Option<Range<usize>> {
    if page < 1 {
        return None;
    }
    let start = usize::try_from(page - 1)
        .ok()?
        .checked_mul(QUESTIONS_PER_PAGE)?;
    if start >= total {
        return None;
    }
    let end = (start + QUESTIONS_PER_PAGE).min(total);
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_full_when_enough_questions() {
        assert_eq!(page_window(1, 19), Some(0..10));
    }

    #[test]
    fn last_page_is_truncated() {
        assert_eq!(page_window(2, 19), Some(10..19));
    }

    #[test]
    fn page_past_end_is_empty() {
        assert_eq!(page_window(3, 19), None);
        assert_eq!(page_window(3, 20), None);
        assert_eq!(page_window(1, 0), None);
    }

    #[test]
    fn non_positive_pages_are_empty() {
        assert_eq!(page_window(0, 19), None);
        assert_eq!(page_window(-1, 19), None);
        assert_eq!(page_window(i64::MIN, 19), None);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert_eq!(page_window(i64::MAX, 19), None);
    }

    #[test]
    fn window_length_matches_remaining_count() {
        let total = 37;
        for page in 1..=4 {
            let window = page_window(page, total).unwrap();
            let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
            assert_eq!(window.len(), QUESTIONS_PER_PAGE.min(total - start));
        }
    }
}
