//! The pagination slicer and its clamp helpers.

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Maximum number of records per page.
pub const MAX_PAGE_SIZE: usize = 100;

/// One page window plus page-count metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub window: Vec<T>,
    pub total_pages: usize,
}

/// Slice `records` into the half-open window for `page` (1-based).
///
/// An empty input yields `total_pages = 0` and an empty window. An
/// out-of-range `page` (including 0) yields an empty window, never an
/// error. Callers are expected to clamp `page` via [`clamp_page`] before
/// asking for a window they intend to display.
pub fn paginate<T: Clone>(records: &[T], page_size: usize, page: usize) -> Page<T> {
    if page_size == 0 {
        return Page {
            window: Vec::new(),
            total_pages: 0,
        };
    }

    let total_pages = records.len().div_ceil(page_size);
    if page == 0 || page > total_pages {
        return Page {
            window: Vec::new(),
            total_pages,
        };
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(records.len());
    Page {
        window: records[start..end].to_vec(),
        total_pages,
    }
}

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`, defaulting.
pub fn clamp_page_size(page_size: Option<usize>) -> usize {
    page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Clamp a requested page to `[1, max(total_pages, 1)]`.
///
/// Page 1 of an empty set is well-defined (and empty).
pub fn clamp_page(page: Option<usize>, total_pages: usize) -> usize {
    page.unwrap_or(1).clamp(1, total_pages.max(1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- paginate ------------------------------------------------------------

    #[test]
    fn slices_half_open_windows() {
        let records: Vec<i32> = (1..=7).collect();
        assert_eq!(paginate(&records, 3, 1).window, [1, 2, 3]);
        assert_eq!(paginate(&records, 3, 2).window, [4, 5, 6]);
        assert_eq!(paginate(&records, 3, 3).window, [7]);
    }

    #[test]
    fn total_pages_rounds_up() {
        let records: Vec<i32> = (1..=7).collect();
        assert_eq!(paginate(&records, 3, 1).total_pages, 3);
        assert_eq!(paginate(&records, 7, 1).total_pages, 1);
        assert_eq!(paginate(&records, 10, 1).total_pages, 1);
    }

    #[test]
    fn empty_input_yields_zero_pages_and_empty_window() {
        let records: Vec<i32> = Vec::new();
        let page = paginate(&records, 10, 1);
        assert!(page.window.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn out_of_range_page_yields_empty_window() {
        let records: Vec<i32> = (1..=7).collect();
        assert!(paginate(&records, 3, 4).window.is_empty());
        assert!(paginate(&records, 3, 100).window.is_empty());
        assert!(paginate(&records, 3, 0).window.is_empty());
    }

    #[test]
    fn windows_reconstruct_the_input_exactly() {
        let records: Vec<i32> = (1..=23).collect();
        for page_size in [1, 2, 5, 10, 23, 40] {
            let total_pages = paginate(&records, page_size, 1).total_pages;
            let mut rebuilt = Vec::new();
            for page in 1..=total_pages {
                rebuilt.extend(paginate(&records, page_size, page).window);
            }
            assert_eq!(rebuilt, records, "page_size {page_size}");
        }
    }

    // -- clamps --------------------------------------------------------------

    #[test]
    fn clamp_page_size_defaults_and_bounds() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(40)), 40);
        assert_eq!(clamp_page_size(Some(5000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn clamp_page_stays_within_total() {
        assert_eq!(clamp_page(None, 4), 1);
        assert_eq!(clamp_page(Some(3), 4), 3);
        assert_eq!(clamp_page(Some(9), 4), 4);
        assert_eq!(clamp_page(Some(0), 4), 1);
        // An empty set still has a well-defined page 1.
        assert_eq!(clamp_page(Some(7), 0), 1);
    }
}
