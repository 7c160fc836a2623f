//! Splitting a table into pages and the page links shown beneath it.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The page sizes a user can pick from.
pub const PAGE_SIZES: [usize; 6] = [10, 15, 25, 50, 75, 100];

/// The number of rows shown per page, always one of [PAGE_SIZES].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// # Errors
    /// Returns [Error::InvalidPageSize] if `size` is not one of [PAGE_SIZES].
    pub fn new(size: usize) -> Result<Self, Error> {
        if PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(Error::InvalidPageSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(15)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

/// The number of pages needed for `total` rows, zero when there are no rows.
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// The rows on the 1-based `page`.
///
/// The last page may be short and a page past the end is empty.
pub fn page_window<T>(rows: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);

    if start >= rows.len() {
        return &[];
    }

    let end = start.saturating_add(size).min(rows.len());

    &rows[start..end]
}

/// One element of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageIndicator {
    Page(usize),
    CurrentPage(usize),
    Ellipsis,
    Back(usize),
    Next(usize),
}

/// Build the page navigation bar for `current` out of `page_count` pages.
///
/// At most `max_links` consecutive page numbers are shown, centred on the
/// current page where possible. The first and last pages are always
/// reachable, with an ellipsis standing in for any pages skipped in
/// between.
pub fn page_indicators(current: usize, page_count: usize, max_links: usize) -> Vec<PageIndicator> {
    if page_count == 0 {
        return Vec::new();
    }

    let max_links = max_links.clamp(1, page_count);
    let first = current
        .saturating_sub(max_links / 2)
        .clamp(1, page_count - max_links + 1);
    let last = first + max_links - 1;

    let mut indicators = Vec::with_capacity(max_links + 6);

    if current > 1 {
        indicators.push(PageIndicator::Back((current - 1).min(page_count)));
    }

    if first > 1 {
        indicators.push(PageIndicator::Page(1));
    }

    if first > 2 {
        indicators.push(PageIndicator::Ellipsis);
    }

    indicators.extend((first..=last).map(|page| {
        if page == current {
            PageIndicator::CurrentPage(page)
        } else {
            PageIndicator::Page(page)
        }
    }));

    if last + 1 < page_count {
        indicators.push(PageIndicator::Ellipsis);
    }

    if last < page_count {
        indicators.push(PageIndicator::Page(page_count));
    }

    if current < page_count {
        indicators.push(PageIndicator::Next(current + 1));
    }

    indicators
}

#[cfg(test)]
mod page_size_tests {
    use crate::{
        Error,
        pagination::{PAGE_SIZES, PageSize, page_count, page_window},
    };

    #[test]
    fn accepts_listed_sizes() {
        for size in PAGE_SIZES {
            assert_eq!(PageSize::new(size).map(PageSize::get), Ok(size));
        }
    }

    #[test]
    fn rejects_other_sizes() {
        assert_eq!(PageSize::new(20), Err(Error::InvalidPageSize(20)));
        assert_eq!(PageSize::new(0), Err(Error::InvalidPageSize(0)));
    }

    #[test]
    fn default_is_fifteen() {
        assert_eq!(PageSize::default().get(), 15);
    }

    #[test]
    fn deserializes_from_number() {
        let size: PageSize = serde_json::from_str("25").unwrap();
        assert_eq!(size.get(), 25);

        assert!(serde_json::from_str::<PageSize>("7").is_err());
    }

    #[test]
    fn counts_pages() {
        let size = PageSize::new(10).unwrap();

        assert_eq!(page_count(0, size), 0);
        assert_eq!(page_count(10, size), 1);
        assert_eq!(page_count(23, size), 3);
    }

    #[test]
    fn windows_cover_every_row_once() {
        let rows: Vec<usize> = (0..23).collect();
        let size = PageSize::new(10).unwrap();

        let pages: Vec<&[usize]> = (1..=page_count(rows.len(), size))
            .map(|page| page_window(&rows, page, size))
            .collect();

        assert_eq!(pages.iter().map(|page| page.len()).collect::<Vec<_>>(), [10, 10, 3]);
        assert_eq!(pages.concat(), rows);
    }

    #[test]
    fn page_past_end_is_empty() {
        let rows = [1, 2, 3];
        let size = PageSize::default();

        assert!(page_window(&rows, 2, size).is_empty());
        assert!(page_window(&rows, usize::MAX, size).is_empty());
    }
}

#[cfg(test)]
mod page_indicator_tests {
    use crate::pagination::{
        PageIndicator::{Back, CurrentPage, Ellipsis, Next, Page},
        page_indicators,
    };

    #[test]
    fn no_pages_no_indicators() {
        assert!(page_indicators(1, 0, 5).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(page_indicators(1, 1, 5), [CurrentPage(1)]);
    }

    #[test]
    fn shows_all_pages_when_they_fit() {
        assert_eq!(
            page_indicators(1, 5, 5),
            [CurrentPage(1), Page(2), Page(3), Page(4), Page(5), Next(2)]
        );
    }

    #[test]
    fn skips_to_last_page_from_start() {
        assert_eq!(
            page_indicators(3, 10, 5),
            [
                Back(2),
                Page(1),
                Page(2),
                CurrentPage(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10),
                Next(4),
            ]
        );
    }

    #[test]
    fn centres_on_current_page() {
        assert_eq!(
            page_indicators(5, 10, 5),
            [
                Back(4),
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                CurrentPage(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10),
                Next(6),
            ]
        );
    }

    #[test]
    fn no_ellipsis_for_adjacent_pages() {
        assert_eq!(
            page_indicators(4, 10, 5),
            [
                Back(3),
                Page(1),
                Page(2),
                Page(3),
                CurrentPage(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10),
                Next(5),
            ]
        );
    }

    #[test]
    fn skips_to_first_page_from_end() {
        assert_eq!(
            page_indicators(10, 10, 5),
            [
                Back(9),
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                CurrentPage(10),
            ]
        );
    }

    #[test]
    fn page_past_end_links_back_to_last_page() {
        assert_eq!(
            page_indicators(12, 3, 5),
            [Back(3), Page(1), Page(2), Page(3)]
        );
    }
}
