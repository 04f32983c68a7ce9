// src/catalog/page.rs

use serde::Serialize;

pub const PAGE_SIZE: usize = 9;

/// One window over an ordered sequence plus the counters the footer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the whole ordered sequence.
    pub total: usize,
    /// 1-based inclusive display range. Both are 0 whenever `items` is empty,
    /// which includes a page past the end of a non-empty sequence.
    pub start: usize,
    pub end: usize,
    pub current: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `[(page - 1) * page_size, page * page_size)` clamped to the
/// sequence. A page past the end is empty rather than an error.
pub fn paginate<T: Clone>(ordered: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = ordered.len();

    let offset = (page - 1).saturating_mul(page_size).min(total);
    let limit = offset.saturating_add(page_size).min(total);
    let items = ordered[offset..limit].to_vec();

    let (start, end) = if items.is_empty() {
        (0, 0)
    } else {
        (offset + 1, limit)
    };

    Page {
        items,
        total,
        start,
        end,
        current: page,
        total_pages: total.div_ceil(page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_short_sequence() {
        let data: Vec<u32> = (1..=6).collect();
        let page = paginate(&data, 1, PAGE_SIZE);
        assert_eq!(page.items, data);
        assert_eq!((page.start, page.end), (1, 6));
        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn middle_and_last_pages() {
        let data: Vec<u32> = (1..=20).collect();

        let second = paginate(&data, 2, PAGE_SIZE);
        assert_eq!(second.items, (10..=18).collect::<Vec<_>>());
        assert_eq!((second.start, second.end), (10, 18));

        let third = paginate(&data, 3, PAGE_SIZE);
        assert_eq!(third.items, vec![19, 20]);
        assert_eq!((third.start, third.end), (19, 20));
        assert_eq!(third.total_pages, 3);
    }

    #[test]
    fn past_the_end_is_empty() {
        let data: Vec<u32> = (1..=6).collect();
        let page = paginate(&data, 5, PAGE_SIZE);
        assert!(page.is_empty());
        assert_eq!((page.start, page.end), (0, 0));
        assert_eq!(page.total, 6);
        assert_eq!(page.current, 5);

        // Just past the last item.
        let page = paginate(&data, 2, PAGE_SIZE);
        assert!(page.is_empty());
        assert_eq!((page.start, page.end), (0, 0));
    }

    #[test]
    fn empty_sequence() {
        let data: Vec<u32> = Vec::new();
        let page = paginate(&data, 1, PAGE_SIZE);
        assert!(page.is_empty());
        assert_eq!((page.start, page.end), (0, 0));
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn pages_partition_the_sequence() {
        let data: Vec<u32> = (0..31).collect();
        let first = paginate(&data, 1, PAGE_SIZE);

        let mut rebuilt = Vec::new();
        for n in 1..=first.total_pages {
            rebuilt.extend(paginate(&data, n, PAGE_SIZE).items);
        }
        assert_eq!(rebuilt, data);
    }
}
