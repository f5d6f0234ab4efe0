/// Number of items requested per page on both list pages
pub const PAGE_LIMIT: u64 = 20;

/// Page arithmetic for offset/limit pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub offset: u64,
    pub count: u64,
    pub limit: u64,
}

impl PageBounds {
    pub fn new(offset: u64, count: u64, limit: u64) -> Self {
        // A zero limit is treated as one
        Self {
            offset,
            count,
            limit: limit.max(1),
        }
    }

    /// 1-based page number containing `offset`
    pub fn current_page(&self) -> u64 {
        (self.offset / self.limit).saturating_add(1)
    }

    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(self.limit)
    }

    /// 1-based inclusive range of items shown, `None` when the offset is past the end
    pub fn shown_range(&self) -> Option<(u64, u64)> {
        if self.offset >= self.count {
            return None;
        }
        let last = self.offset.saturating_add(self.limit).min(self.count);
        Some((self.offset + 1, last))
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.count
    }

    pub fn previous_offset(&self) -> u64 {
        self.offset.saturating_sub(self.limit)
    }

    /// Saturates at `u64::MAX` for offsets taken straight from the query string
    pub fn next_offset(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }

    /// Offset of the last page, 0 when there is nothing to show
    pub fn last_offset(&self) -> u64 {
        self.total_pages().saturating_sub(1) * self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_45() {
        let bounds = PageBounds::new(0, 45, PAGE_LIMIT);

        assert_eq!(bounds.current_page(), 1);
        assert_eq!(bounds.total_pages(), 3);
        assert_eq!(bounds.shown_range(), Some((1, 20)));
        assert!(!bounds.has_previous());
        assert!(bounds.has_next());
        assert_eq!(bounds.next_offset(), 20);
        assert_eq!(bounds.last_offset(), 40);
    }

    #[test]
    fn test_last_partial_page() {
        let bounds = PageBounds::new(40, 45, PAGE_LIMIT);

        assert_eq!(bounds.current_page(), 3);
        assert_eq!(bounds.shown_range(), Some((41, 45)));
        assert!(bounds.has_previous());
        assert!(!bounds.has_next());
        assert_eq!(bounds.previous_offset(), 20);
    }

    #[test]
    fn test_out_of_range_offset() {
        let bounds = PageBounds::new(40, 40, PAGE_LIMIT);

        assert_eq!(bounds.current_page(), 3);
        assert_eq!(bounds.total_pages(), 2);
        assert_eq!(bounds.shown_range(), None);
        assert!(!bounds.has_next());
        assert!(bounds.has_previous());
    }

    #[test]
    fn test_unaligned_offset() {
        let bounds = PageBounds::new(5, 45, PAGE_LIMIT);

        assert_eq!(bounds.previous_offset(), 0);
        assert_eq!(bounds.shown_range(), Some((6, 25)));
    }

    #[test]
    fn test_empty_result_set() {
        let bounds = PageBounds::new(0, 0, PAGE_LIMIT);

        assert_eq!(bounds.total_pages(), 0);
        assert_eq!(bounds.last_offset(), 0);
        assert_eq!(bounds.shown_range(), None);
    }

    #[test]
    fn test_max_offset_does_not_overflow() {
        let bounds = PageBounds::new(u64::MAX, 40, PAGE_LIMIT);

        assert_eq!(bounds.shown_range(), None);
        assert!(!bounds.has_next());
        assert!(bounds.has_previous());
        assert_eq!(bounds.next_offset(), u64::MAX);
        assert_eq!(bounds.previous_offset(), u64::MAX - PAGE_LIMIT);
        assert_eq!(bounds.last_offset(), 20);
        assert_eq!(bounds.current_page(), u64::MAX / PAGE_LIMIT + 1);

        assert_eq!(PageBounds::new(u64::MAX, 40, 1).current_page(), u64::MAX);
    }
}
