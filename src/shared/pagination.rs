/// A page request: zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// One page of results plus totals over the whole collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.size);
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Resolve optional `page`/`size` query values against the configured
/// default and maximum page size.
pub fn resolve_page_request(
    page: Option<u64>,
    size: Option<u64>,
    default_size: u64,
    max_size: u64,
) -> PageRequest {
    let page = page.unwrap_or(0);
    let size = size.unwrap_or(default_size).clamp(1, max_size.max(1));
    PageRequest::new(page, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 2), 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let page: Page<u8> = Page::new(vec![], PageRequest::new(0, 20), 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(3, 20).offset(), 60);
    }

    #[test]
    fn zero_size_is_bumped_to_one() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
    }

    #[test]
    fn resolve_uses_defaults_and_clamps() {
        assert_eq!(resolve_page_request(None, None, 20, 100), PageRequest::new(0, 20));
        assert_eq!(resolve_page_request(Some(2), Some(500), 20, 100), PageRequest::new(2, 100));
        assert_eq!(resolve_page_request(Some(1), Some(0), 20, 100), PageRequest::new(1, 1));
    }

    #[test]
    fn map_keeps_totals() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 4).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
    }
}
