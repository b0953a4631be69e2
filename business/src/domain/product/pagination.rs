use super::errors::ProductError;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// A validated 0-based page index and a strictly positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Validates raw paging input. Absent values take the defaults
    /// (page 0, size 20). The resulting offset must fit a signed 64-bit
    /// store offset.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Result<Self, ProductError> {
        let page = page.unwrap_or(0);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE as i64);

        if page < 0 || size <= 0 {
            return Err(ProductError::InvalidPagination);
        }
        if page.checked_mul(size).is_none() {
            return Err(ProductError::InvalidPagination);
        }

        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        self.page * self.size
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: self.offset(),
            limit: Some(self.size),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Offset/limit pair handed to the store. A `None` limit fetches every
/// remaining row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: Option<u64>,
}

impl PageWindow {
    pub fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }

    /// Applies the window to an already ordered sequence.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let iter = items.into_iter().skip(skip);
        match self.limit {
            Some(limit) => iter
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => iter.collect(),
        }
    }
}

/// A window of ordered results plus the metadata needed to page through them.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_elements: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_elements,
            total_pages: total_elements.div_ceil(request.size),
            page: request.page,
            size: request.size,
        }
    }

    pub fn is_past_end(&self) -> bool {
        self.page.saturating_mul(self.size) >= self.total_elements
    }
}
