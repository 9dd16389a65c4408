use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Query parameters accepted by every paginated listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, String> {
        if page == 0 {
            return Err("page starts at 1".to_string());
        }
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(format!("size must be between 1 and {MAX_PAGE_SIZE}"));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TryFrom<PageParams> for PageRequest {
    type Error = String;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        PageRequest::new(
            params.page.unwrap_or(DEFAULT_PAGE),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Cut one page out of an already filtered and ordered result set.
    pub fn from_ordered<I>(items: I, request: &PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let all: Vec<T> = items.into_iter().collect();
        let total_elements = all.len() as u64;
        let content = all
            .into_iter()
            .skip(request.offset())
            .take(request.size() as usize)
            .collect();
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(request.size() as u64) as u32,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
