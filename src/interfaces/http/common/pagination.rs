//! Page query parameters and page response body

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::PaginationConfig;
use crate::shared::{resolve_page_request, Page, PageRequest};

/// `?page=&size=` query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index. Default: 0
    pub page: Option<u64>,
    /// Items per page. Default: 20, capped at 100
    pub size: Option<u64>,
}

impl PageParams {
    pub fn resolve(&self, config: &PaginationConfig) -> PageRequest {
        resolve_page_request(
            self.page,
            self.size,
            config.default_page_size,
            config.max_page_size,
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    /// Items across all pages
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn from_page<D>(page: Page<D>) -> Self
    where
        T: From<D>,
    {
        let page = page.map(T::from);
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}
