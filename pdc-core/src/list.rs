use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::id::GroupId;

const fn default_page() -> u64 {
    1
}

#[derive(Debug, Deserialize, ToSchema, IntoParams, PartialEq, Eq, Copy, Clone)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u64,
    pub page_size: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: None,
        }
    }
}

impl Pagination {
    /// Cuts one page out of an already-filtered, already-ordered result set.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let Some(page_size) = self.page_size else {
            return items;
        };
        let skip = (self.page.max(1) - 1).saturating_mul(page_size) as usize;
        items
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect()
    }
}

#[derive(Debug, Deserialize, ToSchema, PartialEq, Eq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ProductSort {
    /// Ascending by the product's type name.
    Type,
}

/// Exact-match filters accepted by the product list endpoint.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct ProductFilter {
    /// Only products that belong to this group.
    pub group: Option<GroupId>,
    /// Only products owned by this organization.
    pub source_organization: Option<String>,
    pub sort: Option<ProductSort>,
}

#[derive(Debug, Default)]
pub struct ProductCriteria {
    pub pagination: Pagination,
    pub filter: ProductFilter,
}

/// Filter shared by the supplier and catalogue list endpoints.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct OrgFilter {
    pub source_organization: Option<String>,
}

#[derive(Debug, Default)]
pub struct OrgCriteria {
    pub pagination: Pagination,
    pub source_organization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_page_size_means_everything() {
        let pagination = Pagination {
            page: 3,
            page_size: None,
        };
        assert_eq!(vec![1, 2, 3], pagination.slice(vec![1, 2, 3]));
    }

    #[test]
    fn pages_are_one_based() {
        let first = Pagination {
            page: 1,
            page_size: Some(2),
        };
        let second = Pagination {
            page: 2,
            page_size: Some(2),
        };
        assert_eq!(vec![1, 2], first.slice(vec![1, 2, 3, 4, 5]));
        assert_eq!(vec![3, 4], second.slice(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let pagination = Pagination {
            page: 9,
            page_size: Some(10),
        };
        assert!(pagination.slice(vec![1, 2, 3]).is_empty());
    }
}
