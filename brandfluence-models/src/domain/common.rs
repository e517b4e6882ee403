use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PageParams {
    #[serde(
        default = "PageParams::page_default",
        deserialize_with = "deserialize_number_from_string"
    )]
    #[validate(range(min = 1, message = "page starts at 1"))]
    pub page: u32,
    #[serde(
        default = "PageParams::page_size_default",
        deserialize_with = "deserialize_number_from_string"
    )]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "page_size must be within 1..=100"))]
    pub page_size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: Self::page_default(),
            page_size: Self::page_size_default(),
        }
    }
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    fn page_default() -> u32 {
        DEFAULT_PAGE
    }

    fn page_size_default() -> u32 {
        DEFAULT_PAGE_SIZE
    }

    /// Clamps out-of-range values instead of rejecting them
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub pages: u32,
    pub records: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PageResult<T> {
    pub fn empty(params: PageParams) -> Self {
        Self {
            pages: 0,
            records: Vec::new(),
            total: 0,
            page: params.page,
            page_size: params.page_size,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            pages: self.pages,
            records: self.records.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Path segment carrying a single entity id
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PathId {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,
}

/// Overwrites `slot` only when the patch carries a value.
///
/// With `V = Option<T>` this gives tri-state semantics: absent leaves the
/// column untouched, `null` clears it.
#[inline]
pub(crate) fn assign<V>(slot: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(v) = value {
        *slot = ActiveValue::Set(v);
    }
}
