use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::dto::users::UserDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validated pagination window. The repository and the statement builders
/// pass the integers through untouched; the bounds are enforced here, where
/// the request is decoded.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(offset: i64, limit: i64) -> ApplicationResult<Self> {
        if offset < 0 {
            return Err(ApplicationError::validation("offset must be non-negative"));
        }
        if limit <= 0 {
            return Err(ApplicationError::validation("limit must be positive"));
        }
        Ok(Self { offset, limit })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPage {
    pub offset: i64,
    pub limit: i64,
    pub items: Vec<UserDto>,
}

impl UserPage {
    pub fn new(window: PageWindow, items: Vec<UserDto>) -> Self {
        Self {
            offset: window.offset,
            limit: window.limit,
            items,
        }
    }
}
