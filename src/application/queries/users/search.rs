use std::collections::BTreeMap;

use super::UserQueryService;
use crate::{
    application::{
        dto::{PageWindow, UserPage},
        error::ApplicationResult,
    },
    domain::user::{FieldValue, FilterSpec},
};

pub struct SearchUsersQuery {
    pub offset: i64,
    pub limit: i64,
    pub filter: BTreeMap<String, Vec<FieldValue>>,
}

impl UserQueryService {
    /// Filtered listing over one pagination window. The window cuts the
    /// id-ordered record set first; the filter then narrows that window.
    pub async fn search(&self, query: SearchUsersQuery) -> ApplicationResult<UserPage> {
        let window = PageWindow::new(query.offset, query.limit)?;
        let filter = FilterSpec::new(query.filter)?;

        let users = self
            .user_repo
            .get_filtered(&filter, window.offset, window.limit)
            .await?;

        let items = users.into_iter().map(Into::into).collect();
        Ok(UserPage::new(window, items))
    }
}
