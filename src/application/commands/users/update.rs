use std::collections::BTreeMap;

use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{FieldValue, UpdateSpec, UserId},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub changes: BTreeMap<String, FieldValue>,
}

impl UserCommandService {
    pub async fn update(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.user_id)?;
        let updates = UpdateSpec::new(command.changes)?;

        if !self.user_repo.exists(id).await? {
            return Err(ApplicationError::not_found(format!(
                "user {id} does not exist"
            )));
        }

        self.user_repo.update(id, &updates).await?;

        self.user_repo
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("user {id} does not exist")))
    }
}
