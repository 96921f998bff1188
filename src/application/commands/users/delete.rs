use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    /// Deleting an id that is already gone is a no-op, so the operation is
    /// idempotent from the caller's point of view.
    pub async fn delete(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let id = UserId::new(command.user_id)?;
        self.user_repo.delete(id).await?;
        Ok(())
    }
}
