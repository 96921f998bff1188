use std::collections::BTreeMap;

use super::{enrich::DemographicProfile, UserCommandService};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{FieldValue, NewUser, PersonName, UpdateSpec, User},
};

pub struct CreateUserCommand {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
}

impl UserCommandService {
    /// Inserts the bare record, then runs the enrichment chain and persists
    /// whatever it inferred through the generic update path. A failed chain
    /// leaves the record exactly as inserted.
    pub async fn create(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let name = PersonName::new(command.name)?;
        let surname = PersonName::new(command.surname)?;
        let patronymic = command.patronymic.filter(|p| !p.trim().is_empty());

        let user = self
            .user_repo
            .insert(NewUser::new(name, surname, patronymic))
            .await?;

        match self.run_enrichment(user.name.as_str()).await {
            Ok(profile) => self.apply_profile(user, profile).await,
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "user created without enrichment");
                Ok(user.into())
            }
        }
    }

    async fn apply_profile(
        &self,
        user: User,
        profile: DemographicProfile,
    ) -> ApplicationResult<UserDto> {
        let mut changes = BTreeMap::new();
        if let Some(age) = profile.age {
            changes.insert("age".to_string(), FieldValue::Int(i64::from(age)));
        }
        if let Some(gender) = profile.gender {
            changes.insert("gender".to_string(), FieldValue::Text(gender));
        }
        if let Some(nationality) = profile.nationality {
            changes.insert("nationality".to_string(), FieldValue::Text(nationality));
        }
        if changes.is_empty() {
            return Ok(user.into());
        }

        let updates = UpdateSpec::new(changes)?;
        self.user_repo.update(user.id, &updates).await?;

        let refreshed = self.user_repo.find_by_id(user.id).await?;
        Ok(refreshed.unwrap_or(user).into())
    }
}
