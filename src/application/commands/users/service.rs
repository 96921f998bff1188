use std::sync::Arc;

use crate::application::ports::enrichment::DemographicsProvider;
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) demographics: Arc<dyn DemographicsProvider>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        demographics: Arc<dyn DemographicsProvider>,
    ) -> Self {
        Self {
            user_repo,
            demographics,
        }
    }
}
