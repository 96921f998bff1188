use std::future::Future;

use super::UserCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};

/// Everything the lookup chain managed to infer for a name. A `None` field
/// means the provider had no guess, not that a step failed.
#[derive(Debug, Default)]
pub(super) struct DemographicProfile {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

impl UserCommandService {
    /// Runs the lookup steps in a fixed order. The first failing step aborts
    /// the rest of the chain and the returned error names it; nothing from
    /// the aborted run is kept.
    pub(super) async fn run_enrichment(&self, name: &str) -> ApplicationResult<DemographicProfile> {
        let age = step("age", self.demographics.age_by_name(name)).await?;
        let gender = step("gender", self.demographics.gender_by_name(name)).await?;
        let nationality = step("nationality", self.demographics.nationality_by_name(name)).await?;

        Ok(DemographicProfile {
            age,
            gender,
            nationality,
        })
    }
}

async fn step<T>(
    name: &str,
    lookup: impl Future<Output = ApplicationResult<T>>,
) -> ApplicationResult<T> {
    lookup
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("enrichment step '{name}' failed: {err}")))
}
