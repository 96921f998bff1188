// src/application/ports/enrichment.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Lookup of demographic traits inferred from a first name. Each method maps
/// to one external provider call; `None` means the provider had no guess for
/// the name, which is not an error.
#[async_trait]
pub trait DemographicsProvider: Send + Sync {
    async fn age_by_name(&self, name: &str) -> ApplicationResult<Option<i32>>;

    async fn gender_by_name(&self, name: &str) -> ApplicationResult<Option<String>>;

    async fn nationality_by_name(&self, name: &str) -> ApplicationResult<Option<String>>;
}
