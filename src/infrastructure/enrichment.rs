// src/infrastructure/enrichment.rs
use std::time::Duration;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::enrichment::DemographicsProvider;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Demographics lookups backed by the public agify/genderize/nationalize
/// HTTP APIs. One request per trait, keyed by the bare first name.
pub struct HttpDemographicsProvider {
    client: reqwest::Client,
    agify_url: String,
    genderize_url: String,
    nationalize_url: String,
}

impl HttpDemographicsProvider {
    pub fn new(
        agify_url: impl Into<String>,
        genderize_url: impl Into<String>,
        nationalize_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            agify_url: agify_url.into(),
            genderize_url: genderize_url.into(),
            nationalize_url: nationalize_url.into(),
        })
    }

    async fn lookup<T: DeserializeOwned>(&self, url: &str, name: &str) -> ApplicationResult<T> {
        let response = self
            .client
            .get(url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!("lookup service unavailable: {err}"))
            })?;

        if !response.status().is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "lookup service returned {}",
                response.status()
            )));
        }

        response.json::<T>().await.map_err(|err| {
            ApplicationError::infrastructure(format!("invalid lookup response: {err}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct AgifyResponse {
    age: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GenderizeResponse {
    gender: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NationalizeResponse {
    #[serde(default)]
    country: Vec<CountryGuess>,
}

#[derive(Debug, Deserialize)]
struct CountryGuess {
    country_id: String,
    probability: f64,
}

#[async_trait]
impl DemographicsProvider for HttpDemographicsProvider {
    async fn age_by_name(&self, name: &str) -> ApplicationResult<Option<i32>> {
        let body: AgifyResponse = self.lookup(&self.agify_url, name).await?;
        Ok(body.age)
    }

    async fn gender_by_name(&self, name: &str) -> ApplicationResult<Option<String>> {
        let body: GenderizeResponse = self.lookup(&self.genderize_url, name).await?;
        Ok(body.gender)
    }

    async fn nationality_by_name(&self, name: &str) -> ApplicationResult<Option<String>> {
        let body: NationalizeResponse = self.lookup(&self.nationalize_url, name).await?;
        Ok(body
            .country
            .into_iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
            .map(|guess| guess.country_id))
    }
}
