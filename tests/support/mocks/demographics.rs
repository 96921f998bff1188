// tests/support/mocks/demographics.rs
use async_trait::async_trait;
use roster_core::application::error::{ApplicationError, ApplicationResult};
use roster_core::application::ports::enrichment::DemographicsProvider;

/// Scripted lookup provider: canned answers, optionally failing at one step.
pub struct ScriptedDemographics {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub failing_step: Option<&'static str>,
}

impl ScriptedDemographics {
    pub fn succeeding(age: i32, gender: &str, nationality: &str) -> Self {
        Self {
            age: Some(age),
            gender: Some(gender.to_string()),
            nationality: Some(nationality.to_string()),
            failing_step: None,
        }
    }

    pub fn failing_at(step: &'static str) -> Self {
        Self {
            age: Some(41),
            gender: Some("male".to_string()),
            nationality: Some("RU".to_string()),
            failing_step: Some(step),
        }
    }

    pub fn empty() -> Self {
        Self {
            age: None,
            gender: None,
            nationality: None,
            failing_step: None,
        }
    }

    fn check(&self, step: &'static str) -> ApplicationResult<()> {
        if self.failing_step == Some(step) {
            Err(ApplicationError::infrastructure(format!(
                "{step} lookup unavailable"
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DemographicsProvider for ScriptedDemographics {
    async fn age_by_name(&self, _name: &str) -> ApplicationResult<Option<i32>> {
        self.check("age")?;
        Ok(self.age)
    }

    async fn gender_by_name(&self, _name: &str) -> ApplicationResult<Option<String>> {
        self.check("gender")?;
        Ok(self.gender.clone())
    }

    async fn nationality_by_name(&self, _name: &str) -> ApplicationResult<Option<String>> {
        self.check("nationality")?;
        Ok(self.nationality.clone())
    }
}
