// src/application/ports/mod.rs
pub mod enrichment;

pub type DemographicsProviderPort = dyn enrichment::DemographicsProvider;
