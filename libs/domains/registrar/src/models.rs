use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Availability answer for a domain name.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainAvailability {
    pub domain_name: String,
    pub available: bool,
}

/// Registration request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDomain {
    #[validate(length(min = 1))]
    pub domain_name: String,
    #[validate(length(min = 1))]
    pub registrant: String,
}

/// Registration echo: input plus computed dates.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainRegistration {
    pub domain_name: String,
    pub registrant: String,
    pub registration_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
}

impl DomainRegistration {
    /// Registered now, expiring in exactly 365 days.
    pub fn register(input: RegisterDomain) -> Self {
        let now = Utc::now();
        Self {
            domain_name: input.domain_name,
            registrant: input.registrant,
            registration_date: now,
            expiration_date: now + Duration::days(365),
        }
    }
}
