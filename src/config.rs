use std::collections::HashSet;

use crate::error::ConfigError;
use crate::validation::validate_zone_name;

/// Ordered allow-list of zones the provider may touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFilter {
    zones: Vec<String>,
}

impl DomainFilter {
    /// Normalizes each entry (trimmed, lowercase, no trailing dot) and skips
    /// blank ones. Fails if nothing is left, or on invalid or duplicate zones.
    pub fn new<I, S>(zones: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for zone in zones {
            let zone = zone.as_ref().trim().trim_end_matches('.').to_ascii_lowercase();
            if zone.is_empty() {
                continue;
            }
            validate_zone_name(&zone).map_err(|source| ConfigError::InvalidZone {
                zone: zone.clone(),
                source,
            })?;
            if !seen.insert(zone.clone()) {
                return Err(ConfigError::DuplicateZone(zone));
            }
            normalized.push(zone);
        }

        if normalized.is_empty() {
            return Err(ConfigError::EmptyDomainFilter);
        }

        Ok(Self { zones: normalized })
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub domain_filter: DomainFilter,
    /// When set, nothing is sent to the DNS API.
    pub dry_run: bool,
}

impl ProviderConfig {
    /// `dry_run` follows the CLI convention: any non-zero value enables it.
    pub fn new(domain_filter: DomainFilter, dry_run: u32) -> Self {
        Self {
            domain_filter,
            dry_run: dry_run > 0,
        }
    }
}

/// Credentials for the session-based DNS API.
#[derive(Clone)]
pub struct ApiCredentials {
    pub customer_number: String,
    pub api_key: String,
    pub api_password: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("customer_number", &self.customer_number)
            .field("api_key", &"<redacted>")
            .field("api_password", &"<redacted>")
            .finish()
    }
}
