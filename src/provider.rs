//! Reconciliation of planned endpoint changes against the DNS API.
//!
//! A [`WrdProvider`] answers the two halves of the external-dns provider
//! contract:
//!
//! - [`WrdProvider::records`] exports every record of every allow-listed zone
//!   as endpoints. Any zone info or listing failure aborts the export.
//! - [`WrdProvider::apply_changes`] partitions a change batch by zone and, per
//!   zone, submits the translated records in the order
//!   updateOld, delete, create, updateNew. The first failed submission aborts
//!   the whole cycle; stages and zones already applied are not rolled back.
//!   A zone whose records cannot be listed is treated as empty.
//!
//! Each cycle holds one API session, released before returning.
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use crate::config::{DomainFilter, ProviderConfig};
use crate::endpoint::{ChangeKind, Changes, Endpoint};
use crate::error::ProviderError;
use crate::record::{to_endpoint, translate_all};
use crate::wrd::types::NativeRecord;
use crate::wrd::{ApiError, DnsApi, Session};
use crate::zone::{match_zone, partition};

/// Endpoints planned by the most recent apply cycle, served by
/// [`WrdProvider::records`] in dry-run mode.
#[derive(Debug, Default)]
pub struct PlanCache {
    endpoints: Mutex<Vec<Endpoint>>,
}

impl PlanCache {
    fn lock(&self) -> MutexGuard<'_, Vec<Endpoint>> {
        // the guarded Vec stays consistent even if a holder panicked
        self.endpoints
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn replace(&self, endpoints: Vec<Endpoint>) {
        *self.lock() = endpoints;
    }

    pub fn snapshot(&self) -> Vec<Endpoint> {
        self.lock().clone()
    }
}

/// Current state of a zone as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub ttl: u64,
    pub records: Vec<NativeRecord>,
}

pub struct WrdProvider {
    config: ProviderConfig,
    api: Box<dyn DnsApi>,
    plan_cache: PlanCache,
}

impl WrdProvider {
    pub fn new(config: ProviderConfig, api: Box<dyn DnsApi>) -> Self {
        Self {
            config,
            api,
            plan_cache: PlanCache::default(),
        }
    }

    pub fn domain_filter(&self) -> &DomainFilter {
        &self.config.domain_filter
    }

    /// Delivers the records of all zones as endpoints.
    pub async fn records(&self) -> Result<Vec<Endpoint>, ProviderError> {
        if self.config.dry_run {
            debug!("dry run - skipping login");
            return Ok(self.plan_cache.snapshot());
        }

        let session = self.open_session().await?;
        let result = self.export_zones(&session).await;
        self.close_session(session).await;
        let endpoints = result?;

        for ep in &endpoints {
            debug!(endpoint = %ep, "endpoints collected");
        }
        Ok(endpoints)
    }

    async fn export_zones(&self, session: &Session) -> Result<Vec<Endpoint>, ProviderError> {
        let mut endpoints = Vec::new();
        for zone in self.config.domain_filter.zones() {
            let snapshot = self.read_zone(session, zone).await?;
            info!(zone = %zone, records = snapshot.records.len(), "got DNS records for domain");
            endpoints.extend(
                snapshot
                    .records
                    .iter()
                    .map(|rec| to_endpoint(rec, zone, snapshot.ttl)),
            );
        }
        Ok(endpoints)
    }

    /// Fetches the TTL and records of a zone. A zone without records yields
    /// an empty snapshot; every other failure is returned.
    pub async fn read_zone(
        &self,
        session: &Session,
        zone: &str,
    ) -> Result<ZoneSnapshot, ProviderError> {
        let info = self
            .api
            .info_dns_zone(session, zone)
            .await
            .map_err(|source| ProviderError::ZoneInfo {
                zone: zone.to_string(),
                source,
            })?;
        let ttl = parse_ttl(&info.ttl).ok_or_else(|| ProviderError::InvalidZoneTtl {
            zone: zone.to_string(),
            ttl: info.ttl.clone(),
        })?;

        let records = self
            .list_records(session, zone)
            .await
            .map_err(|source| ProviderError::ZoneRecords {
                zone: zone.to_string(),
                source,
            })?;

        Ok(ZoneSnapshot { ttl, records })
    }

    async fn list_records(
        &self,
        session: &Session,
        zone: &str,
    ) -> Result<Vec<NativeRecord>, ApiError> {
        match self.api.info_dns_records(session, zone).await {
            Ok(records) => Ok(records),
            Err(err) if err.is_empty_zone() => {
                debug!(zone = %zone, error = %err, "no records exist");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Records used to resolve ids while applying; a listing failure only
    /// means every change is submitted without an id.
    async fn current_records(&self, session: &Session, zone: &str) -> Vec<NativeRecord> {
        match self.list_records(session, zone).await {
            Ok(records) => records,
            Err(err) => {
                error!(zone = %zone, error = %err, "unable to get DNS records for domain");
                Vec::new()
            }
        }
    }

    /// Applies a batch of changes across all zones.
    pub async fn apply_changes(&self, changes: &Changes) -> Result<(), ProviderError> {
        if !changes.has_changes() {
            debug!("no changes detected - nothing to do");
            return Ok(());
        }

        let zones = self.config.domain_filter.zones();
        let per_zone = partition(changes, zones);
        self.plan_cache.replace(
            changes
                .create
                .iter()
                .filter(|ep| match_zone(&ep.dns_name, zones).is_some())
                .cloned()
                .collect(),
        );

        if self.config.dry_run {
            info!(changes = changes.len(), "dry run - not applying changes");
            return Ok(());
        }

        let session = self.open_session().await?;
        let result = self.apply_zones(&session, &per_zone).await;
        self.close_session(session).await;
        result?;

        debug!("update completed");
        Ok(())
    }

    async fn apply_zones(
        &self,
        session: &Session,
        per_zone: &BTreeMap<String, Changes>,
    ) -> Result<(), ProviderError> {
        for (zone, changes) in per_zone {
            if !changes.has_changes() {
                debug!(zone = %zone, "no changes for zone");
                continue;
            }
            self.apply_zone(session, zone, changes).await?;
        }
        Ok(())
    }

    /// Reads the zone, then submits each non-empty stage in apply order,
    /// stopping at the first failure.
    pub async fn apply_zone(
        &self,
        session: &Session,
        zone: &str,
        changes: &Changes,
    ) -> Result<(), ProviderError> {
        let existing = self.current_records(session, zone).await;

        let stages: Vec<(ChangeKind, Vec<NativeRecord>)> = ChangeKind::APPLY_ORDER
            .into_iter()
            .map(|kind| {
                let records =
                    translate_all(changes.get(kind), zone, &existing, kind.marks_deletion());
                (kind, records)
            })
            .collect();

        for (kind, records) in stages {
            if records.is_empty() {
                continue;
            }
            debug!(zone = %zone, stage = %kind, records = records.len(), "submitting records");
            self.api
                .update_dns_records(session, zone, &records)
                .await
                .map_err(|source| ProviderError::Submission {
                    zone: zone.to_string(),
                    stage: kind,
                    source,
                })?;
        }
        Ok(())
    }

    async fn open_session(&self) -> Result<Session, ProviderError> {
        debug!("performing login to DNS API");
        let session = self.api.login().await.map_err(ProviderError::Session)?;
        debug!("successfully logged in to DNS API");
        Ok(session)
    }

    async fn close_session(&self, session: Session) {
        if let Err(err) = self.api.logout(&session).await {
            warn!(error = %err, "failed to log out of DNS API");
        }
    }
}

/// Plain decimal digits only: no sign, no surrounding whitespace.
fn parse_ttl(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
