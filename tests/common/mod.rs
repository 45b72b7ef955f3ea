//! In-memory `DnsApi` that records every call.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wrd_dns::config::{DomainFilter, ProviderConfig};
use wrd_dns::provider::WrdProvider;
use wrd_dns::wrd::types::{NativeRecord, ZoneInfo};
use wrd_dns::wrd::{ApiError, DnsApi, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login,
    Logout,
    InfoZone(String),
    ListRecords(String),
    Update(String, Vec<NativeRecord>),
}

#[derive(Default)]
pub struct FakeState {
    pub calls: Vec<Call>,
    pub ttls: HashMap<String, String>,
    pub records: HashMap<String, Vec<NativeRecord>>,
    pub list_error_codes: HashMap<String, u32>,
    pub failing_update_zones: HashSet<String>,
    pub login_fails: bool,
    pub logout_fails: bool,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn with_zone(self, zone: &str, ttl: &str, records: Vec<NativeRecord>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.ttls.insert(zone.to_string(), ttl.to_string());
            state.records.insert(zone.to_string(), records);
        }
        self
    }

    pub fn with_list_error(self, zone: &str, code: u32) -> Self {
        self.state
            .lock()
            .unwrap()
            .list_error_codes
            .insert(zone.to_string(), code);
        self
    }

    pub fn with_failing_updates(self, zone: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_update_zones
            .insert(zone.to_string());
        self
    }

    pub fn with_failing_login(self) -> Self {
        self.state.lock().unwrap().login_fails = true;
        self
    }

    pub fn with_failing_logout(self) -> Self {
        self.state.lock().unwrap().logout_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn updates(&self) -> Vec<(String, Vec<NativeRecord>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update(zone, records) => Some((zone, records)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

fn status_error(action: &str, code: u32) -> ApiError {
    ApiError::Status {
        action: action.to_string(),
        status: "error".to_string(),
        code,
        message: "fake failure".to_string(),
    }
}

#[async_trait]
impl DnsApi for FakeApi {
    async fn login(&self) -> Result<Session, ApiError> {
        self.record(Call::Login);
        if self.state.lock().unwrap().login_fails {
            return Err(status_error("login", 4013));
        }
        Ok(Session::new("fake-session"))
    }

    async fn logout(&self, _session: &Session) -> Result<(), ApiError> {
        self.record(Call::Logout);
        if self.state.lock().unwrap().logout_fails {
            return Err(status_error("logout", 4013));
        }
        Ok(())
    }

    async fn info_dns_zone(&self, _session: &Session, zone: &str) -> Result<ZoneInfo, ApiError> {
        self.record(Call::InfoZone(zone.to_string()));
        let state = self.state.lock().unwrap();
        let ttl = state
            .ttls
            .get(zone)
            .cloned()
            .ok_or_else(|| status_error("infoDnsZone", 5028))?;
        Ok(ZoneInfo {
            name: zone.to_string(),
            ttl,
            ..Default::default()
        })
    }

    async fn info_dns_records(
        &self,
        _session: &Session,
        zone: &str,
    ) -> Result<Vec<NativeRecord>, ApiError> {
        self.record(Call::ListRecords(zone.to_string()));
        let state = self.state.lock().unwrap();
        if let Some(code) = state.list_error_codes.get(zone) {
            return Err(status_error("infoDnsRecords", *code));
        }
        Ok(state.records.get(zone).cloned().unwrap_or_default())
    }

    async fn update_dns_records(
        &self,
        _session: &Session,
        zone: &str,
        records: &[NativeRecord],
    ) -> Result<(), ApiError> {
        self.record(Call::Update(zone.to_string(), records.to_vec()));
        if self.state.lock().unwrap().failing_update_zones.contains(zone) {
            return Err(status_error("updateDnsRecords", 4001));
        }
        Ok(())
    }
}

pub fn provider(zones: &[&str], dry_run: u32, api: &FakeApi) -> WrdProvider {
    let filter = DomainFilter::new(zones).unwrap();
    WrdProvider::new(ProviderConfig::new(filter, dry_run), Box::new(api.clone()))
}

pub fn native(id: &str, hostname: &str, rrtype: &str, destination: &str) -> NativeRecord {
    NativeRecord {
        id: id.to_string(),
        hostname: hostname.to_string(),
        rrtype: rrtype.to_string(),
        destination: destination.to_string(),
        ..Default::default()
    }
}
