//! Endpoint and change-batch types exchanged with the external-dns planner.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// DNS record type of an endpoint.
///
/// Types outside the well-known set are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    A,
    #[allow(clippy::upper_case_acronyms)]
    AAAA,
    #[allow(clippy::upper_case_acronyms)]
    CNAME,
    #[allow(clippy::upper_case_acronyms)]
    TXT,
    MX,
    NS,
    #[allow(clippy::upper_case_acronyms)]
    SRV,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SRV => "SRV",
            RecordType::Other(other) => other,
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        match value {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "TXT" => RecordType::TXT,
            "MX" => RecordType::MX,
            "NS" => RecordType::NS,
            "SRV" => RecordType::SRV,
            other => RecordType::Other(other.to_string()),
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        RecordType::from(value.as_str())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A desired DNS name to target mapping, as supplied by the planner.
///
/// `targets` is expected to be non-empty; only the first target is used when
/// translating into provider records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub dns_name: String,
    #[serde(default)]
    pub targets: Vec<String>,
    pub record_type: RecordType,
    #[serde(rename = "recordTTL", default, skip_serializing_if = "Option::is_none")]
    pub record_ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_specific: Vec<ProviderSpecificProperty>,
}

/// Opaque provider-specific setting attached to an endpoint by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpecificProperty {
    pub name: String,
    pub value: String,
}

impl Endpoint {
    pub fn new(
        dns_name: impl Into<String>,
        record_type: impl Into<RecordType>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            dns_name: dns_name.into(),
            targets: vec![target.into()],
            record_type: record_type.into(),
            record_ttl: None,
            set_identifier: None,
            labels: BTreeMap::new(),
            provider_specific: Vec::new(),
        }
    }

    pub fn with_ttl(mut self, ttl: u64) -> Self {
        self.record_ttl = Some(ttl);
        self
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN {} {} {:?}",
            self.dns_name,
            self.record_ttl.unwrap_or_default(),
            self.record_type,
            self.set_identifier.as_deref().unwrap_or_default(),
            self.targets
        )
    }
}

/// One batch of planned changes, categorized the way the planner emits them.
///
/// Missing or `null` categories deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Changes {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub create: Vec<Endpoint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub update_old: Vec<Endpoint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub update_new: Vec<Endpoint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub delete: Vec<Endpoint>,
}

impl Changes {
    pub fn has_changes(&self) -> bool {
        !(self.create.is_empty()
            && self.update_old.is_empty()
            && self.update_new.is_empty()
            && self.delete.is_empty())
    }

    /// Total number of endpoints across all four categories.
    pub fn len(&self) -> usize {
        self.create.len() + self.update_old.len() + self.update_new.len() + self.delete.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_changes()
    }

    pub fn get(&self, kind: ChangeKind) -> &[Endpoint] {
        match kind {
            ChangeKind::Create => &self.create,
            ChangeKind::UpdateOld => &self.update_old,
            ChangeKind::UpdateNew => &self.update_new,
            ChangeKind::Delete => &self.delete,
        }
    }

    pub fn get_mut(&mut self, kind: ChangeKind) -> &mut Vec<Endpoint> {
        match kind {
            ChangeKind::Create => &mut self.create,
            ChangeKind::UpdateOld => &mut self.update_old,
            ChangeKind::UpdateNew => &mut self.update_new,
            ChangeKind::Delete => &mut self.delete,
        }
    }
}

/// Category of a planned change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Create,
    UpdateOld,
    UpdateNew,
    Delete,
}

impl ChangeKind {
    /// Order in which the planner lists categories.
    pub const ALL: [ChangeKind; 4] = [
        ChangeKind::Create,
        ChangeKind::UpdateOld,
        ChangeKind::UpdateNew,
        ChangeKind::Delete,
    ];

    /// Order in which categories are submitted to the DNS API.
    pub const APPLY_ORDER: [ChangeKind; 4] = [
        ChangeKind::UpdateOld,
        ChangeKind::Delete,
        ChangeKind::Create,
        ChangeKind::UpdateNew,
    ];

    /// Whether records of this category are submitted for deletion.
    pub fn marks_deletion(self) -> bool {
        matches!(self, ChangeKind::UpdateOld | ChangeKind::Delete)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeKind::Create => "create",
            ChangeKind::UpdateOld => "updateOld",
            ChangeKind::UpdateNew => "updateNew",
            ChangeKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Endpoint>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Endpoint>>::deserialize(deserializer)?.unwrap_or_default())
}
