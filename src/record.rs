//! Translation between planner endpoints and the API's native records.
use crate::endpoint::{Endpoint, RecordType};
use crate::wrd::types::NativeRecord;

/// Hostname denoting the zone apex.
pub const APEX: &str = "@";

const HERITAGE_PREFIX: &str = "\"heritage=";

/// Makes `name` relative to `zone`, using [`APEX`] for the zone itself.
pub fn relative_hostname(name: &str, zone: &str) -> String {
    let suffix = format!(".{zone}");
    let hostname = name.strip_suffix(suffix.as_str()).unwrap_or(name);
    if hostname == zone {
        APEX.to_string()
    } else {
        hostname.to_string()
    }
}

/// Inverse of [`relative_hostname`].
pub fn absolute_name(hostname: &str, zone: &str) -> String {
    if hostname == APEX {
        zone.to_string()
    } else {
        format!("{hostname}.{zone}")
    }
}

/// First target of the endpoint, with quotes stripped from TXT ownership
/// records since the API stores them unquoted.
fn normalized_target(ep: &Endpoint) -> String {
    let target = ep.targets.first().map(String::as_str).unwrap_or_default();
    if ep.record_type == RecordType::TXT && target.starts_with(HERITAGE_PREFIX) {
        target.trim_matches('"').to_string()
    } else {
        target.to_string()
    }
}

/// Looks up the id of the existing record with the same hostname, type and
/// destination. Returns an empty string when nothing matches.
pub fn resolve_id(hostname: &str, target: &str, rrtype: &str, existing: &[NativeRecord]) -> String {
    existing
        .iter()
        .find(|rec| rec.rrtype == rrtype && rec.destination == target && rec.hostname == hostname)
        .map(|rec| rec.id.clone())
        .unwrap_or_default()
}

/// Converts one endpoint of `zone` into a native record.
///
/// The endpoint must carry at least one target.
pub fn translate(
    ep: &Endpoint,
    zone: &str,
    existing: &[NativeRecord],
    delete_record: bool,
) -> NativeRecord {
    let hostname = relative_hostname(&ep.dns_name, zone);
    let destination = normalized_target(ep);
    let rrtype = ep.record_type.as_str();

    NativeRecord {
        id: resolve_id(&hostname, &destination, rrtype, existing),
        hostname,
        rrtype: rrtype.to_string(),
        destination,
        delete_record,
        ..Default::default()
    }
}

pub fn translate_all(
    endpoints: &[Endpoint],
    zone: &str,
    existing: &[NativeRecord],
    delete_record: bool,
) -> Vec<NativeRecord> {
    endpoints
        .iter()
        .map(|ep| translate(ep, zone, existing, delete_record))
        .collect()
}

/// Builds the endpoint reported for an existing record of `zone`.
pub fn to_endpoint(rec: &NativeRecord, zone: &str, ttl: u64) -> Endpoint {
    Endpoint::new(
        absolute_name(&rec.hostname, zone),
        rec.rrtype.as_str(),
        rec.destination.clone(),
    )
    .with_ttl(ttl)
}
