//! Zone attribution of endpoints.
use std::collections::BTreeMap;

use tracing::debug;

use crate::endpoint::{ChangeKind, Changes};

/// Returns the longest zone that is a suffix of `name`, if any.
pub fn match_zone<'a, S: AsRef<str>>(name: &str, zones: &'a [S]) -> Option<&'a str> {
    zones
        .iter()
        .map(|zone| zone.as_ref())
        .filter(|zone| name.ends_with(*zone))
        .max_by_key(|zone| zone.len())
}

/// Splits a global change batch into one batch per zone.
///
/// Every zone gets an entry, even if it receives no endpoints. Endpoints that
/// match no zone are dropped. Order within each category is preserved.
pub fn partition<S: AsRef<str>>(changes: &Changes, zones: &[S]) -> BTreeMap<String, Changes> {
    let mut per_zone: BTreeMap<String, Changes> = zones
        .iter()
        .map(|zone| {
            debug!(zone = zone.as_ref(), "zone detected");
            (zone.as_ref().to_string(), Changes::default())
        })
        .collect();

    for kind in ChangeKind::ALL {
        for ep in changes.get(kind) {
            let Some(zone) = match_zone(&ep.dns_name, zones) else {
                debug!(change = %kind, endpoint = %ep, "ignoring change since it did not match any zone");
                continue;
            };
            debug!(change = %kind, endpoint = %ep, zone, "planning");
            if let Some(zone_changes) = per_zone.get_mut(zone) {
                zone_changes.get_mut(kind).push(ep.clone());
            }
        }
    }

    per_zone
}
