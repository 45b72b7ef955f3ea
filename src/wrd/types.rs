use serde::{Deserialize, Serialize};

/// Status string of a successful action.
pub const STATUS_SUCCESS: &str = "success";
/// Status string of a failed action.
pub const STATUS_ERROR: &str = "error";
/// Status code reported by `infoDnsRecords` when a zone holds no records.
pub const CODE_NO_RECORDS: u32 = 5029;

/// A DNS record as the API stores it.
///
/// `hostname` is relative to the zone ("@" for the apex). `id` is assigned by
/// the API and is empty for records that do not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeRecord {
    #[serde(default)]
    pub id: String,
    pub hostname: String,
    #[serde(rename = "type")]
    pub rrtype: String,
    #[serde(default)]
    pub priority: String,
    pub destination: String,
    #[serde(rename = "deleterecord", default)]
    pub delete_record: bool,
    #[serde(default)]
    pub state: String,
}

/// `infoDnsZone` response data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub name: String,
    pub ttl: String, // decimal seconds, e.g. "86400"
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub refresh: String,
    #[serde(default)]
    pub retry: String,
    #[serde(default)]
    pub expire: String,
    #[serde(default)]
    pub dnssecstatus: bool,
}

/// `infoDnsRecords` response data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub dnsrecords: Vec<NativeRecord>,
}

#[derive(Debug, Serialize)]
pub struct RecordSetRef<'a> {
    pub dnsrecords: &'a [NativeRecord],
}

#[derive(Debug, Serialize)]
pub struct ApiRequest<'a, P: Serialize> {
    pub action: &'a str,
    pub param: P,
}

#[derive(Debug, Serialize)]
pub struct LoginParam<'a> {
    pub customernumber: &'a str,
    pub apikey: &'a str,
    pub apipassword: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SessionParam<'a> {
    pub customernumber: &'a str,
    pub apikey: &'a str,
    pub apisessionid: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ZoneParam<'a> {
    pub domainname: &'a str,
    pub customernumber: &'a str,
    pub apikey: &'a str,
    pub apisessionid: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateRecordsParam<'a> {
    pub domainname: &'a str,
    pub customernumber: &'a str,
    pub apikey: &'a str,
    pub apisessionid: &'a str,
    pub dnsrecordset: RecordSetRef<'a>,
}

/// Response envelope shared by every action.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub serverrequestid: String,
    #[serde(default)]
    pub clientrequestid: String,
    #[serde(default)]
    pub action: String,
    pub status: String,
    pub statuscode: u32,
    #[serde(default)]
    pub shortmessage: String,
    #[serde(default)]
    pub longmessage: String,
    // "" when the action returns nothing
    #[serde(default)]
    pub responsedata: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub apisessionid: String,
}
