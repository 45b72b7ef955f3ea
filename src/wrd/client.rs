use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::*;
use super::{ApiError, DnsApi, Session};
use crate::config::ApiCredentials;

pub const DEFAULT_ENDPOINT: &str = "https://ccp.netcup.net/run/webservice/servers/endpoint.php?JSON";

#[derive(Clone)]
pub struct WrdClient {
    http: Client,
    endpoint: String, // single POST endpoint, the action goes in the body
    credentials: ApiCredentials,
}

impl WrdClient {
    pub fn new(endpoint: impl Into<String>, credentials: ApiCredentials) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            credentials,
        }
    }

    fn session_param<'a>(&'a self, session: &'a Session) -> SessionParam<'a> {
        SessionParam {
            customernumber: &self.credentials.customer_number,
            apikey: &self.credentials.api_key,
            apisessionid: session.id(),
        }
    }

    fn zone_param<'a>(&'a self, session: &'a Session, zone: &'a str) -> ZoneParam<'a> {
        ZoneParam {
            domainname: zone,
            customernumber: &self.credentials.customer_number,
            apikey: &self.credentials.api_key,
            apisessionid: session.id(),
        }
    }

    /// Posts one action and returns its response data once the API reports success.
    async fn call<P: Serialize>(
        &self,
        action: &str,
        param: P,
    ) -> Result<serde_json::Value, ApiError> {
        let body = ApiRequest { action, param };
        let res = self.http.post(&self.endpoint).json(&body).send().await?;
        if !res.status().is_success() {
            return Err(ApiError::UnexpectedStatus {
                action: action.to_string(),
                status: res.status(),
            });
        }

        let envelope = res.json::<ApiResponse>().await?;
        if envelope.status != STATUS_SUCCESS {
            return Err(ApiError::Status {
                action: action.to_string(),
                status: envelope.status,
                code: envelope.statuscode,
                message: envelope.longmessage,
            });
        }
        Ok(envelope.responsedata)
    }

    async fn call_decode<P: Serialize, T: DeserializeOwned>(
        &self,
        action: &str,
        param: P,
    ) -> Result<T, ApiError> {
        let data = self.call(action, param).await?;
        serde_json::from_value(data).map_err(|source| ApiError::Decode {
            action: action.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DnsApi for WrdClient {
    async fn login(&self) -> Result<Session, ApiError> {
        let param = LoginParam {
            customernumber: &self.credentials.customer_number,
            apikey: &self.credentials.api_key,
            apipassword: &self.credentials.api_password,
        };
        let data: LoginData = self.call_decode("login", param).await?;
        Ok(Session::new(data.apisessionid))
    }

    async fn logout(&self, session: &Session) -> Result<(), ApiError> {
        self.call("logout", self.session_param(session)).await?;
        Ok(())
    }

    async fn info_dns_zone(&self, session: &Session, zone: &str) -> Result<ZoneInfo, ApiError> {
        self.call_decode("infoDnsZone", self.zone_param(session, zone))
            .await
    }

    async fn info_dns_records(
        &self,
        session: &Session,
        zone: &str,
    ) -> Result<Vec<NativeRecord>, ApiError> {
        let set: RecordSet = self
            .call_decode("infoDnsRecords", self.zone_param(session, zone))
            .await?;
        Ok(set.dnsrecords)
    }

    async fn update_dns_records(
        &self,
        session: &Session,
        zone: &str,
        records: &[NativeRecord],
    ) -> Result<(), ApiError> {
        let param = UpdateRecordsParam {
            domainname: zone,
            customernumber: &self.credentials.customer_number,
            apikey: &self.credentials.api_key,
            apisessionid: session.id(),
            dnsrecordset: RecordSetRef { dnsrecords: records },
        };
        self.call("updateDnsRecords", param).await?;
        Ok(())
    }
}
