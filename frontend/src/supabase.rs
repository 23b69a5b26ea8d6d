//! Thin client for the hosted Supabase (PostgREST) tables the site writes to and reads from.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config;
use crate::error::SinkError;

pub const LEADS_TABLE: &str = "leads";
pub const CREDIT_REPAIR_LEADS_TABLE: &str = "credit_repair_leads";
pub const CONTACT_INQUIRIES_TABLE: &str = "contact_inquiries";
pub const TESTIMONIALS_TABLE: &str = "credit_repair_testimonials";

/// Insert-only destination for completed forms.
///
/// Futures from the browser fetch API are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait SubmissionSink {
    async fn insert(&self, table: &str, record: Value) -> Result<(), SinkError>;
}

#[derive(Deserialize)]
struct PostgrestError {
    message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_supabase_url(), config::get_supabase_anon_key())
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.anon_key.is_empty()
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn select_url(&self, table: &str, order_by: &str, ascending: bool) -> String {
        let direction = if ascending { "asc" } else { "desc" };
        format!(
            "{}?select=*&order={}.{}",
            self.table_url(table),
            order_by,
            direction
        )
    }

    fn authorize(&self, request: Request) -> Request {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }

    /// Every row of `table`, sorted on `order_by`.
    pub async fn select_ordered<T: DeserializeOwned>(
        &self,
        table: &str,
        order_by: &str,
        ascending: bool,
    ) -> Result<Vec<T>, SinkError> {
        if !self.is_configured() {
            return Err(SinkError::NotConfigured);
        }

        let response = self
            .authorize(Request::get(&self.select_url(table, order_by, ascending)))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SinkError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        let rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| SinkError::Decode(e.to_string()))?;
        info!("Fetched {} rows from {}", rows.len(), table);
        Ok(rows)
    }
}

async fn rejection(response: Response) -> SinkError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => error_message(&body),
        Err(e) => e.to_string(),
    };
    error!("Supabase rejected request with status {}: {}", status, message);
    SinkError::Rejected { status, message }
}

/// PostgREST puts a `message` field in its error bodies; anything else is passed through.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => err.message,
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait(?Send)]
impl SubmissionSink for SupabaseClient {
    async fn insert(&self, table: &str, record: Value) -> Result<(), SinkError> {
        if !self.is_configured() {
            return Err(SinkError::NotConfigured);
        }

        let request = self
            .authorize(Request::post(&self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(&Value::Array(vec![record]))
            .map_err(|e| SinkError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SinkError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }
        info!("Inserted record into {}", table);
        Ok(())
    }
}
