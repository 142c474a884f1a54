use std::fmt;

use chrono::NaiveDate;
use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::errors::GatewayError;
use crate::session::{Role, ValidationError};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub access: Option<String>,
    /// Present when the server rotates refresh tokens.
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("username", self.username.trim()),
            ("email", self.email.trim()),
            ("password", self.password.as_str()),
            ("password2", self.password2.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField { field: *field });
        }
        if self.password != self.password2 {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub access: String,
    pub refresh: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Primary keys come back as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(id) => write!(f, "{}", id),
            ResourceId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Number(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Text(id.to_string())
    }
}

/// List endpoints answer either with a bare array or with a paginated envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Items(Vec<T>),
    Page(Page<T>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Number of records the collection holds, not just the ones on this page.
    pub fn total(&self) -> usize {
        match self {
            ListResponse::Items(items) => items.len(),
            ListResponse::Page(page) => page
                .count
                .and_then(|count| usize::try_from(count).ok())
                .unwrap_or(page.results.len()),
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Items(items) => items,
            ListResponse::Page(page) => page.results,
        }
    }
}

/// Decimal fields are serialized as strings by the backend.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    Booked,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarImage {
    pub id: ResourceId,
    pub image: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub name: String,
    pub car_type: String,
    pub fuel_type: String,
    pub transmission: String,
    pub seats: u32,
    pub location: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price_per_day: f64,
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing)]
    pub images: Vec<CarImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Dormant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub status: CustomerStatus,
    #[serde(default, skip_serializing)]
    pub total_invoices_paid: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub invoice_no: String,
    /// Either a customer id or an embedded `{ "name": ... }` summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Value>,
    #[serde(deserialize_with = "number_or_string")]
    pub total_amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub title: String,
    /// Comma separated selling points.
    #[serde(default)]
    pub ticks: String,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default, skip_serializing)]
    pub background_image: Option<String>,
}

impl HeroSection {
    pub fn tick_list(&self) -> Vec<&str> {
        self.ticks
            .split(',')
            .map(str::trim)
            .filter(|tick| !tick.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Network(_) => Self::request_failed(err.to_string()),
            GatewayError::Http { status, ref body } => Self {
                error: err
                    .server_message()
                    .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
                code: format!("HTTP_{}", status.as_u16()),
                details: body.clone(),
            },
            GatewayError::SessionTerminated => Self {
                error: "Your session has ended. Please sign in again.".into(),
                code: "SESSION_TERMINATED".into(),
                details: None,
            },
            GatewayError::Parse(_) => Self::unknown(err.to_string()),
            GatewayError::Decode(_) => Self {
                error: err.to_string(),
                code: "INVALID_TOKEN".into(),
                details: None,
            },
            GatewayError::Validation(ref inner) => Self::validation(inner.to_string()),
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("invalid").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("offline").code, "REQUEST_FAILED");
    }

    #[test]
    fn session_terminated_maps_to_dedicated_code() {
        let error: ApiError = GatewayError::SessionTerminated.into();
        assert_eq!(error.code, "SESSION_TERMINATED");
    }

    #[test]
    fn validation_failures_map_to_validation_code() {
        let error: ApiError = GatewayError::Validation(ValidationError::PasswordMismatch).into();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.error, "passwords do not match");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}
