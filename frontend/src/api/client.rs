use std::rc::Rc;

use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::errors::GatewayError;
use crate::{
    config,
    session::CredentialStore,
    utils::navigation::{BrowserNavigator, Navigator},
};

/// HTTP client for the admin API. Every request goes out with the stored bearer
/// token; a 401 triggers one refresh and one replay of the original request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    credentials: CredentialStore,
    navigator: Rc<dyn Navigator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_parts(
            None,
            CredentialStore::browser_or_memory(),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_parts(
            Some(base_url.into()),
            CredentialStore::browser_or_memory(),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn with_parts(
        base_url: Option<String>,
        credentials: CredentialStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url,
            credentials,
            navigator,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        let base_url = self.resolved_base_url().await;
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }

    /// Sends the request produced by `build`, refreshing the access token and
    /// replaying the request at most once when the server answers 401.
    ///
    /// Non-401 responses are returned as-is, error statuses included. If the
    /// refresh cannot produce a usable token the session is cleared, the
    /// browser is sent to the login page and the caller gets
    /// [`GatewayError::SessionTerminated`].
    pub async fn send_with_refresh<F>(&self, build: F) -> Result<Response, GatewayError>
    where
        F: Fn() -> RequestBuilder,
    {
        let token = self.credentials.access_token();
        let response = self.dispatch(build(), token.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        log::debug!("401 from {}, refreshing access token", response.url().path());
        let access = match self.refresh_access_token().await {
            Ok(access) => access,
            Err(err) => {
                log::warn!("token refresh failed: {}", err);
                self.terminate_session();
                return Err(GatewayError::SessionTerminated);
            }
        };

        self.dispatch(build(), Some(&access)).await
    }

    async fn dispatch(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<Response, GatewayError> {
        let request = match token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };
        request.send().await.map_err(GatewayError::Network)
    }

    pub(crate) fn terminate_session(&self) {
        self.credentials.clear();
        self.navigator.redirect(config::LOGIN_PATH);
    }

    pub(crate) fn navigate(&self, path: &str) {
        self.navigator.redirect(path);
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, GatewayError> {
        if response.status().is_success() {
            response.json().await.map_err(GatewayError::Parse)
        } else {
            Err(Self::http_error(response).await)
        }
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), GatewayError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::http_error(response).await)
        }
    }

    async fn http_error(response: Response) -> GatewayError {
        let status = response.status();
        let body = response.json::<Value>().await.ok();
        GatewayError::Http { status, body }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.endpoint(path).await;
        let response = self.send_with_refresh(|| self.client.get(&url)).await?;
        Self::read_json(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self
            .send_with_refresh(|| self.client.post(&url).json(body))
            .await?;
        Self::read_json(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path).await;
        let response = self
            .send_with_refresh(|| self.client.put(&url).json(body))
            .await?;
        Self::read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let url = self.endpoint(path).await;
        let response = self.send_with_refresh(|| self.client.delete(&url)).await?;
        Self::expect_success(response).await
    }
}
