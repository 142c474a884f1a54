use super::{
    client::ApiClient,
    errors::{GatewayError, RefreshError},
    types::{
        LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, RegisterResponse,
        RegisteredUser, UserProfile,
    },
};
use crate::{
    config,
    session::{decoder, Identity, PersistenceScope, TokenPair},
    utils::time,
};

pub const LOGIN_ENDPOINT: &str = "/auth/login/";
pub const REFRESH_ENDPOINT: &str = "/auth/refresh/";
pub const REGISTER_ENDPOINT: &str = "/register/";
pub const CURRENT_USER_ENDPOINT: &str = "/users/me/";

impl ApiClient {
    /// Exchanges credentials for a token pair and stores it in the durable
    /// scope when `remember` is set, the ephemeral scope otherwise.
    ///
    /// Goes straight to the server: a 401 here means bad credentials, not an
    /// expired session.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<Identity, GatewayError> {
        let url = self.endpoint(LOGIN_ENDPOINT).await;
        let response = self
            .http_client()
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(GatewayError::Network)?;
        let pair: TokenPair = Self::read_json(response).await?;

        let identity = match decoder::decode(&pair.access) {
            Ok(identity) => identity,
            Err(err) => {
                log::warn!("login returned an unusable access token: {}", err);
                self.credentials().clear();
                return Err(err.into());
            }
        };

        self.credentials()
            .save(&pair, PersistenceScope::from_remember(remember));
        log::info!("signed in as {}", identity.role);
        Ok(identity)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, GatewayError> {
        request.validate()?;

        let url = self.endpoint(REGISTER_ENDPOINT).await;
        let response = self
            .http_client()
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(GatewayError::Network)?;
        let registered: RegisterResponse = Self::read_json(response).await?;

        self.credentials().save(
            &TokenPair {
                access: registered.access,
                refresh: Some(registered.refresh),
            },
            PersistenceScope::Durable,
        );
        Ok(registered.user)
    }

    /// Drops the local session and returns to the login page.
    pub fn logout(&self) {
        self.credentials().clear();
        self.navigate(config::LOGIN_PATH);
    }

    pub async fn current_user(&self) -> Result<UserProfile, GatewayError> {
        self.get_json(CURRENT_USER_ENDPOINT).await
    }

    /// Mints a new access token from the stored refresh token and persists it
    /// into whichever scope currently holds the session.
    pub(crate) async fn refresh_access_token(&self) -> Result<String, RefreshError> {
        let refresh = self
            .credentials()
            .refresh_token()
            .ok_or(RefreshError::MissingRefreshToken)?;
        let scope = self
            .credentials()
            .active_scope()
            .unwrap_or(PersistenceScope::Ephemeral);

        let url = self.endpoint(REFRESH_ENDPOINT).await;
        let response = self
            .http_client()
            .post(&url)
            .json(&RefreshRequest { refresh: &refresh })
            .send()
            .await
            .map_err(RefreshError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RefreshError::Rejected(status));
        }
        let body: RefreshResponse = response.json().await.map_err(RefreshError::Parse)?;
        let access = body
            .access
            .filter(|access| !access.is_empty())
            .ok_or(RefreshError::MissingAccessToken)?;

        if decoder::decode(&access)?.is_expired_at(time::now_ms()) {
            return Err(RefreshError::Expired);
        }

        self.credentials().save(
            &TokenPair {
                access: access.clone(),
                refresh: body.refresh,
            },
            scope,
        );
        log::debug!("access token refreshed into {:?} scope", scope);
        Ok(access)
    }
}
