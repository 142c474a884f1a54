use crate::{
    api::{ApiClient, ApiError},
    session::{decoder, CredentialStore, Role},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub role: Option<Role>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Role of the stored session, if there still is one.
///
/// An expired access token only counts when a refresh token can renew it.
pub fn resolve_role(credentials: &CredentialStore) -> Option<Role> {
    let access = credentials.access_token()?;
    if decoder::is_expired(&access) && credentials.refresh_token().is_none() {
        return None;
    }
    credentials
        .cached_role()
        .or_else(|| decoder::decode(&access).ok().map(|identity| identity.role))
}

fn create_auth_context() -> AuthContext {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let role = resolve_role(api_client.credentials());
    log::debug!("restored session role: {:?}", role);
    create_signal(AuthState { role })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    api: &ApiClient,
    form: LoginForm,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Role, ApiError> {
    let identity = api
        .login(form.username.trim(), &form.password, form.remember)
        .await
        .map_err(|err| {
            set_auth_state.update(|state| state.role = None);
            ApiError::from(err)
        })?;
    set_auth_state.update(|state| state.role = Some(identity.role));
    api.navigate(identity.role.landing_path());
    Ok(identity.role)
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| state.role = None);
    api.logout();
}

pub fn use_login_action() -> Action<LoginForm, Result<Role, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |form: &LoginForm| {
        let form = form.clone();
        let api = api.clone();
        async move { login_request(&api, form, set_auth).await }
    })
}
