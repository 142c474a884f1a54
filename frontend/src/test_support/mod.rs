#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

pub mod tokens;

#[cfg(test)]
pub mod helpers {
    use crate::session::Role;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn provide_auth(role: Option<Role>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState { role });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
