use crate::{
    components::layout::ErrorMessage,
    state::auth::{use_login_action, LoginForm},
};
use leptos::*;

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter your username".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember, set_remember) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let login_action = use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            set_error.set(Some(err.error));
        }
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        if let Err(msg) = validate_credentials(&form.username, &form.password) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        login_action.dispatch(form);
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    "Sign in to Vemacars"
                </h2>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <label for="username" class="sr-only">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 rounded-t-md sm:text-sm"
                            placeholder="Username"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 rounded-b-md sm:text-sm"
                            placeholder="Password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <label class="flex items-center text-sm text-gray-700">
                        <input
                            id="remember"
                            name="remember"
                            type="checkbox"
                            class="mr-2"
                            prop:checked=remember
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>

                    <Show when=move || error.get().is_some()>
                        <ErrorMessage message=error.get().unwrap_or_default() />
                    </Show>

                    <button
                        type="submit"
                        disabled=pending
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn credentials_require_username_and_password() {
        assert!(validate_credentials("  ", "secret").is_err());
        assert!(validate_credentials("alice", "").is_err());
        assert!(validate_credentials("alice", "secret").is_ok());
    }
}
