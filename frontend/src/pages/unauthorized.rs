use crate::{config::LOGIN_PATH, state::auth::use_auth};
use leptos::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let home = move || {
        auth.get()
            .role
            .map(|role| role.landing_path())
            .unwrap_or(LOGIN_PATH)
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md text-center space-y-4">
                <h2 class="text-2xl font-bold text-gray-900">"Access denied"</h2>
                <p class="text-sm text-gray-600">
                    "Your account does not have permission to open this page."
                </p>
                <a href=home class="text-blue-600 hover:underline">"Go back"</a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::UnauthorizedPage;
    use crate::session::Role;
    use crate::test_support::ssr::render_as;
    use leptos::*;

    #[test]
    fn links_customers_back_to_their_profile() {
        let html = render_as(Some(Role::Customer), || view! { <UnauthorizedPage /> });
        assert!(html.contains("Access denied"));
        assert!(html.contains("/profile"));
    }
}
