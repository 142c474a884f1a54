use crate::{
    api::ApiClient,
    session::Role,
    state::auth::{self, use_auth},
};
use leptos::*;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const STAFF_LINKS: &[NavLink] = &[
    NavLink { href: "/dashboard", label: "Dashboard" },
    NavLink { href: "/vehicles", label: "Vehicles" },
    NavLink { href: "/customers", label: "Customers" },
    NavLink { href: "/invoices", label: "Invoices" },
    NavLink { href: "/website-editor", label: "Website" },
];

const CUSTOMER_LINKS: &[NavLink] = &[NavLink { href: "/profile", label: "Profile" }];

pub fn nav_links(role: Option<Role>) -> &'static [NavLink] {
    match role {
        Some(role) if role.is_admin_or_staff() => STAFF_LINKS,
        Some(_) => CUSTOMER_LINKS,
        None => &[],
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let on_logout = move |_| auth::logout(&api, set_auth);
    let role_label = move || {
        auth.get()
            .role
            .map(|role| role.as_str().to_string())
            .unwrap_or_default()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Vemacars Admin"</h1>
                    <nav class="flex items-center space-x-4">
                        {move || {
                            nav_links(auth.get().role)
                                .iter()
                                .map(|link| view! {
                                    <a href=link.href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                        {link.label}
                                    </a>
                                })
                                .collect_view()
                        }}
                        <Show when=move || auth.get().is_authenticated()>
                            <span class="text-xs uppercase text-fg-muted">{role_label}</span>
                            <button
                                on:click=on_logout.clone()
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium"
                            >
                                "Log out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_and_admin_share_management_links() {
        for role in [Role::Admin, Role::Staff] {
            let hrefs: Vec<_> = nav_links(Some(role)).iter().map(|l| l.href).collect();
            assert!(hrefs.contains(&"/vehicles"));
            assert!(hrefs.contains(&"/website-editor"));
        }
    }

    #[test]
    fn customers_only_see_profile() {
        let hrefs: Vec<_> = nav_links(Some(Role::Customer))
            .iter()
            .map(|l| l.href)
            .collect();
        assert_eq!(hrefs, vec!["/profile"]);
        assert!(nav_links(None).is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn header_renders_management_links_for_staff() {
        let html = render_as(Some(Role::Staff), || view! { <Header /> });
        assert!(html.contains("/invoices"));
        assert!(html.contains("Log out"));
    }

    #[test]
    fn header_hides_logout_when_signed_out() {
        let html = render_as(None, || view! { <Header /> });
        assert!(!html.contains("Log out"));
        assert!(!html.contains("/dashboard"));
    }

    #[test]
    fn layout_renders_children_and_feedback() {
        let html = render_as(Some(Role::Admin), || {
            view! {
                <Layout>
                    <LoadingSpinner />
                    <ErrorMessage message="failed to load" />
                    <div>"child"</div>
                </Layout>
            }
        });
        assert!(html.contains("child"));
        assert!(html.contains("animate-spin"));
        assert!(html.contains("failed to load"));
    }
}
