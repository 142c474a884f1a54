use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{Access, RequireAccess},
    pages::{
        dashboard::DashboardPage,
        login::LoginPage,
        profile::ProfilePage,
        resources::{ResourcePage, Section},
        unauthorized::UnauthorizedPage,
    },
    session::role::ADMIN_OR_STAFF,
    state::auth::AuthProvider,
};

/// Access level of every routed path.
pub const ROUTES: &[(&str, Access)] = &[
    ("/login", Access::Public),
    ("/unauthorized", Access::Public),
    ("/profile", Access::Authenticated),
    ("/dashboard", Access::Roles(ADMIN_OR_STAFF)),
    ("/vehicles", Access::Roles(ADMIN_OR_STAFF)),
    ("/customers", Access::Roles(ADMIN_OR_STAFF)),
    ("/invoices", Access::Roles(ADMIN_OR_STAFF)),
    ("/website-editor", Access::Roles(ADMIN_OR_STAFF)),
];

pub fn access_for(path: &str) -> Option<Access> {
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, access)| *access)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/unauthorized" view=UnauthorizedPage/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/vehicles" view=|| view! { <ProtectedSection section=Section::Vehicles/> }/>
                    <Route path="/customers" view=|| view! { <ProtectedSection section=Section::Customers/> }/>
                    <Route path="/invoices" view=|| view! { <ProtectedSection section=Section::Invoices/> }/>
                    <Route path="/website-editor" view=|| view! { <ProtectedSection section=Section::Website/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

fn guarded(path: &str) -> Access {
    access_for(path).unwrap_or(Access::Roles(ADMIN_OR_STAFF))
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAccess access=guarded("/profile")><ProfilePage/></RequireAccess> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAccess access=guarded("/dashboard")><DashboardPage/></RequireAccess> }
}

#[component]
fn ProtectedSection(section: Section) -> impl IntoView {
    view! {
        <RequireAccess access=guarded(section.path())>
            <ResourcePage section=section/>
        </RequireAccess>
    }
}
