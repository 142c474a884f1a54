use crate::{
    config::{LOGIN_PATH, UNAUTHORIZED_PATH},
    session::Role,
    state::auth::use_auth,
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl Decision {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some(LOGIN_PATH),
            Decision::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [Role]),
}

impl Access {
    pub fn decide(self, current_role: Option<Role>) -> Decision {
        match self {
            Access::Public => Decision::Allow,
            Access::Authenticated => authorize(None, current_role),
            Access::Roles(roles) => authorize(Some(roles), current_role),
        }
    }
}

/// Decides whether a signed-in (or anonymous) user may enter a protected region.
pub fn authorize(required_roles: Option<&[Role]>, current_role: Option<Role>) -> Decision {
    let Some(role) = current_role else {
        return Decision::RedirectToLogin;
    };
    match required_roles {
        Some(roles) if !roles.contains(&role) => Decision::RedirectToUnauthorized,
        _ => Decision::Allow,
    }
}

#[component]
pub fn RequireAccess(access: Access, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| access.decide(auth.get().role));
    create_effect(move |_| {
        if let Some(path) = decision.get().redirect_path() {
            navigation::redirect(path);
        }
    });
    view! {
        <Show when=move || decision.get() == Decision::Allow>
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{Access, RequireAccess};
    use crate::session::{role::ADMIN_OR_STAFF, Role};
    use crate::test_support::ssr::render_as;
    use leptos::*;

    fn render_guarded(role: Option<Role>, access: Access) -> String {
        render_as(role, move || {
            view! {
                <RequireAccess access=access>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAccess>
            }
        })
    }

    #[test]
    fn renders_children_for_permitted_role() {
        let html = render_guarded(Some(Role::Staff), Access::Roles(ADMIN_OR_STAFF));
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn hides_children_for_wrong_role() {
        let html = render_guarded(Some(Role::Customer), Access::Roles(ADMIN_OR_STAFF));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn hides_children_when_signed_out() {
        let html = render_guarded(None, Access::Authenticated);
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn public_access_renders_for_anyone() {
        let html = render_guarded(None, Access::Public);
        assert!(html.contains("protected-content"));
    }
}
