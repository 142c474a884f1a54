use crate::{
    api::{ApiClient, ApiError, Customer, UserProfile},
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    session::Role,
    state::auth::use_auth,
};
use leptos::*;

type ProfileRows = Vec<(String, String)>;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".into()
    } else {
        value.to_string()
    }
}

fn describe_user(profile: &UserProfile) -> ProfileRows {
    vec![
        ("Username".into(), profile.username.clone()),
        ("Email".into(), or_dash(profile.email.as_deref().unwrap_or_default())),
        (
            "Role".into(),
            or_dash(profile.role.map(Role::as_str).unwrap_or_default()),
        ),
    ]
}

fn describe_customer(customer: &Customer) -> ProfileRows {
    vec![
        ("Name".into(), customer.name.clone()),
        ("Email".into(), or_dash(&customer.email)),
        ("Phone".into(), or_dash(&customer.phone)),
        ("Address".into(), or_dash(&customer.address)),
        ("Status".into(), format!("{:?}", customer.status)),
    ]
}

/// Customers see their customer record; staff and admins their user account.
pub async fn load_profile(api: &ApiClient, role: Option<Role>) -> Result<ProfileRows, ApiError> {
    let rows = match role {
        Some(Role::Customer) => describe_customer(&api.current_customer().await?),
        _ => describe_user(&api.current_user().await?),
    };
    Ok(rows)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let profile = create_resource(
        move || auth.get().role,
        move |role| {
            let api = api.clone();
            async move { load_profile(&api, role).await }
        },
    );

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-4">"My profile"</h2>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || profile.get().map(|result| match result {
                    Ok(rows) => view! {
                        <dl class="grid grid-cols-2 gap-2 text-sm">
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <dt class="text-fg-muted">{label}</dt>
                                    <dd class="text-fg">{value}</dd>
                                })
                                .collect_view()}
                        </dl>
                    }.into_view(),
                    Err(err) => view! {
                        <ErrorMessage message=err.error />
                    }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CustomerStatus;

    fn rows(pairs: &[(&str, &str)]) -> ProfileRows {
        pairs
            .iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn user_rows_fill_missing_fields_with_dash() {
        let profile = UserProfile {
            username: "carol".into(),
            email: None,
            role: Some(Role::Staff),
        };
        assert_eq!(
            describe_user(&profile),
            rows(&[("Username", "carol"), ("Email", "-"), ("Role", "staff")])
        );
    }

    #[test]
    fn customer_rows_show_contact_details() {
        let customer = Customer {
            id: None,
            name: "Amina".into(),
            email: "amina@example.com".into(),
            phone: String::new(),
            address: "Arusha".into(),
            status: CustomerStatus::Active,
            total_invoices_paid: None,
        };
        assert_eq!(
            describe_customer(&customer),
            rows(&[
                ("Name", "Amina"),
                ("Email", "amina@example.com"),
                ("Phone", "-"),
                ("Address", "Arusha"),
                ("Status", "Active"),
            ])
        );
    }
}
