use crate::{
    api::{ApiClient, ApiError},
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    session::Role,
    state::auth::use_auth,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Vehicles,
    Customers,
    Invoices,
    Website,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Vehicles,
        Section::Customers,
        Section::Invoices,
        Section::Website,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Vehicles => "Vehicles",
            Section::Customers => "Customers",
            Section::Invoices => "Invoices",
            Section::Website => "Website",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Section::Vehicles => "/vehicles",
            Section::Customers => "/customers",
            Section::Invoices => "/invoices",
            Section::Website => "/website-editor",
        }
    }
}

/// One line per record, ready to render.
pub async fn load_rows(api: &ApiClient, section: Section) -> Result<Vec<String>, ApiError> {
    let rows = match section {
        Section::Vehicles => api
            .list_vehicles()
            .await?
            .into_iter()
            .map(|v| format!("{} · {} · {:.2}/day · {:?}", v.name, v.location, v.price_per_day, v.status))
            .collect(),
        Section::Customers => api
            .list_customers()
            .await?
            .into_iter()
            .map(|c| format!("{} · {} · {:?}", c.name, c.email, c.status))
            .collect(),
        Section::Invoices => api
            .list_invoices()
            .await?
            .into_iter()
            .map(|i| format!("{} · {:.2} · due {} · {:?}", i.invoice_no, i.total_amount, i.due_date, i.status))
            .collect(),
        Section::Website => {
            let hero = api.hero_section().await?;
            let mut rows = vec![format!("Hero: {}", hero.title)];
            rows.extend(
                api.list_blog_posts()
                    .await?
                    .into_iter()
                    .map(|post| format!("Blog: {}", post.title)),
            );
            rows
        }
    };
    Ok(rows)
}

fn action_hint(role: Option<Role>) -> &'static str {
    match role {
        Some(role) if role.can_delete() => "You can create, edit and delete records.",
        Some(role) if role.can_update() => "You can create and edit records.",
        _ => "Read only.",
    }
}

#[component]
pub fn ResourcePage(section: Section) -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let rows = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { load_rows(&api, section).await }
        },
    );

    view! {
        <Layout>
            <div class="space-y-4">
                <h2 class="text-2xl font-bold text-fg">{section.title()}</h2>
                <p class="text-sm text-fg-muted">{move || action_hint(auth.get().role)}</p>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || rows.get().map(|result| match result {
                        Ok(rows) if rows.is_empty() => view! {
                            <p class="text-sm text-fg-muted">"Nothing here yet."</p>
                        }.into_view(),
                        Ok(rows) => view! {
                            <ul class="divide-y divide-border">
                                {rows.into_iter().map(|row| view! { <li class="py-2 text-sm">{row}</li> }).collect_view()}
                            </ul>
                        }.into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </div>
        </Layout>
    }
}
