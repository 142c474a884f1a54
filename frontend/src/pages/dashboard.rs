use crate::{
    api::{ApiClient, ApiError},
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::resources::Section,
};
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub vehicles: usize,
    pub customers: usize,
    pub invoices: usize,
}

pub async fn load_counts(api: &ApiClient) -> Result<DashboardCounts, ApiError> {
    Ok(DashboardCounts {
        vehicles: api.vehicle_total().await?,
        customers: api.customer_total().await?,
        invoices: api.invoice_total().await?,
    })
}

#[component]
fn CountCard(section: Section, count: usize) -> impl IntoView {
    view! {
        <a href=section.path() class="block rounded-lg border border-border bg-surface-elevated p-4 hover:shadow">
            <p class="text-sm text-fg-muted">{section.title()}</p>
            <p class="text-3xl font-semibold text-fg">{count}</p>
        </a>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let counts = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { load_counts(&api).await }
        },
    );

    view! {
        <Layout>
            <h2 class="text-2xl font-bold text-fg mb-4">"Dashboard"</h2>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || counts.get().map(|result| match result {
                    Ok(counts) => view! {
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                            <CountCard section=Section::Vehicles count=counts.vehicles />
                            <CountCard section=Section::Customers count=counts.customers />
                            <CountCard section=Section::Invoices count=counts.invoices />
                        </div>
                    }.into_view(),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        session::{CredentialStore, PersistenceScope, Role, TokenPair},
        test_support::{ssr::render_as, tokens::live_token},
        utils::navigation::RecordingNavigator,
    };
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn counts_each_collection_using_page_totals() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/vehicles/");
                then.status(200).json_body(json!({
                    "count": 42,
                    "next": "http://api.test/vehicles/?page=2",
                    "previous": null,
                    "results": []
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/customers/");
                then.status(200).json_body(json!([
                    { "id": 1, "name": "Amina", "email": "amina@example.com", "status": "Active" },
                    { "id": 2, "name": "Juma", "email": "juma@example.com", "status": "Dormant" }
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/invoices/");
                then.status(200)
                    .json_body(json!({ "count": 0, "next": null, "previous": null, "results": [] }));
            })
            .await;

        let credentials = CredentialStore::in_memory();
        credentials.save(
            &TokenPair { access: live_token("admin"), refresh: Some("R1".into()) },
            PersistenceScope::Ephemeral,
        );
        let api = ApiClient::with_parts(
            Some(server.base_url()),
            credentials,
            Rc::new(RecordingNavigator::default()),
        );

        let counts = load_counts(&api).await.unwrap();
        assert_eq!(
            counts,
            DashboardCounts { vehicles: 42, customers: 2, invoices: 0 }
        );
    }

    #[test]
    fn renders_heading_inside_layout() {
        let html = render_as(Some(Role::Admin), || view! { <DashboardPage /> });
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Vemacars Admin"));
    }
}
