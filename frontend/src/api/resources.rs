use super::{
    client::ApiClient,
    errors::GatewayError,
    types::{BlogPost, Customer, HeroSection, Invoice, ListResponse, ResourceId, Vehicle},
};

pub const VEHICLES: &str = "/vehicles/";
pub const CUSTOMERS: &str = "/customers/";
pub const CURRENT_CUSTOMER: &str = "/customers/me/";
pub const INVOICES: &str = "/invoices/";
pub const WEBSITE_HERO: &str = "/website/hero/";
pub const WEBSITE_BLOGS: &str = "/website/blogs/";

fn detail_path(collection: &str, id: &ResourceId) -> String {
    format!("{}{}/", collection, id)
}

impl ApiClient {
    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, GatewayError> {
        self.get_json::<ListResponse<T>>(collection)
            .await
            .map(ListResponse::into_items)
    }

    async fn total<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<usize, GatewayError> {
        self.get_json::<ListResponse<T>>(collection)
            .await
            .map(|list| list.total())
    }

    pub async fn vehicle_total(&self) -> Result<usize, GatewayError> {
        self.total::<Vehicle>(VEHICLES).await
    }

    pub async fn customer_total(&self) -> Result<usize, GatewayError> {
        self.total::<Customer>(CUSTOMERS).await
    }

    pub async fn invoice_total(&self) -> Result<usize, GatewayError> {
        self.total::<Invoice>(INVOICES).await
    }

    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError> {
        self.list(VEHICLES).await
    }

    pub async fn get_vehicle(&self, id: &ResourceId) -> Result<Vehicle, GatewayError> {
        self.get_json(&detail_path(VEHICLES, id)).await
    }

    pub async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle, GatewayError> {
        self.post_json(VEHICLES, vehicle).await
    }

    pub async fn update_vehicle(
        &self,
        id: &ResourceId,
        vehicle: &Vehicle,
    ) -> Result<Vehicle, GatewayError> {
        self.put_json(&detail_path(VEHICLES, id), vehicle).await
    }

    pub async fn delete_vehicle(&self, id: &ResourceId) -> Result<(), GatewayError> {
        self.delete(&detail_path(VEHICLES, id)).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        self.list(CUSTOMERS).await
    }

    pub async fn get_customer(&self, id: &ResourceId) -> Result<Customer, GatewayError> {
        self.get_json(&detail_path(CUSTOMERS, id)).await
    }

    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer, GatewayError> {
        self.post_json(CUSTOMERS, customer).await
    }

    pub async fn update_customer(
        &self,
        id: &ResourceId,
        customer: &Customer,
    ) -> Result<Customer, GatewayError> {
        self.put_json(&detail_path(CUSTOMERS, id), customer).await
    }

    /// Customer record of the signed-in customer.
    pub async fn current_customer(&self) -> Result<Customer, GatewayError> {
        self.get_json(CURRENT_CUSTOMER).await
    }

    pub async fn delete_customer(&self, id: &ResourceId) -> Result<(), GatewayError> {
        self.delete(&detail_path(CUSTOMERS, id)).await
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, GatewayError> {
        self.list(INVOICES).await
    }

    pub async fn get_invoice(&self, id: &ResourceId) -> Result<Invoice, GatewayError> {
        self.get_json(&detail_path(INVOICES, id)).await
    }

    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<Invoice, GatewayError> {
        self.post_json(INVOICES, invoice).await
    }

    pub async fn delete_invoice(&self, id: &ResourceId) -> Result<(), GatewayError> {
        self.delete(&detail_path(INVOICES, id)).await
    }

    pub async fn hero_section(&self) -> Result<HeroSection, GatewayError> {
        self.get_json(WEBSITE_HERO).await
    }

    /// The hero banner is a singleton; the backend upserts on POST.
    pub async fn update_hero_section(
        &self,
        hero: &HeroSection,
    ) -> Result<HeroSection, GatewayError> {
        self.post_json(WEBSITE_HERO, hero).await
    }

    pub async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, GatewayError> {
        self.list(WEBSITE_BLOGS).await
    }

    pub async fn get_blog_post(&self, id: &ResourceId) -> Result<BlogPost, GatewayError> {
        self.get_json(&detail_path(WEBSITE_BLOGS, id)).await
    }

    pub async fn create_blog_post(&self, post: &BlogPost) -> Result<BlogPost, GatewayError> {
        self.post_json(WEBSITE_BLOGS, post).await
    }

    pub async fn update_blog_post(
        &self,
        id: &ResourceId,
        post: &BlogPost,
    ) -> Result<BlogPost, GatewayError> {
        self.put_json(&detail_path(WEBSITE_BLOGS, id), post).await
    }

    pub async fn delete_blog_post(&self, id: &ResourceId) -> Result<(), GatewayError> {
        self.delete(&detail_path(WEBSITE_BLOGS, id)).await
    }
}
