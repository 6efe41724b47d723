use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::{Booking, Client, ClientPayload, ClientStats};

impl ApiClient {
    pub fn clients(&self) -> AppResult<Vec<Client>> {
        self.get_json("/clients", &[])
    }

    pub fn create_client(&self, payload: &ClientPayload) -> AppResult<Client> {
        self.post_json("/clients", payload)
    }

    pub fn update_client(&self, id: &str, payload: &ClientPayload) -> AppResult<serde_json::Value> {
        self.put_json(&format!("/clients/{id}"), payload)
    }

    pub fn delete_client(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/clients/{id}"))
    }

    pub fn client_stats(&self, id: &str) -> AppResult<ClientStats> {
        self.get_json(&format!("/clients/{id}/stats"), &[])
    }

    pub fn client_bookings(&self, id: &str) -> AppResult<Vec<Booking>> {
        self.get_json(&format!("/clients/{id}/bookings"), &[])
    }
}
