//! Persisting registrations to the hosted table store
//!
//! The store is an opaque collaborator exposing one capability: insert a
//! row, answer success or error. Column names are capitalized in the
//! persisted schema, so the in-memory field names are remapped at this
//! boundary.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::form::FormState;

const STORE_API_BASE: &str = "https://tables.glowclass.in/api/v1";
const REGISTRATION_TABLE: &str = "registrations";

/// One row of the registration table, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrationRow {
    pub name: String,
    pub email: String,
    pub pincode: String,
    pub city: String,
}

impl From<&FormState> for RegistrationRow {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            pincode: form.pincode.clone(),
            city: form.city.clone(),
        }
    }
}

/// Client for the registration table store
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    table: String,
    client: reqwest::Client,
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::with_endpoint(STORE_API_BASE.to_string(), REGISTRATION_TABLE.to_string())
    }
}

impl StoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different store, e.g. a stub server in tests.
    pub fn with_endpoint(base_url: String, table: String) -> Self {
        Self {
            base_url,
            table,
            client: reqwest::Client::new(),
        }
    }

    /// Insert one registration row. At-most-one attempt per call; the
    /// caller decides whether to retry.
    pub async fn insert(&self, row: &RegistrationRow) -> Result<()> {
        let url = format!("{}/tables/{}/rows", self.base_url, self.table);

        let response = self.client.post(&url).json(row).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Store(format!("{} - {}", status, body)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_columns_are_capitalized() {
        let row = RegistrationRow {
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            pincode: "400058".to_string(),
            city: "Mumbai".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["Name"], "Priya Sharma");
        assert_eq!(value["Email"], "priya@example.com");
        assert_eq!(value["Pincode"], "400058");
        assert_eq!(value["City"], "Mumbai");
    }

    #[test]
    fn test_row_snapshots_the_form_without_experience() {
        let form = FormState {
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone: "9820098200".to_string(),
            pincode: "400058".to_string(),
            city: "Mumbai".to_string(),
            experience: "intermediate".to_string(),
        };
        let row = RegistrationRow::from(&form);
        assert_eq!(row.name, form.name);
        assert_eq!(row.email, form.email);
        assert_eq!(row.pincode, form.pincode);
        assert_eq!(row.city, form.city);

        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("Phone").is_none());
        assert!(value.get("Experience").is_none());
    }
}
