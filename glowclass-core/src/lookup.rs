//! Pincode-to-city resolution via the public postal API
//!
//! The service answers with a JSON array; the first element carries a
//! status flag and, on success, a list of post-office records. The first
//! record's district name is taken as the city.

use serde::Deserialize;

use crate::error::{Error, Result};

const POSTAL_API_BASE: &str = "https://api.postalpincode.in";

/// A lookup fires only once the accumulated input reaches exactly six
/// characters - never on shorter values, never again as the visitor keeps
/// typing past six.
pub fn triggers_lookup(pincode: &str) -> bool {
    pincode.len() == 6
}

/// First element of the lookup response array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupEnvelope {
    /// "Success" when the pincode resolved, "Error" otherwise
    pub status: String,
    pub message: Option<String>,
    pub post_office: Option<Vec<PostOffice>>,
}

/// One post-office record under a resolved pincode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostOffice {
    pub name: String,
    pub district: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The pincode resolved; carries the district name to use as the city.
    Found(String),
    /// The service answered but flagged the pincode as unknown.
    NotFound,
}

/// Extract the city from a raw lookup response body.
pub fn resolve_city(body: &str) -> Result<LookupOutcome> {
    let envelopes: Vec<LookupEnvelope> = serde_json::from_str(body)?;
    let Some(first) = envelopes.first() else {
        return Ok(LookupOutcome::NotFound);
    };
    if first.status != "Success" {
        return Ok(LookupOutcome::NotFound);
    }
    match first.post_office.as_deref().and_then(|offices| offices.first()) {
        Some(office) => Ok(LookupOutcome::Found(office.district.clone())),
        None => Ok(LookupOutcome::NotFound),
    }
}

/// Client for the postal pincode lookup service
#[derive(Debug, Clone, Default)]
pub struct PincodeClient {
    base_url: Option<String>,
    client: reqwest::Client,
}

impl PincodeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host, e.g. a stub server in tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: Some(base_url),
            client: reqwest::Client::new(),
        }
    }

    /// Resolve a six-digit pincode to its district name.
    pub async fn lookup(&self, pincode: &str) -> Result<LookupOutcome> {
        let base = self.base_url.as_deref().unwrap_or(POSTAL_API_BASE);
        let url = format!("{}/pincode/{}", base, pincode);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Lookup(format!("{} - {}", status, body)));
        }

        let body = response.text().await?;
        resolve_city(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUND: &str = r#"[{
        "Message": "Number of pincode(s) found:1",
        "Status": "Success",
        "PostOffice": [
            {"Name": "Azad Nagar (Mumbai)", "District": "Mumbai", "State": "Maharashtra"},
            {"Name": "Jogeshwari East", "District": "Mumbai Suburban", "State": "Maharashtra"}
        ]
    }]"#;

    const NOT_FOUND: &str = r#"[{
        "Message": "No records found",
        "Status": "Error",
        "PostOffice": null
    }]"#;

    #[test]
    fn test_lookup_fires_only_at_six_characters() {
        assert!(triggers_lookup("400058"));
        assert!(!triggers_lookup(""));
        assert!(!triggers_lookup("40005"));
        assert!(!triggers_lookup("4000581"));
    }

    #[test]
    fn test_success_takes_the_first_district() {
        assert_eq!(
            resolve_city(FOUND).unwrap(),
            LookupOutcome::Found("Mumbai".to_string())
        );
    }

    #[test]
    fn test_error_status_is_not_found() {
        assert_eq!(resolve_city(NOT_FOUND).unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_success_without_post_offices_is_not_found() {
        let body = r#"[{"Status": "Success", "PostOffice": []}]"#;
        assert_eq!(resolve_city(body).unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_empty_array_is_not_found() {
        assert_eq!(resolve_city("[]").unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(resolve_city("<html>bad gateway</html>").is_err());
        assert!(resolve_city(r#"{"Status": "Success"}"#).is_err());
    }
}
