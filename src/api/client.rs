//! HTTP Resource Client
//!
//! Fetches the JSON resources the shell needs at runtime. Everything here
//! is same-origin static content, so errors reduce to network and parse
//! failures.

use gloo_net::http::Request;
use serde_json::Value;

/// Fetch the translation catalogue for a language code.
pub async fn fetch_translations(code: &str) -> Result<Value, String> {
    let response = Request::get(&format!("assets/locales/{}.json", code))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Locale request failed with status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Imprint ============

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImprintData {
    pub title: String,
    pub subtitle: String,
    pub company: Company,
    pub disclaimer: Disclaimer,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub address: Address,
    pub registration: Registration,
    pub management: String,
    pub vat_id: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub court: String,
    pub number: String,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    pub fax: String,
    pub email: String,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Disclaimer {
    pub title: String,
    pub text: String,
}

impl ImprintData {
    /// Placeholder shown when the imprint resource cannot be fetched.
    pub fn fallback() -> Self {
        Self {
            title: "Impressum".to_string(),
            subtitle: "Anbieterkennzeichnung".to_string(),
            company: Company {
                name: "Vitaport GmbH".to_string(),
                address: Address {
                    street: "Musterstraße 1".to_string(),
                    zip_code: "10115".to_string(),
                    city: "Berlin".to_string(),
                    country: "Deutschland".to_string(),
                },
                registration: Registration {
                    court: "Berlin-Charlottenburg".to_string(),
                    number: "HRB 000000".to_string(),
                },
                management: "Dr. Max Mustermann".to_string(),
                vat_id: "DE000000000".to_string(),
                contact: Contact {
                    phone: "+49 30 000000".to_string(),
                    fax: "+49 30 000001".to_string(),
                    email: "info@vitaport.example".to_string(),
                },
            },
            disclaimer: Disclaimer {
                title: "Haftungsausschluss".to_string(),
                text: "Alle Angaben ohne Gewähr.".to_string(),
            },
        }
    }
}

/// Fetch the imprint resource.
pub async fn fetch_imprint() -> Result<ImprintData, String> {
    let response = Request::get("assets/data/imprint.json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Imprint request failed with status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Version ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

/// Fetch the deployment version manifest. Cache-busted so a stale HTTP
/// cache cannot hide a new deployment.
pub async fn fetch_version() -> Result<VersionInfo, String> {
    let url = format!("version.json?t={}", js_sys::Date::now() as u64);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Version request failed with status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imprint_fallback_is_complete() {
        let data = ImprintData::fallback();
        assert!(!data.title.is_empty());
        assert!(!data.company.name.is_empty());
        assert!(!data.company.address.city.is_empty());
        assert!(!data.company.registration.number.is_empty());
        assert!(!data.company.contact.email.is_empty());
        assert!(!data.disclaimer.text.is_empty());
    }

    #[test]
    fn test_imprint_deserializes_camel_case() {
        let json = r#"{
            "title": "Impressum",
            "subtitle": "Anbieterkennzeichnung",
            "company": {
                "name": "Example AG",
                "address": {
                    "street": "Hauptstraße 5",
                    "zipCode": "20095",
                    "city": "Hamburg",
                    "country": "Deutschland"
                },
                "registration": {
                    "court": "Hamburg",
                    "number": "HRB 12345"
                },
                "management": "Jane Doe",
                "vatId": "DE123456789",
                "contact": {
                    "phone": "+49 40 123",
                    "fax": "+49 40 124",
                    "email": "mail@example.test"
                }
            },
            "disclaimer": {
                "title": "Hinweis",
                "text": "Keine Gewähr."
            }
        }"#;

        let data: ImprintData = serde_json::from_str(json).unwrap();
        assert_eq!(data.company.address.zip_code, "20095");
        assert_eq!(data.company.vat_id, "DE123456789");
    }

    #[test]
    fn test_imprint_rejects_missing_sections() {
        // Validation by type: an incomplete resource fails to deserialize
        // and the caller falls back to the placeholder.
        let json = r#"{ "title": "Impressum", "company": { "name": "Example AG" } }"#;
        assert!(serde_json::from_str::<ImprintData>(json).is_err());
    }

    #[test]
    fn test_version_info_deserializes() {
        let info: VersionInfo = serde_json::from_str(r#"{ "version": "1.2.3" }"#).unwrap();
        assert_eq!(info.version, "1.2.3");
    }
}
