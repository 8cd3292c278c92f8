use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtOrderInfo {
    pub court_name: String,
    pub court_registry: String,
    pub order_date: String,
    pub file_number: String,
    pub effect_of_order: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_additional: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delivery_instructions: String,
}

/// Contact details of whoever submits the transfer. Either a business name or
/// a person name is expected to be filled in; nothing at this layer checks that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittingParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<PersonName>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone_extension: String,
}

impl SubmittingParty {
    pub fn display_name(&self) -> String {
        if let Some(business) = self.business_name.as_deref() {
            if !business.trim().is_empty() {
                return business.to_string();
            }
        }
        match &self.person_name {
            Some(name) => [name.first.as_str(), name.middle.as_str(), name.last.as_str()]
                .into_iter()
                .filter(|part| !part.trim().is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MhrTransferState {
    pub declared_value: f64,
    pub consideration: String,
    pub transfer_date: String,
    pub own_land: bool,
    pub submitting_party: SubmittingParty,
    pub attention_reference: String,
}
