use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Wire (camelCase) field names, shared by the validation rules, the wizard
/// step bindings and the error payloads.
pub mod fields {
    pub const APPLICANT_CITIZENSHIP: &str = "applicantCitizenship";
    pub const IDENTIFICATION_NUMBER: &str = "identificationNumber";
    pub const PASSPORT_NUMBER: &str = "passportNumber";
    pub const OTHER_NAMES: &str = "otherNames";
    pub const SURNAME: &str = "surname";
    pub const NATIONALITY: &str = "nationality";
    pub const PHONE_COUNTRY_CODE: &str = "phoneCountryCode";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const EMAIL_ADDRESS: &str = "emailAddress";
    pub const OWNER_PROVINCE: &str = "ownerProvince";
    pub const OWNER_DISTRICT: &str = "ownerDistrict";
    pub const BUSINESS_TYPE: &str = "businessType";
    pub const COMPANY_NAME: &str = "companyName";
    pub const TIN_NUMBER: &str = "tinNumber";
    pub const REGISTRATION_DATE: &str = "registrationDate";
    pub const BUSINESS_PROVINCE: &str = "businessProvince";
    pub const BUSINESS_DISTRICT: &str = "businessDistrict";
    pub const PURPOSE_OF_IMPORTATION: &str = "purposeOfImportation";
    pub const SPECIFY_PURPOSE: &str = "specifyPurpose";
    pub const PRODUCT_CATEGORY: &str = "productCategory";
    pub const PRODUCT_NAME: &str = "productName";
    pub const WEIGHT: &str = "weight";
    pub const DESCRIPTION: &str = "description";
    pub const UNIT_OF_MEASUREMENT: &str = "unitOfMeasurement";
    pub const QUANTITY: &str = "quantity";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Citizenship {
    Rwandan,
    Foreigner,
}

impl Citizenship {
    pub const ALL: [&'static str; 2] = ["Rwandan", "Foreigner"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Rwandan" => Some(Self::Rwandan),
            "Foreigner" => Some(Self::Foreigner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rwandan => "Rwandan",
            Self::Foreigner => "Foreigner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessType {
    Retailer,
    Wholesale,
    Manufacturer,
}

impl BusinessType {
    pub const ALL: [&'static str; 3] = ["Retailer", "Wholesale", "Manufacturer"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Retailer" => Some(Self::Retailer),
            "Wholesale" => Some(Self::Wholesale),
            "Manufacturer" => Some(Self::Manufacturer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    #[serde(rename = "Direct sale")]
    DirectSale,
    #[serde(rename = "Personal use")]
    PersonalUse,
    #[serde(rename = "Trial use")]
    TrialUse,
    Other,
}

impl Purpose {
    pub const ALL: [&'static str; 4] = ["Direct sale", "Personal use", "Trial use", "Other"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Direct sale" => Some(Self::DirectSale),
            "Personal use" => Some(Self::PersonalUse),
            "Trial use" => Some(Self::TrialUse),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "General purpose")]
    GeneralPurpose,
    #[serde(rename = "Construction materials")]
    ConstructionMaterials,
    Chemicals,
}

impl ProductCategory {
    pub const ALL: [&'static str; 3] =
        ["General purpose", "Construction materials", "Chemicals"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "General purpose" => Some(Self::GeneralPurpose),
            "Construction materials" => Some(Self::ConstructionMaterials),
            "Chemicals" => Some(Self::Chemicals),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Kgs,
    Tonnes,
}

impl Unit {
    pub const ALL: [&'static str; 2] = ["Kgs", "Tonnes"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Kgs" => Some(Self::Kgs),
            "Tonnes" => Some(Self::Tonnes),
            _ => None,
        }
    }
}

/// The in-progress application exactly as the form holds it: every value is a
/// string, empty meaning "not filled in yet". Numeric inputs (`weight`,
/// `quantity`) also accept JSON numbers on the wire since clients send both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub applicant_citizenship: String,
    pub identification_number: String,
    pub passport_number: String,
    pub other_names: String,
    pub surname: String,
    pub nationality: String,
    pub phone_country_code: String,
    pub phone_number: String,
    pub email_address: String,
    pub owner_province: String,
    pub owner_district: String,

    pub business_type: String,
    pub company_name: String,
    pub tin_number: String,
    pub registration_date: String,
    pub business_province: String,
    pub business_district: String,

    pub purpose_of_importation: String,
    pub specify_purpose: String,
    pub product_category: String,
    pub product_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub weight: String,
    pub description: String,
    pub unit_of_measurement: String,
    #[serde(deserialize_with = "lenient_string")]
    pub quantity: String,
}

impl Default for ApplicationDraft {
    /// Initial form values of a fresh wizard session.
    fn default() -> Self {
        Self {
            applicant_citizenship: "Rwandan".to_string(),
            identification_number: String::new(),
            passport_number: String::new(),
            other_names: String::new(),
            surname: String::new(),
            nationality: String::new(),
            phone_country_code: "+250".to_string(),
            phone_number: String::new(),
            email_address: String::new(),
            owner_province: String::new(),
            owner_district: String::new(),
            business_type: "Retailer".to_string(),
            company_name: String::new(),
            tin_number: String::new(),
            registration_date: String::new(),
            business_province: String::new(),
            business_district: String::new(),
            purpose_of_importation: "Direct sale".to_string(),
            specify_purpose: String::new(),
            product_category: String::new(),
            product_name: String::new(),
            weight: String::new(),
            description: String::new(),
            unit_of_measurement: String::new(),
            quantity: String::new(),
        }
    }
}

/// Accepts a JSON string, number or null and normalizes it to a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// A single validation failure, addressed by wire field name. The order of
/// these in a list follows the canonical field order of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_string(), message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub country_code: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub province: String,
    pub district: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDetails {
    pub applicant_citizenship: Citizenship,
    pub identification_number: Option<String>,
    pub passport_number: Option<String>,
    pub other_names: String,
    pub surname: String,
    pub nationality: String,
    pub phone: Phone,
    pub email_address: Option<String>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    #[serde(rename = "type")]
    pub business_type: BusinessType,
    pub company_name: String,
    pub tin: String,
    pub registration_date: NaiveDate,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub purpose: Purpose,
    pub specify_purpose: Option<String>,
    pub category: ProductCategory,
    pub name: String,
    pub weight_kg: f64,
    pub unit_of_measurement: Unit,
    pub quantity: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A persisted application. Immutable once written; the store only appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    pub submission_date: DateTime<Utc>,
    pub status: String,
    pub owner: OwnerDetails,
    pub business: BusinessDetails,
    pub product: ProductDetails,
    pub request_meta: RequestMeta,
}

/// What the applicant gets back after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub application_id: String,
    pub submission_date: DateTime<Utc>,
    pub status: String,
}
