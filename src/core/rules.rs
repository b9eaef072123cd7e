//! Schema validation for application drafts.
//!
//! The whole draft is always checked; failures come back as an ordered
//! `Vec<FieldError>` (canonical field order, no early abort) so the caller
//! can surface every problem at once.

use crate::domain::model::fields::*;
use crate::domain::model::{
    ApplicationDraft, BusinessType, Citizenship, FieldError, ProductCategory, Purpose, Unit,
};
use crate::domain::ports::DraftValidator;
use chrono::{NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

static DIGITS_16: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{16}$").unwrap());
static DIGITS_9: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5,15}$").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }
}

impl DraftValidator for SchemaValidator {
    fn validate(&self, draft: &ApplicationDraft) -> Vec<FieldError> {
        validate_draft(draft)
    }
}

pub fn validate_draft(draft: &ApplicationDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let citizenship = check_vocab(
        &mut errors,
        APPLICANT_CITIZENSHIP,
        &draft.applicant_citizenship,
        &Citizenship::ALL,
        "Applicant citizenship is required.",
    )
    .and_then(Citizenship::parse);

    match citizenship {
        Some(Citizenship::Rwandan) => {
            if draft.identification_number.is_empty() {
                errors.push(FieldError::new(
                    IDENTIFICATION_NUMBER,
                    "Identification number is required for Rwandan citizens.",
                ));
            } else if !DIGITS_16.is_match(&draft.identification_number) {
                errors.push(FieldError::new(
                    IDENTIFICATION_NUMBER,
                    "ID number must be 16 digits.",
                ));
            }
        }
        Some(Citizenship::Foreigner) => {
            if draft.passport_number.is_empty() {
                errors.push(FieldError::new(
                    PASSPORT_NUMBER,
                    "Passport number is required for foreigners.",
                ));
            }
        }
        None => {}
    }

    check_text(&mut errors, OTHER_NAMES, &draft.other_names, "Other names", 2, 100);
    check_text(&mut errors, SURNAME, &draft.surname, "Surname", 2, 100);

    if draft.nationality.is_empty() {
        errors.push(FieldError::new(NATIONALITY, "Nationality is required."));
    }

    if !draft.phone_country_code.is_empty() && !draft.phone_country_code.starts_with('+') {
        errors.push(FieldError::new(
            PHONE_COUNTRY_CODE,
            "Country code must start with a '+'.",
        ));
    }
    if !draft.phone_number.is_empty() && !PHONE.is_match(&draft.phone_number) {
        errors.push(FieldError::new(
            PHONE_NUMBER,
            "Phone number must contain only 5 to 15 digits.",
        ));
    }
    if !draft.email_address.is_empty() && !EMAIL.is_match(&draft.email_address) {
        errors.push(FieldError::new(
            EMAIL_ADDRESS,
            "A valid email address must be provided.",
        ));
    }

    check_required(&mut errors, OWNER_PROVINCE, &draft.owner_province, "Owner's province");
    check_required(&mut errors, OWNER_DISTRICT, &draft.owner_district, "Owner's district");

    let _ = check_vocab(
        &mut errors,
        BUSINESS_TYPE,
        &draft.business_type,
        &BusinessType::ALL,
        "Business type is required.",
    );
    check_text(&mut errors, COMPANY_NAME, &draft.company_name, "Company name", 2, 200);

    if !DIGITS_9.is_match(&draft.tin_number) {
        errors.push(FieldError::new(
            TIN_NUMBER,
            "Please provide a valid 9-digit TIN number.",
        ));
    }

    if draft.registration_date.is_empty() {
        errors.push(FieldError::new(REGISTRATION_DATE, "Registration date is required."));
    } else {
        match NaiveDate::parse_from_str(&draft.registration_date, "%Y-%m-%d") {
            Ok(date) if date > Utc::now().date_naive() => {
                errors.push(FieldError::new(
                    REGISTRATION_DATE,
                    "Registration date cannot be in the future.",
                ));
            }
            Ok(_) => {}
            Err(_) => {
                errors.push(FieldError::new(
                    REGISTRATION_DATE,
                    "Registration date must be a valid date (YYYY-MM-DD).",
                ));
            }
        }
    }

    check_required(&mut errors, BUSINESS_PROVINCE, &draft.business_province, "Business province");
    check_required(&mut errors, BUSINESS_DISTRICT, &draft.business_district, "Business district");

    let purpose = check_vocab(
        &mut errors,
        PURPOSE_OF_IMPORTATION,
        &draft.purpose_of_importation,
        &Purpose::ALL,
        "Purpose of importation is required.",
    )
    .and_then(Purpose::parse);

    if purpose == Some(Purpose::Other) && draft.specify_purpose.is_empty() {
        errors.push(FieldError::new(SPECIFY_PURPOSE, "Please specify the purpose."));
    }

    let _ = check_vocab(
        &mut errors,
        PRODUCT_CATEGORY,
        &draft.product_category,
        &ProductCategory::ALL,
        "Product category is required.",
    );
    check_text(&mut errors, PRODUCT_NAME, &draft.product_name, "Product name", 2, 200);

    match parse_weight(&draft.weight) {
        Some(w) if w > 0.0 => {}
        Some(_) => {
            errors.push(FieldError::new(WEIGHT, "Weight must be greater than 0."));
        }
        None => {
            errors.push(FieldError::new(WEIGHT, "Weight is required and must be a number."));
        }
    }

    check_text(&mut errors, DESCRIPTION, &draft.description, "Description", 10, 1000);

    let _ = check_vocab(
        &mut errors,
        UNIT_OF_MEASUREMENT,
        &draft.unit_of_measurement,
        &Unit::ALL,
        "Unit of measurement is required.",
    );

    match parse_quantity(&draft.quantity) {
        Some(q) if q >= 1 => {}
        Some(_) => {
            errors.push(FieldError::new(QUANTITY, "Quantity must be at least 1."));
        }
        None => {
            errors.push(FieldError::new(
                QUANTITY,
                "Quantity is required and must be a whole number.",
            ));
        }
    }

    errors
}

pub fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|w| w.is_finite())
}

pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn check_required(errors: &mut Vec<FieldError>, field: &str, value: &str, label: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required.")));
    }
}

fn check_text(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    label: &str,
    min: usize,
    max: usize,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required.")));
    } else {
        let len = value.chars().count();
        if len < min || len > max {
            errors.push(FieldError::new(
                field,
                format!("{label} must be between {min} and {max} characters."),
            ));
        }
    }
}

/// Checks a closed-vocabulary field; returns the raw value when it is one of
/// the allowed spellings so callers can parse it further.
fn check_vocab<'a>(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &'a str,
    allowed: &[&str],
    required_message: &str,
) -> Option<&'a str> {
    if value.is_empty() {
        errors.push(FieldError::new(field, required_message));
        return None;
    }
    if !allowed.contains(&value) {
        errors.push(FieldError::new(
            field,
            format!("Must be one of: {}.", allowed.join(", ")),
        ));
        return None;
    }
    Some(value)
}
