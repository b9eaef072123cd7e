//! Server-side submission pipeline: validate, assemble an immutable record,
//! append it to the store, then fan out notifications.

use crate::core::rules::{parse_quantity, parse_weight};
use crate::domain::model::{
    Address, ApplicationDraft, BusinessDetails, BusinessType, Citizenship, OwnerDetails, Phone,
    ProductCategory, ProductDetails, Purpose, RequestMeta, SubmissionReceipt, SubmissionRecord,
    Unit,
};
use crate::domain::ports::{DraftValidator, Notifier, SubmissionStore};
use crate::utils::error::{PermitError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub struct SubmissionService<V, S, N> {
    validator: V,
    store: S,
    notifier: N,
}

impl<V, S, N> SubmissionService<V, S, N>
where
    V: DraftValidator,
    S: SubmissionStore,
    N: Notifier,
{
    pub fn new(validator: V, store: S, notifier: N) -> Self {
        Self { validator, store, notifier }
    }

    /// Runs a draft through the full pipeline and returns the receipt.
    ///
    /// Notification failures after the record has been appended are logged
    /// and swallowed: the submission is already durable at that point and
    /// the applicant must still get their receipt.
    pub async fn submit(
        &self,
        draft: &ApplicationDraft,
        meta: RequestMeta,
    ) -> Result<SubmissionReceipt> {
        let errors = self.validator.validate(draft);
        if !errors.is_empty() {
            return Err(PermitError::ValidationError { errors });
        }

        let now = Utc::now();
        let record = assemble_record(draft, meta, generate_application_id(now), now)?;

        self.store.append(&record).await?;
        tracing::info!(id = %record.id, company = %record.business.company_name, "application persisted");

        if record.owner.email_address.is_some() {
            if let Err(e) = self.notifier.send_confirmation(&record).await {
                tracing::warn!(id = %record.id, error = %e, "confirmation email failed");
            }
        }
        if let Err(e) = self.notifier.send_review_notification(&record).await {
            tracing::warn!(id = %record.id, error = %e, "reviewer notification failed");
        }

        Ok(SubmissionReceipt {
            application_id: record.id,
            submission_date: record.submission_date,
            status: record.status,
        })
    }

    pub async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>> {
        self.store.find(id).await
    }

    pub async fn list(&self) -> Result<Vec<SubmissionRecord>> {
        self.store.list().await
    }
}

/// `RICA-<epoch millis>-<6 uppercase hex chars>`, matching the id scheme the
/// portal has always handed out.
pub fn generate_application_id(now: DateTime<Utc>) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(6)
        .collect::<String>()
        .to_uppercase();
    format!("RICA-{}-{}", now.timestamp_millis(), suffix)
}

/// Turns a *validated* draft into the grouped, typed record that gets
/// persisted. Only reachable after validation, so any parse failure here is
/// a programming error surfaced as `SubmissionError`.
fn assemble_record(
    draft: &ApplicationDraft,
    meta: RequestMeta,
    id: String,
    now: DateTime<Utc>,
) -> Result<SubmissionRecord> {
    let citizenship = Citizenship::parse(&draft.applicant_citizenship)
        .ok_or_else(|| invariant("applicantCitizenship"))?;
    let purpose = Purpose::parse(&draft.purpose_of_importation)
        .ok_or_else(|| invariant("purposeOfImportation"))?;

    let owner = OwnerDetails {
        applicant_citizenship: citizenship,
        identification_number: match citizenship {
            Citizenship::Rwandan => Some(draft.identification_number.clone()),
            Citizenship::Foreigner => None,
        },
        passport_number: match citizenship {
            Citizenship::Foreigner => Some(draft.passport_number.clone()),
            Citizenship::Rwandan => None,
        },
        other_names: draft.other_names.clone(),
        surname: draft.surname.clone(),
        nationality: draft.nationality.clone(),
        phone: Phone {
            country_code: non_empty(&draft.phone_country_code),
            number: non_empty(&draft.phone_number),
        },
        email_address: non_empty(&draft.email_address),
        address: Address {
            province: draft.owner_province.clone(),
            district: draft.owner_district.clone(),
        },
    };

    let business = BusinessDetails {
        business_type: BusinessType::parse(&draft.business_type)
            .ok_or_else(|| invariant("businessType"))?,
        company_name: draft.company_name.clone(),
        tin: draft.tin_number.clone(),
        registration_date: NaiveDate::parse_from_str(&draft.registration_date, "%Y-%m-%d")
            .map_err(|_| invariant("registrationDate"))?,
        address: Address {
            province: draft.business_province.clone(),
            district: draft.business_district.clone(),
        },
    };

    let product = ProductDetails {
        purpose,
        specify_purpose: match purpose {
            Purpose::Other => Some(draft.specify_purpose.clone()),
            _ => None,
        },
        category: ProductCategory::parse(&draft.product_category)
            .ok_or_else(|| invariant("productCategory"))?,
        name: draft.product_name.clone(),
        weight_kg: parse_weight(&draft.weight).ok_or_else(|| invariant("weight"))?,
        unit_of_measurement: Unit::parse(&draft.unit_of_measurement)
            .ok_or_else(|| invariant("unitOfMeasurement"))?,
        quantity: parse_quantity(&draft.quantity).ok_or_else(|| invariant("quantity"))?,
        description: draft.description.clone(),
    };

    Ok(SubmissionRecord {
        id,
        submission_date: now,
        status: "Submitted".to_string(),
        owner,
        business,
        product,
        request_meta: meta,
    })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

fn invariant(field: &str) -> PermitError {
    PermitError::SubmissionError {
        message: format!("draft passed validation but {field} could not be assembled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::SchemaValidator;
    use crate::domain::model::FieldError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        records: Arc<Mutex<Vec<SubmissionRecord>>>,
    }

    #[async_trait]
    impl SubmissionStore for MemoryStore {
        async fn append(&self, record: &SubmissionRecord) -> Result<()> {
            self.records.lock().await.push(record.clone());
            Ok(())
        }

        async fn find(&self, id: &str) -> Result<Option<SubmissionRecord>> {
            Ok(self.records.lock().await.iter().find(|r| r.id == id).cloned())
        }

        async fn list(&self) -> Result<Vec<SubmissionRecord>> {
            Ok(self.records.lock().await.clone())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        confirmations: Arc<Mutex<Vec<String>>>,
        notifications: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_confirmation(&self, record: &SubmissionRecord) -> Result<()> {
            if self.fail {
                return Err(PermitError::NotifyError { message: "relay down".into() });
            }
            self.confirmations.lock().await.push(record.id.clone());
            Ok(())
        }

        async fn send_review_notification(&self, record: &SubmissionRecord) -> Result<()> {
            if self.fail {
                return Err(PermitError::NotifyError { message: "relay down".into() });
            }
            self.notifications.lock().await.push(record.id.clone());
            Ok(())
        }
    }

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            applicant_citizenship: "Rwandan".into(),
            identification_number: "1199012345678901".into(),
            other_names: "Aline".into(),
            surname: "Mukamana".into(),
            nationality: "rwandan".into(),
            email_address: "aline@example.com".into(),
            owner_province: "kigali".into(),
            owner_district: "gasabo".into(),
            business_type: "Retailer".into(),
            company_name: "Kigali Trading Ltd".into(),
            tin_number: "123456789".into(),
            registration_date: "2022-03-15".into(),
            business_province: "kigali".into(),
            business_district: "nyarugenge".into(),
            purpose_of_importation: "Direct sale".into(),
            product_category: "General purpose".into(),
            product_name: "Steel rods".into(),
            weight: "120.5".into(),
            description: "Reinforcement steel rods for resale.".into(),
            unit_of_measurement: "Kgs".into(),
            quantity: "40".into(),
            ..ApplicationDraft::default()
        }
    }

    fn service(
        store: MemoryStore,
        notifier: RecordingNotifier,
    ) -> SubmissionService<SchemaValidator, MemoryStore, RecordingNotifier> {
        SubmissionService::new(SchemaValidator::new(), store, notifier)
    }

    #[tokio::test]
    async fn valid_draft_is_persisted_and_receipted() {
        let store = MemoryStore::default();
        let notifier = RecordingNotifier::default();
        let svc = service(store.clone(), notifier.clone());

        let receipt = svc
            .submit(&valid_draft(), RequestMeta::default())
            .await
            .unwrap();

        assert!(receipt.application_id.starts_with("RICA-"));
        assert_eq!(receipt.status, "Submitted");

        let stored = store.records.lock().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, receipt.application_id);
        assert_eq!(stored[0].business.tin, "123456789");
        assert_eq!(stored[0].product.quantity, 40);
        // Rwandan applicant: passport side of the identity pair is dropped.
        assert_eq!(stored[0].owner.passport_number, None);
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_with_field_errors() {
        let store = MemoryStore::default();
        let svc = service(store.clone(), RecordingNotifier::default());

        let mut draft = valid_draft();
        draft.surname.clear();
        draft.tin_number = "12".into();

        let err = svc.submit(&draft, RequestMeta::default()).await.unwrap_err();
        match err {
            PermitError::ValidationError { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["surname", "tinNumber"]);
            }
            other => panic!("expected validation error, got {other}"),
        }
        assert!(store.records.lock().await.is_empty());
    }

    #[tokio::test]
    async fn confirmation_is_skipped_without_an_email_address() {
        let notifier = RecordingNotifier::default();
        let svc = service(MemoryStore::default(), notifier.clone());

        let mut draft = valid_draft();
        draft.email_address.clear();
        svc.submit(&draft, RequestMeta::default()).await.unwrap();

        assert!(notifier.confirmations.lock().await.is_empty());
        assert_eq!(notifier.notifications.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn notification_failure_does_not_lose_the_receipt() {
        let store = MemoryStore::default();
        let notifier = RecordingNotifier { fail: true, ..RecordingNotifier::default() };
        let svc = service(store.clone(), notifier);

        let receipt = svc
            .submit(&valid_draft(), RequestMeta::default())
            .await
            .unwrap();

        assert!(receipt.application_id.starts_with("RICA-"));
        assert_eq!(store.records.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn find_returns_persisted_records_by_id() {
        let store = MemoryStore::default();
        let svc = service(store, RecordingNotifier::default());

        let receipt = svc
            .submit(&valid_draft(), RequestMeta::default())
            .await
            .unwrap();

        let found = svc.find(&receipt.application_id).await.unwrap();
        assert_eq!(found.unwrap().id, receipt.application_id);
        assert!(svc.find("RICA-0-XXXXXX").await.unwrap().is_none());
    }

    #[test]
    fn application_ids_follow_the_rica_format() {
        let now = Utc::now();
        let id = generate_application_id(now);
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "RICA");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn errors_carry_a_validation_error_count() {
        let err = PermitError::ValidationError {
            errors: vec![FieldError::new("surname", "Surname is required.")],
        };
        assert_eq!(err.to_string(), "Validation failed for 1 field(s)");
    }
}
