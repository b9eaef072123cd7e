//! Email delivery through an HTTP mail relay.
//!
//! The relay takes a JSON message (`from`, `to`, `subject`, `html`) and does
//! the actual SMTP legwork. Two messages exist per submission: a confirmation
//! to the applicant and a review notification to the permits team.

use crate::domain::locations::{district_name, nationality_name, province_name};
use crate::domain::model::{Citizenship, SubmissionRecord};
use crate::domain::ports::Notifier;
use crate::utils::error::{PermitError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub endpoint: String,
    pub from: String,
    pub reviewer: String,
}

#[derive(Debug)]
pub struct MailRelayNotifier {
    client: Client,
    settings: MailSettings,
}

#[derive(Debug, Serialize)]
struct MailMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

impl MailRelayNotifier {
    pub fn new(settings: MailSettings) -> Self {
        Self { client: Client::new(), settings }
    }

    async fn send(&self, message: &MailMessage<'_>) -> Result<()> {
        let response = self
            .client
            .post(&self.settings.endpoint)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PermitError::NotifyError {
                message: format!("mail relay answered {}", response.status()),
            });
        }
        tracing::debug!(to = %message.to, subject = %message.subject, "mail handed to relay");
        Ok(())
    }
}

#[async_trait]
impl Notifier for MailRelayNotifier {
    async fn send_confirmation(&self, record: &SubmissionRecord) -> Result<()> {
        let Some(to) = record.owner.email_address.as_deref() else {
            return Ok(());
        };
        let message = MailMessage {
            from: &self.settings.from,
            to,
            subject: "RICA Import Permit Application Confirmation",
            html: confirmation_html(record),
        };
        self.send(&message).await
    }

    async fn send_review_notification(&self, record: &SubmissionRecord) -> Result<()> {
        let message = MailMessage {
            from: &self.settings.from,
            to: &self.settings.reviewer,
            subject: "New RICA Import Permit Application for Review",
            html: notification_html(record),
        };
        self.send(&message).await
    }
}

/// An unconfigured relay disables mail instead of refusing to start.
#[async_trait]
impl<N: Notifier> Notifier for Option<N> {
    async fn send_confirmation(&self, record: &SubmissionRecord) -> Result<()> {
        match self {
            Some(notifier) => notifier.send_confirmation(record).await,
            None => {
                tracing::debug!(id = %record.id, "mail relay not configured, skipping confirmation");
                Ok(())
            }
        }
    }

    async fn send_review_notification(&self, record: &SubmissionRecord) -> Result<()> {
        match self {
            Some(notifier) => notifier.send_review_notification(record).await,
            None => {
                tracing::debug!(id = %record.id, "mail relay not configured, skipping notification");
                Ok(())
            }
        }
    }
}

fn display(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "Not Provided",
    }
}

fn confirmation_html(record: &SubmissionRecord) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: auto; border: 1px solid #ddd; padding: 20px;">
  <h2 style="color: #0056b3;">RICA Import Permit Application Confirmation</h2>
  <p>Dear {other_names} {surname},</p>
  <p>Your application for a RICA Import Permit has been successfully submitted. Please keep the details below for your records.</p>
  <hr style="border: 0; border-top: 1px solid #eee;">
  <h3 style="color: #0056b3;">Application Summary</h3>
  <ul style="list-style-type: none; padding: 0;">
    <li style="margin-bottom: 10px;"><strong>Application ID:</strong> {id}</li>
    <li style="margin-bottom: 10px;"><strong>Submission Date:</strong> {date}</li>
    <li style="margin-bottom: 10px;"><strong>Company Name:</strong> {company}</li>
    <li style="margin-bottom: 10px;"><strong>Product Name:</strong> {product}</li>
  </ul>
  <h3 style="color: #0056b3;">What's Next?</h3>
  <p>Our team will now review your application. This process typically takes 5-7 business days. You will receive another email from us once a decision has been made.</p>
  <p>Thank you for using the Irembo service.</p>
  <p style="margin-top: 20px;">Best regards,<br><strong>The Irembo Team</strong></p>
</div>"#,
        other_names = record.owner.other_names,
        surname = record.owner.surname,
        id = record.id,
        date = record.submission_date.format("%Y-%m-%d %H:%M UTC"),
        company = record.business.company_name,
        product = record.product.name,
    )
}

fn notification_html(record: &SubmissionRecord) -> String {
    let owner = &record.owner;
    let business = &record.business;
    let product = &record.product;

    let identity_row = match owner.applicant_citizenship {
        Citizenship::Rwandan => format!(
            r#"<tr><td style="font-weight: bold;">National ID:</td><td>{}</td></tr>"#,
            display(owner.identification_number.as_deref())
        ),
        Citizenship::Foreigner => format!(
            r#"<tr><td style="font-weight: bold;">Passport Number:</td><td>{}</td></tr>"#,
            display(owner.passport_number.as_deref())
        ),
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 700px; margin: auto;">
  <h2 style="color: #d9534f; border-bottom: 2px solid #d9534f; padding-bottom: 10px;">New RICA Import Permit Application for Review</h2>
  <p>A new application has been submitted and requires your attention.</p>
  <h3 style="color: #0056b3;">Business Owner Details</h3>
  <table cellpadding="8" cellspacing="0" style="width: 100%; border-collapse: collapse; border: 1px solid #ddd;">
    <tr><td style="width: 200px; font-weight: bold;">Application ID:</td><td>{id}</td></tr>
    <tr><td style="font-weight: bold;">Citizenship:</td><td>{citizenship}</td></tr>
    {identity_row}
    <tr><td style="font-weight: bold;">Full Name:</td><td>{other_names} {surname}</td></tr>
    <tr><td style="font-weight: bold;">Nationality:</td><td>{nationality}</td></tr>
    <tr><td style="font-weight: bold;">Email:</td><td>{email}</td></tr>
    <tr><td style="font-weight: bold;">Phone:</td><td>{phone_code} {phone_number}</td></tr>
    <tr><td style="font-weight: bold;">Owner Address:</td><td>{owner_district}, {owner_province}</td></tr>
  </table>
  <h3 style="color: #0056b3;">Business Details</h3>
  <table cellpadding="8" cellspacing="0" style="width: 100%; border-collapse: collapse; border: 1px solid #ddd;">
    <tr><td style="width: 200px; font-weight: bold;">Company:</td><td>{company}</td></tr>
    <tr><td style="font-weight: bold;">TIN:</td><td>{tin}</td></tr>
    <tr><td style="font-weight: bold;">Registered:</td><td>{registered}</td></tr>
    <tr><td style="font-weight: bold;">Business Address:</td><td>{business_district}, {business_province}</td></tr>
  </table>
  <h3 style="color: #0056b3;">Product Information</h3>
  <table cellpadding="8" cellspacing="0" style="width: 100%; border-collapse: collapse; border: 1px solid #ddd;">
    <tr><td style="width: 200px; font-weight: bold;">Product:</td><td>{product_name}</td></tr>
    <tr><td style="font-weight: bold;">Quantity:</td><td>{quantity} {unit:?}</td></tr>
    <tr><td style="font-weight: bold;">Weight:</td><td>{weight} kg</td></tr>
    <tr><td style="font-weight: bold;">Description:</td><td>{description}</td></tr>
  </table>
</div>"#,
        id = record.id,
        citizenship = owner.applicant_citizenship.as_str(),
        identity_row = identity_row,
        other_names = owner.other_names,
        surname = owner.surname,
        nationality = nationality_name(&owner.nationality),
        email = display(owner.email_address.as_deref()),
        phone_code = display(owner.phone.country_code.as_deref()),
        phone_number = display(owner.phone.number.as_deref()),
        owner_district = district_name(&owner.address.district),
        owner_province = province_name(&owner.address.province),
        company = business.company_name,
        tin = business.tin,
        registered = business.registration_date,
        business_district = district_name(&business.address.district),
        business_province = province_name(&business.address.province),
        product_name = product.name,
        quantity = product.quantity,
        unit = product.unit_of_measurement,
        weight = product.weight_kg,
        description = product.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{
        Address, BusinessDetails, BusinessType, OwnerDetails, Phone, ProductCategory,
        ProductDetails, Purpose, RequestMeta, Unit,
    };
    use chrono::{NaiveDate, Utc};
    use httpmock::prelude::*;

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            id: "RICA-1700000000000-AB12CD".into(),
            submission_date: Utc::now(),
            status: "Submitted".into(),
            owner: OwnerDetails {
                applicant_citizenship: Citizenship::Rwandan,
                identification_number: Some("1199012345678901".into()),
                passport_number: None,
                other_names: "Aline".into(),
                surname: "Mukamana".into(),
                nationality: "rwandan".into(),
                phone: Phone { country_code: Some("+250".into()), number: Some("788123456".into()) },
                email_address: Some("aline@example.com".into()),
                address: Address { province: "kigali".into(), district: "gasabo".into() },
            },
            business: BusinessDetails {
                business_type: BusinessType::Retailer,
                company_name: "Kigali Trading Ltd".into(),
                tin: "123456789".into(),
                registration_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
                address: Address { province: "kigali".into(), district: "nyarugenge".into() },
            },
            product: ProductDetails {
                purpose: Purpose::DirectSale,
                specify_purpose: None,
                category: ProductCategory::GeneralPurpose,
                name: "Steel rods".into(),
                weight_kg: 120.5,
                unit_of_measurement: Unit::Kgs,
                quantity: 40,
                description: "Reinforcement steel rods for resale.".into(),
            },
            request_meta: RequestMeta::default(),
        }
    }

    fn notifier(endpoint: String) -> MailRelayNotifier {
        MailRelayNotifier::new(MailSettings {
            endpoint,
            from: "no-reply@permits.example".into(),
            reviewer: "review-team@permits.example".into(),
        })
    }

    #[tokio::test]
    async fn confirmation_goes_to_the_applicant() {
        let server = MockServer::start();
        let mail_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send")
                .json_body_partial(r#"{"to": "aline@example.com"}"#);
            then.status(202);
        });

        let notifier = notifier(server.url("/send"));
        notifier.send_confirmation(&record()).await.unwrap();
        mail_mock.assert();
    }

    #[tokio::test]
    async fn review_notification_goes_to_the_reviewer_address() {
        let server = MockServer::start();
        let mail_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send")
                .json_body_partial(r#"{"to": "review-team@permits.example"}"#);
            then.status(202);
        });

        let notifier = notifier(server.url("/send"));
        notifier.send_review_notification(&record()).await.unwrap();
        mail_mock.assert();
    }

    #[tokio::test]
    async fn relay_failure_surfaces_as_notify_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(502);
        });

        let notifier = notifier(server.url("/send"));
        let err = notifier.send_review_notification(&record()).await.unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn missing_relay_is_a_silent_noop() {
        let disabled: Option<MailRelayNotifier> = None;
        disabled.send_confirmation(&record()).await.unwrap();
        disabled.send_review_notification(&record()).await.unwrap();
    }

    #[test]
    fn notification_html_resolves_location_names() {
        let html = notification_html(&record());
        assert!(html.contains("Gasabo, City of Kigali"));
        assert!(html.contains("Nyarugenge, City of Kigali"));
        assert!(html.contains("Rwandan"));
        assert!(html.contains("National ID:"));
    }

    #[test]
    fn confirmation_html_mentions_id_and_company() {
        let html = confirmation_html(&record());
        assert!(html.contains("RICA-1700000000000-AB12CD"));
        assert!(html.contains("Kigali Trading Ltd"));
        assert!(html.contains("Dear Aline Mukamana"));
    }
}
