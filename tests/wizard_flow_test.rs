use anyhow::Result;
use httpmock::prelude::*;
use rica_permit::core::wizard::{SubmitOutcome, WizardController, WizardStep};
use rica_permit::domain::model::{ApplicationDraft, Citizenship, Purpose};
use rica_permit::HttpSubmissionSink;

fn fill_valid(wizard: &mut WizardController) {
    let draft = wizard.draft_mut();
    draft.identification_number = "1199012345678901".into();
    draft.other_names = "Aline".into();
    draft.surname = "Mukamana".into();
    draft.nationality = "rwandan".into();
    draft.email_address = "aline@example.com".into();
    draft.owner_province = "kigali".into();
    draft.owner_district = "gasabo".into();
    draft.company_name = "Kigali Trading Ltd".into();
    draft.tin_number = "123456789".into();
    draft.registration_date = "2022-03-15".into();
    draft.business_province = "kigali".into();
    draft.business_district = "nyarugenge".into();
    draft.product_category = "General purpose".into();
    draft.product_name = "Steel rods".into();
    draft.weight = "120.5".into();
    draft.description = "Reinforcement steel rods for resale.".into();
    draft.unit_of_measurement = "Kgs".into();
    draft.quantity = "40".into();
}

#[tokio::test]
async fn full_wizard_flow_against_the_api() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/applications")
            .json_body_partial(r#"{"companyName": "Kigali Trading Ltd"}"#);
        then.status(201).json_body(serde_json::json!({
            "success": true,
            "message": "Application submitted successfully",
            "data": {
                "applicationId": "RICA-1700000000000-AB12CD",
                "submissionDate": "2026-08-23T10:00:00Z",
                "status": "Submitted"
            }
        }));
    });

    let mut wizard = WizardController::default();
    fill_valid(&mut wizard);

    assert_eq!(wizard.next().unwrap(), WizardStep::Business);
    assert_eq!(wizard.next().unwrap(), WizardStep::Product);
    assert_eq!(wizard.next().unwrap(), WizardStep::Summary);

    let sink = HttpSubmissionSink::new(server.base_url());
    match wizard.submit(&sink).await {
        SubmitOutcome::Accepted(receipt) => {
            assert_eq!(receipt.application_id, "RICA-1700000000000-AB12CD");
        }
        other => panic!("expected acceptance, got {other:?}"),
    }

    api_mock.assert();
    // Draft is discarded after a successful submission.
    assert_eq!(*wizard.draft(), ApplicationDraft::default());
    assert_eq!(wizard.step(), WizardStep::BusinessOwner);
    Ok(())
}

#[tokio::test]
async fn conditional_fields_swap_through_the_whole_flow() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/applications")
            .json_body_partial(
                r#"{"applicantCitizenship": "Foreigner", "passportNumber": "PC1234567", "identificationNumber": "", "purposeOfImportation": "Other", "specifyPurpose": "Laboratory calibration"}"#,
            );
        then.status(201).json_body(serde_json::json!({
            "success": true,
            "data": {
                "applicationId": "RICA-1700000000001-EF34GH",
                "submissionDate": "2026-08-23T10:05:00Z",
                "status": "Submitted"
            }
        }));
    });

    let mut wizard = WizardController::default();
    fill_valid(&mut wizard);

    // Flip to foreigner: the national id is cleared and the passport becomes
    // the gating identity field.
    wizard.set_citizenship(Citizenship::Foreigner);
    assert!(wizard.draft().identification_number.is_empty());
    assert_eq!(wizard.next().unwrap_err().first_invalid, "passportNumber");
    wizard.draft_mut().passport_number = "PC1234567".into();
    wizard.next().unwrap();
    wizard.next().unwrap();

    // "Other" purpose demands the justification before leaving the step.
    wizard.set_purpose(Purpose::Other);
    assert_eq!(wizard.next().unwrap_err().first_invalid, "specifyPurpose");
    wizard.draft_mut().specify_purpose = "Laboratory calibration".into();
    wizard.next().unwrap();

    let sink = HttpSubmissionSink::new(server.base_url());
    assert!(matches!(wizard.submit(&sink).await, SubmitOutcome::Accepted(_)));
    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn server_rejection_sends_the_wizard_back_to_the_offending_step() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/applications");
        then.status(400).json_body(serde_json::json!({
            "success": false,
            "message": "Validation error. Please check the provided data.",
            "errors": [
                { "field": "tinNumber", "message": "Please provide a valid 9-digit TIN number." }
            ]
        }));
    });

    let mut wizard = WizardController::default();
    fill_valid(&mut wizard);
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();

    let sink = HttpSubmissionSink::new(server.base_url());
    match wizard.submit(&sink).await {
        SubmitOutcome::Invalid { errors } => {
            assert_eq!(errors[0].field, "tinNumber");
        }
        other => panic!("expected invalid, got {other:?}"),
    }
    assert_eq!(wizard.step(), WizardStep::Business);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_surfaces_a_banner_and_keeps_the_draft() -> Result<()> {
    let mut wizard = WizardController::default();
    fill_valid(&mut wizard);

    // Nothing is listening here.
    let sink = HttpSubmissionSink::new("http://127.0.0.1:1");
    match wizard.submit(&sink).await {
        SubmitOutcome::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_ne!(*wizard.draft(), ApplicationDraft::default());
    Ok(())
}
