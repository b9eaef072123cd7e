//! The multi-step application wizard.
//!
//! Holds the draft and the current step, gates `next()` on the step's field
//! subset validating clean, and assembles the final submission through a
//! [`SubmissionSink`]. Mirrors the flow the applicant sees: Business Owner
//! Details, Business Details, Product Information, Summary.

use crate::core::rules::SchemaValidator;
use crate::domain::model::fields::*;
use crate::domain::model::{
    ApplicationDraft, Citizenship, FieldError, Purpose, SubmissionReceipt,
};
use crate::domain::ports::{DraftValidator, SubmissionSink};
use crate::utils::error::PermitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BusinessOwner,
    Business,
    Product,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] =
        [Self::BusinessOwner, Self::Business, Self::Product, Self::Summary];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BusinessOwner => "Business Owner Details",
            Self::Business => "Business Details",
            Self::Product => "Product Information",
            Self::Summary => "Summary",
        }
    }

    fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(&self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    /// The draft fields this step is responsible for. The identity field
    /// swaps on citizenship and the justification swaps in when the purpose
    /// is "Other", so the subset depends on the current draft.
    pub fn fields(&self, draft: &ApplicationDraft) -> Vec<&'static str> {
        match self {
            Self::BusinessOwner => {
                let identity = if Citizenship::parse(&draft.applicant_citizenship)
                    == Some(Citizenship::Foreigner)
                {
                    PASSPORT_NUMBER
                } else {
                    IDENTIFICATION_NUMBER
                };
                vec![
                    APPLICANT_CITIZENSHIP,
                    identity,
                    OTHER_NAMES,
                    SURNAME,
                    NATIONALITY,
                    PHONE_COUNTRY_CODE,
                    PHONE_NUMBER,
                    EMAIL_ADDRESS,
                    OWNER_PROVINCE,
                    OWNER_DISTRICT,
                ]
            }
            Self::Business => vec![
                BUSINESS_TYPE,
                COMPANY_NAME,
                TIN_NUMBER,
                REGISTRATION_DATE,
                BUSINESS_PROVINCE,
                BUSINESS_DISTRICT,
            ],
            Self::Product => {
                let mut fields = vec![
                    PURPOSE_OF_IMPORTATION,
                    PRODUCT_CATEGORY,
                    PRODUCT_NAME,
                    WEIGHT,
                    DESCRIPTION,
                    UNIT_OF_MEASUREMENT,
                    QUANTITY,
                ];
                if Purpose::parse(&draft.purpose_of_importation) == Some(Purpose::Other) {
                    fields.push(SPECIFY_PURPOSE);
                }
                fields
            }
            Self::Summary => Vec::new(),
        }
    }
}

/// Why `next()` refused to advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepBlocked {
    /// First invalid field of the current step, for focus/scroll behaviour.
    pub first_invalid: String,
    pub errors: Vec<FieldError>,
}

/// Result of a final submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The sink accepted the draft; the wizard has been reset.
    Accepted(SubmissionReceipt),
    /// Per-field failures; the wizard jumped to the first offending step.
    Invalid { errors: Vec<FieldError> },
    /// Transport or server failure, surfaced as a single banner message.
    Failed { message: String },
}

pub struct WizardController<V: DraftValidator = SchemaValidator> {
    validator: V,
    step: WizardStep,
    draft: ApplicationDraft,
}

impl Default for WizardController<SchemaValidator> {
    fn default() -> Self {
        Self::new(SchemaValidator::new())
    }
}

impl<V: DraftValidator> WizardController<V> {
    pub fn new(validator: V) -> Self {
        Self { validator, step: WizardStep::BusinessOwner, draft: ApplicationDraft::default() }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Mutable access for per-keystroke field updates. Citizenship and
    /// purpose changes should go through the dedicated setters so the
    /// dependent fields get cleared.
    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    /// Switches citizenship and clears the now-irrelevant identity field.
    pub fn set_citizenship(&mut self, citizenship: Citizenship) {
        self.draft.applicant_citizenship = citizenship.as_str().to_string();
        match citizenship {
            Citizenship::Rwandan => self.draft.passport_number.clear(),
            Citizenship::Foreigner => self.draft.identification_number.clear(),
        }
    }

    /// Switches the purpose of importation; anything but "Other" clears the
    /// free-text justification.
    pub fn set_purpose(&mut self, purpose: Purpose) {
        self.draft.purpose_of_importation = match purpose {
            Purpose::DirectSale => "Direct sale",
            Purpose::PersonalUse => "Personal use",
            Purpose::TrialUse => "Trial use",
            Purpose::Other => "Other",
        }
        .to_string();
        if purpose != Purpose::Other {
            self.draft.specify_purpose.clear();
        }
    }

    /// Validates the current step's fields and advances when they are clean.
    /// At the summary step this is a no-op.
    pub fn next(&mut self) -> Result<WizardStep, StepBlocked> {
        let errors = self.step_errors(self.step);
        if let Some(first) = errors.first() {
            return Err(StepBlocked { first_invalid: first.field.clone(), errors });
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Steps back unconditionally, saturating at the first step.
    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Re-validates the whole draft and submits it through the sink.
    ///
    /// On validation failure (local or rejected by the server) the wizard
    /// jumps to the first step owning an invalid field. On success the draft
    /// is discarded and the wizard returns to the first step.
    pub async fn submit<S: SubmissionSink>(&mut self, sink: &S) -> SubmitOutcome {
        let errors = self.validator.validate(&self.draft);
        if !errors.is_empty() {
            self.jump_to_first_invalid(&errors);
            return SubmitOutcome::Invalid { errors };
        }

        match sink.submit(&self.draft).await {
            Ok(receipt) => {
                self.reset();
                SubmitOutcome::Accepted(receipt)
            }
            Err(PermitError::ValidationError { errors }) => {
                self.jump_to_first_invalid(&errors);
                SubmitOutcome::Invalid { errors }
            }
            Err(other) => SubmitOutcome::Failed { message: other.to_string() },
        }
    }

    /// Drops the draft and starts over.
    pub fn reset(&mut self) {
        self.draft = ApplicationDraft::default();
        self.step = WizardStep::BusinessOwner;
    }

    fn step_errors(&self, step: WizardStep) -> Vec<FieldError> {
        let scope = step.fields(&self.draft);
        self.validator
            .validate(&self.draft)
            .into_iter()
            .filter(|e| scope.contains(&e.field.as_str()))
            .collect()
    }

    fn jump_to_first_invalid(&mut self, errors: &[FieldError]) {
        for step in WizardStep::ALL {
            let scope = step.fields(&self.draft);
            if errors.iter().any(|e| scope.contains(&e.field.as_str())) {
                self.step = step;
                return;
            }
        }
    }
}
