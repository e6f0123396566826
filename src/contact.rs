use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Whatsapp,
    Phone,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Whatsapp,
        ContactMethod::Phone,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Whatsapp => "WhatsApp",
            ContactMethod::Phone => "Phone",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralSource {
    Linkedin,
    Referral,
    Google,
    Social,
    Other,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 5] = [
        ReferralSource::Linkedin,
        ReferralSource::Referral,
        ReferralSource::Google,
        ReferralSource::Social,
        ReferralSource::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ReferralSource::Linkedin => "linkedin",
            ReferralSource::Referral => "referral",
            ReferralSource::Google => "google",
            ReferralSource::Social => "social",
            ReferralSource::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferralSource::Linkedin => "LinkedIn",
            ReferralSource::Referral => "Referral",
            ReferralSource::Google => "Google Search",
            ReferralSource::Social => "Social Media",
            ReferralSource::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Location,
    Challenge,
    ContactMethod,
    Referral,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Location,
        Field::Challenge,
        Field::ContactMethod,
    ];

    /// The `name` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Location => "location",
            Field::Challenge => "challenge",
            Field::ContactMethod => "contactMethod",
            Field::Referral => "hearAbout",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub challenge: String,
    pub contact_method: Option<ContactMethod>,
    #[serde(rename = "hearAbout")]
    pub referral: Option<ReferralSource>,
    pub message: String,
}

pub enum FormAction {
    Set(Field, String),
    Reset,
}

impl ContactForm {
    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| match field {
                Field::FullName => self.full_name.trim().is_empty(),
                Field::Email => self.email.trim().is_empty(),
                Field::Location => self.location.trim().is_empty(),
                Field::Challenge => self.challenge.trim().is_empty(),
                Field::ContactMethod => self.contact_method.is_none(),
                Field::Referral | Field::Message => false,
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Raw control value for `field`, as rendered into the DOM.
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Email => self.email.clone(),
            Field::Location => self.location.clone(),
            Field::Challenge => self.challenge.clone(),
            Field::ContactMethod => self
                .contact_method
                .map(|m| m.value().to_string())
                .unwrap_or_default(),
            Field::Referral => self
                .referral
                .map(|r| r.value().to_string())
                .unwrap_or_default(),
            Field::Message => self.message.clone(),
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Location => self.location = value,
            Field::Challenge => self.challenge = value,
            Field::ContactMethod => self.contact_method = ContactMethod::from_value(&value),
            Field::Referral => self.referral = ReferralSource::from_value(&value),
            Field::Message => self.message = value,
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Set(field, value) => {
                let mut next = (*self).clone();
                next.set(field, value);
                next.into()
            }
            FormAction::Reset => Rc::new(ContactForm::default()),
        }
    }
}

/// Where a submission is delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    /// No network: wait `delay_ms`, then succeed.
    Simulated { delay_ms: u32 },
    /// POST the form as JSON to this URL.
    Endpoint(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("The message could not be delivered (HTTP {status}). Please try again or reach out directly.")]
    Rejected { status: u16 },
}

/// Deliver a completed contact form.
pub async fn submit_contact(form: &ContactForm, target: &SubmitTarget) -> Result<(), SubmitError> {
    match target {
        SubmitTarget::Simulated { delay_ms } => {
            info!("Simulating contact submission ({delay_ms} ms)");
            TimeoutFuture::new(*delay_ms).await;
            Ok(())
        }
        SubmitTarget::Endpoint(url) => {
            info!("Posting contact submission to {url}");
            let response = Request::post(url).json(form)?.send().await?;
            if response.ok() {
                Ok(())
            } else {
                warn!("Contact endpoint answered {}", response.status());
                Err(SubmitError::Rejected {
                    status: response.status(),
                })
            }
        }
    }
}
