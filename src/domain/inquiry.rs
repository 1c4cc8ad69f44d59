// src/domain/inquiry.rs

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// (value, label) pairs for the contact form selects.
pub const SUBJECTS: &[(&str, &str)] = &[
    ("buying", "Buying a Property"),
    ("selling", "Selling a Property"),
    ("renting", "Renting a Property"),
    ("investment", "Investment Opportunities"),
    ("consultation", "General Consultation"),
    ("other", "Other"),
];

pub const PREFERRED_TIMES: &[(&str, &str)] = &[
    ("morning", "Morning (8 AM - 12 PM)"),
    ("afternoon", "Afternoon (12 PM - 5 PM)"),
    ("evening", "Evening (5 PM - 8 PM)"),
    ("anytime", "Anytime"),
];

pub const PROPERTY_INTERESTS: &[(&str, &str)] = &[
    ("house", "Single Family House"),
    ("condo", "Condominium"),
    ("townhouse", "Townhouse"),
    ("apartment", "Apartment"),
    ("commercial", "Commercial Property"),
    ("land", "Land/Lot"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    /// General message from the contact page.
    Contact,
    /// Enquiry about a listing.
    Enquiry,
}

impl InquiryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryKind::Contact => "contact",
            InquiryKind::Enquiry => "enquiry",
        }
    }
}

/// Raw form values as submitted. Kept around so a rejected form can be
/// re-rendered with what the visitor typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub preferred_time: String,
    pub property_type: String,
    pub message: String,
    pub property_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// A validated submission. Nothing downstream stores or delivers it.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub kind: InquiryKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<&'static str>,
    pub preferred_time: Option<&'static str>,
    pub property_type: Option<&'static str>,
    pub message: String,
    pub property_id: Option<u32>,
    pub received_at: DateTime<Utc>,
}

impl InquiryForm {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();

        InquiryForm {
            name: get("name"),
            email: get("email"),
            phone: get("phone"),
            subject: get("subject"),
            preferred_time: get("preferredTime"),
            property_type: get("propertyType"),
            message: get("message"),
            property_id: params
                .get("property")
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Check required fields. Select values outside the offered options are
    /// dropped rather than rejected.
    pub fn validate(&self, kind: InquiryKind, now: DateTime<Utc>) -> Result<Inquiry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Please enter your name.",
            });
        }

        let email = match normalize_email(&self.email) {
            Some(email) => email,
            None => {
                errors.push(FieldError {
                    field: "email",
                    message: "Please enter a valid email address.",
                });
                String::new()
            }
        };

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError {
                field: "message",
                message: "Please enter a message.",
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = Some(self.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Inquiry {
            kind,
            name: name.to_string(),
            email,
            phone,
            subject: option_value(SUBJECTS, &self.subject),
            preferred_time: option_value(PREFERRED_TIMES, &self.preferred_time),
            property_type: option_value(PROPERTY_INTERESTS, &self.property_type),
            message: message.to_string(),
            property_id: self.property_id,
            received_at: now,
        })
    }
}

/// Trim + lowercase; one `@` with text on both sides.
pub fn normalize_email(email: &str) -> Option<String> {
    let e = email.trim().to_lowercase();
    let (local, domain) = e.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(e)
}

fn option_value(options: &[(&'static str, &'static str)], raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    options
        .iter()
        .find(|(value, _)| *value == raw)
        .map(|(value, _)| *value)
}
