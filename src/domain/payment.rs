//! Payments: onboarding fee records, PIX instructions, and proof uploads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a payment record, as maintained by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    ProofUploaded,
    Verified,
    Rejected,
    Expired,
}

/// What a payment record covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Onboarding,
    Monthly,
    Annual,
}

/// A payment record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub user_id: String,
    pub payment_type: PaymentType,
    pub amount: f64,
    pub status: PaymentStatus,
    pub pix_key: Option<String>,
    pub payment_proof_url: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
    pub verified_by: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub reference_month: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Whether the Hub verification actions (approve/reject) apply.
    pub fn awaits_verification(&self) -> bool {
        matches!(
            self.status,
            PaymentStatus::Pending | PaymentStatus::ProofUploaded
        )
    }
}

/// PIX payment instructions shown to an applicant.
#[derive(Debug, Clone, Deserialize)]
pub struct PixInfo {
    pub pix_key: String,
    pub amount: f64,
    pub description: String,
    pub instructions: Vec<String>,
}

/// Response of the payment-proof file upload.
///
/// `url` is relative to the backend base URL; resolve it with
/// [`crate::adapters::backend::UnionApi::resource_url`].
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    pub filename: String,
    pub size: u64,
}

/// Request body linking an uploaded proof to the payment record.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentProofSubmission {
    pub payment_proof_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
}

/// Request body for the Hub's verification decision.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentVerification {
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(status: PaymentStatus) -> Payment {
        Payment {
            id: "p-1".to_string(),
            user_id: "u-1".to_string(),
            payment_type: PaymentType::Onboarding,
            amount: 250.0,
            status,
            pix_key: None,
            payment_proof_url: None,
            payment_date: None,
            verified_by: None,
            verified_at: None,
            rejection_reason: None,
            reference_month: None,
            due_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn status_uses_wire_casing() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::ProofUploaded).unwrap(),
            "\"PROOF_UPLOADED\""
        );
        let status: PaymentStatus = serde_json::from_str("\"VERIFIED\"").unwrap();
        assert_eq!(status, PaymentStatus::Verified);
    }

    #[test]
    fn verification_applies_until_decided() {
        assert!(payment(PaymentStatus::Pending).awaits_verification());
        assert!(payment(PaymentStatus::ProofUploaded).awaits_verification());
        assert!(!payment(PaymentStatus::Verified).awaits_verification());
        assert!(!payment(PaymentStatus::Rejected).awaits_verification());
        assert!(!payment(PaymentStatus::Expired).awaits_verification());
    }
}
