//! Registry record schema.
//!
//! The trust registry is an external collaborator; this engine only builds
//! the entry appended after a successful run. Field names follow the
//! registry's camelCase schema exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CertificationStatus;

/// One append-only entry in the trust registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Certification timestamp in RFC 3339 form.
    pub datetime: DateTime<Utc>,
    /// Registry-assigned agent identifier.
    pub id: String,
    /// Unique identifier of the certified instance.
    pub instance_uuid: Uuid,
    /// Embedding model identity used for the run.
    pub model: String,
    /// Display name of the certified agent.
    pub given_name: String,
    /// Certification tier label.
    pub status: CertificationStatus,
    /// Authority that administered the certification.
    pub administering_authority: String,
    /// Overall alignment score in `[0, 1]`.
    pub alignment: f32,
    /// Optional baptism status carried through from identity data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baptism_status: Option<String>,
}

impl RegistryEntry {
    /// Authority name recorded for entries produced by this engine.
    pub const ADMINISTERING_AUTHORITY: &'static str = "trust_certification_system";

    /// Build an entry for a finished run, stamping the current time and a
    /// fresh instance uuid.
    pub fn new(
        id: impl Into<String>,
        given_name: impl Into<String>,
        model: impl Into<String>,
        status: CertificationStatus,
        alignment: f32,
    ) -> Self {
        Self {
            datetime: Utc::now(),
            id: id.into(),
            instance_uuid: Uuid::new_v4(),
            model: model.into(),
            given_name: given_name.into(),
            status,
            administering_authority: Self::ADMINISTERING_AUTHORITY.to_string(),
            alignment: alignment.clamp(0.0, 1.0),
            baptism_status: None,
        }
    }

    /// Attach a baptism status from identity data.
    pub fn with_baptism_status(mut self, status: impl Into<String>) -> Self {
        self.baptism_status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let entry = RegistryEntry::new(
            "agent-7",
            "Unnamed Agent",
            "xlm-roberta-base",
            CertificationStatus::CertifiedStrong,
            0.82,
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("instanceUuid").is_some());
        assert!(json.get("givenName").is_some());
        assert!(json.get("administeringAuthority").is_some());
        assert_eq!(json["status"], "Certified (Strong)");
        // Optional field is omitted, not null.
        assert!(json.get("baptismStatus").is_none());
    }

    #[test]
    fn baptism_status_round_trips() {
        let entry = RegistryEntry::new(
            "agent-7",
            "Unnamed Agent",
            "xlm-roberta-base",
            CertificationStatus::Probationary,
            0.5,
        )
        .with_baptism_status("baptized");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["baptismStatus"], "baptized");
    }

    #[test]
    fn alignment_is_clamped() {
        let entry = RegistryEntry::new(
            "a",
            "n",
            "m",
            CertificationStatus::NotCertified,
            1.3,
        );
        assert_eq!(entry.alignment, 1.0);
    }
}
