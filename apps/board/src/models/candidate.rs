use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recruitment-funnel stage. The wire slugs are the French values the
/// Candidate/Application Service speaks; Rust identifiers stay English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "sourcé")]
    Sourced,
    #[serde(rename = "qualifié")]
    Qualified,
    #[serde(rename = "entretien-rh")]
    RhInterview,
    #[serde(rename = "entretien-client")]
    ClientInterview,
    #[serde(rename = "shortlist")]
    Shortlist,
    #[serde(rename = "offre")]
    Offer,
    #[serde(rename = "embauché")]
    Hired,
    #[serde(rename = "rejeté")]
    Rejected,
}

impl Stage {
    /// Visible board columns, in fixed funnel order. `Rejected` is a valid
    /// stage value for records but never gets a column of its own.
    pub const BOARD_COLUMNS: [Stage; 7] = [
        Stage::Sourced,
        Stage::Qualified,
        Stage::RhInterview,
        Stage::ClientInterview,
        Stage::Shortlist,
        Stage::Offer,
        Stage::Hired,
    ];

    /// The wire slug, also used as the column drop-target id in the UI.
    pub fn slug(&self) -> &'static str {
        match self {
            Stage::Sourced => "sourcé",
            Stage::Qualified => "qualifié",
            Stage::RhInterview => "entretien-rh",
            Stage::ClientInterview => "entretien-client",
            Stage::Shortlist => "shortlist",
            Stage::Offer => "offre",
            Stage::Hired => "embauché",
            Stage::Rejected => "rejeté",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Stage> {
        match slug {
            "sourcé" => Some(Stage::Sourced),
            "qualifié" => Some(Stage::Qualified),
            "entretien-rh" => Some(Stage::RhInterview),
            "entretien-client" => Some(Stage::ClientInterview),
            "shortlist" => Some(Stage::Shortlist),
            "offre" => Some(Stage::Offer),
            "embauché" => Some(Stage::Hired),
            "rejeté" => Some(Stage::Rejected),
            _ => None,
        }
    }

    /// Display label for column headers and notices.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Sourced => "Sourced",
            Stage::Qualified => "Qualified",
            Stage::RhInterview => "HR interview",
            Stage::ClientInterview => "Client interview",
            Stage::Shortlist => "Shortlist",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A candidate as seen by the pipeline board: the application-centric view
/// of a person moving through the funnel for a given job. The external
/// service owns these records; the board only mirrors them, mutating the
/// local `stage` as an optimistic shadow of a pending transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub years_experience: u8,
    /// Ordered, duplicates allowed.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub stage: Stage,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_for_every_stage() {
        let all = [
            Stage::Sourced,
            Stage::Qualified,
            Stage::RhInterview,
            Stage::ClientInterview,
            Stage::Shortlist,
            Stage::Offer,
            Stage::Hired,
            Stage::Rejected,
        ];
        for stage in all {
            assert_eq!(Stage::from_slug(stage.slug()), Some(stage));
        }
    }

    #[test]
    fn test_unknown_slug_resolves_to_none() {
        assert_eq!(Stage::from_slug("archived"), None);
        assert_eq!(Stage::from_slug(""), None);
    }

    #[test]
    fn test_board_columns_exclude_rejected() {
        assert_eq!(Stage::BOARD_COLUMNS.len(), 7);
        assert!(!Stage::BOARD_COLUMNS.contains(&Stage::Rejected));
        // Funnel order is fixed: sourced first, hired last.
        assert_eq!(Stage::BOARD_COLUMNS[0], Stage::Sourced);
        assert_eq!(Stage::BOARD_COLUMNS[6], Stage::Hired);
    }

    #[test]
    fn test_stage_serializes_to_french_wire_slug() {
        assert_eq!(
            serde_json::to_string(&Stage::Sourced).unwrap(),
            "\"sourcé\""
        );
        assert_eq!(serde_json::to_string(&Stage::Offer).unwrap(), "\"offre\"");
    }

    #[test]
    fn test_candidate_deserializes_from_service_json() {
        let json = r#"{
            "id": "c1",
            "first_name": "Marie",
            "last_name": "Dupont",
            "email": "marie.dupont@example.com",
            "title": "Backend Engineer",
            "years_experience": 5,
            "tags": ["rust", "remote", "rust"],
            "stage": "qualifié",
            "updated_at": "2026-08-01T09:30:00Z"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, "c1");
        assert_eq!(candidate.stage, Stage::Qualified);
        assert_eq!(candidate.full_name(), "Marie Dupont");
        // Tags keep order and duplicates.
        assert_eq!(candidate.tags, vec!["rust", "remote", "rust"]);
        assert_eq!(candidate.photo_url, None);
    }
}
