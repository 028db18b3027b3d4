//! Document entity - a reference to a file hosted on Google Drive

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Document category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Submission,
    Signed,
    Proposal,
    Update,
}

impl DocumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Signed => "signed",
            Self::Proposal => "proposal",
            Self::Update => "update",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "submission" => Some(Self::Submission),
            "signed" => Some(Self::Signed),
            "proposal" => Some(Self::Proposal),
            "update" => Some(Self::Update),
            _ => None,
        }
    }
}

/// Check that a link points at Google Drive or Google Docs.
/// Links are stored as opaque strings; only the host is validated.
pub fn is_drive_link(link: &str) -> bool {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));
    let Some(rest) = rest else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or("");
    host == "drive.google.com" || host == "docs.google.com"
}

/// Document entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: Snowflake,
    pub uploader_id: Snowflake,
    pub title: String,
    pub drive_link: String,
    pub doc_type: DocumentType,
    /// Admin-uploaded documents visible to everyone
    pub is_global: bool,
    /// Teams an admin shared this document with
    pub team_ids: Vec<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        id: Snowflake,
        uploader_id: Snowflake,
        title: String,
        drive_link: String,
        doc_type: DocumentType,
    ) -> Self {
        Self {
            id,
            uploader_id,
            title,
            drive_link,
            doc_type,
            is_global: false,
            team_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_uploader(&self, user_id: Snowflake) -> bool {
        self.uploader_id == user_id
    }

    #[inline]
    pub fn is_shared_with(&self, team_id: Snowflake) -> bool {
        self.team_ids.contains(&team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_link_validation() {
        assert!(is_drive_link("https://drive.google.com/file/d/abc123/view"));
        assert!(is_drive_link("https://docs.google.com/document/d/xyz/edit"));
        assert!(is_drive_link("http://drive.google.com/open?id=1"));
        assert!(!is_drive_link("https://dropbox.com/s/abc"));
        assert!(!is_drive_link("https://evil.com/drive.google.com/x"));
        assert!(!is_drive_link("drive.google.com/no-scheme"));
        assert!(!is_drive_link(""));
    }

    #[test]
    fn test_doc_type_parse() {
        for s in ["submission", "signed", "proposal", "update"] {
            assert_eq!(DocumentType::parse(s).unwrap().as_str(), s);
        }
        assert_eq!(DocumentType::parse("invoice"), None);
    }

    #[test]
    fn test_sharing() {
        let mut doc = Document::new(
            Snowflake::new(1),
            Snowflake::new(10),
            "Signed waiver".to_string(),
            "https://drive.google.com/file/d/abc/view".to_string(),
            DocumentType::Signed,
        );
        assert!(doc.is_uploader(Snowflake::new(10)));
        assert!(!doc.is_shared_with(Snowflake::new(20)));

        doc.team_ids.push(Snowflake::new(20));
        assert!(doc.is_shared_with(Snowflake::new(20)));
    }
}
