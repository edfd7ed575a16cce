#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserIdentity;

/// Contact and headline fields. Empty string means unset; name, email and
/// phone are the three fields the completion invariant requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub cgpa: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            institution: String::new(),
            year: String::new(),
            cgpa: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            company: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub credential_id: String,
}

impl CertificationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            year: String::new(),
            credential_id: String::new(),
        }
    }
}

/// The aggregate resume record. Owned by the wizard session for the duration
/// of an editing session and mutated only through section replacement.
///
/// Invariants:
/// - `education` never drops below one entry.
/// - `skills` holds no duplicate values (case-sensitive exact match).
/// - Entry ids are unique within their list and stable across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeDocument {
    /// A fresh document seeds one blank education entry so the education
    /// list satisfies its length invariant from the start.
    pub fn new() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            education: vec![EducationEntry::blank()],
            experience: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
        }
    }

    /// A fresh document with name/email/phone copied from the logged-in
    /// user's profile.
    pub fn prefilled(identity: &UserIdentity) -> Self {
        let mut doc = Self::new();
        doc.personal_info.name = identity.name.clone();
        doc.personal_info.email = identity.email.clone();
        doc.personal_info.phone = identity.phone.clone();
        doc
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::new()
    }
}
