use serde::{Deserialize, Serialize};

use crate::models::document::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    /// The section would count toward a complete resume as it stands.
    Done,
    /// Something was typed but the section's primary requirement is unmet.
    Started,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: String,
    pub status: SectionStatus,
    pub required: bool,
    pub entry_count: usize,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub complete: bool,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<String>,
}

/// The completion invariant: name, email and phone present, at least one
/// education entry with a degree, and a non-empty skills list.
pub fn is_complete(doc: &ResumeDocument) -> bool {
    let info = &doc.personal_info;
    !info.name.is_empty()
        && !info.email.is_empty()
        && !info.phone.is_empty()
        && doc.education.iter().any(|e| !e.degree.is_empty())
        && !doc.skills.is_empty()
}

pub fn personal_info_status(info: &PersonalInfo) -> SectionStatus {
    let required_filled = !info.name.is_empty() && !info.email.is_empty() && !info.phone.is_empty();
    if required_filled {
        return SectionStatus::Done;
    }
    let any_filled = [
        &info.name,
        &info.email,
        &info.phone,
        &info.location,
        &info.linkedin,
        &info.website,
        &info.summary,
    ]
    .iter()
    .any(|field| !field.is_empty());
    if any_filled {
        SectionStatus::Started
    } else {
        SectionStatus::Empty
    }
}

pub fn education_status(entries: &[EducationEntry]) -> SectionStatus {
    if entries.iter().any(|e| !e.degree.is_empty()) {
        return SectionStatus::Done;
    }
    let any_filled = entries
        .iter()
        .any(|e| !e.institution.is_empty() || !e.year.is_empty() || !e.cgpa.is_empty());
    if any_filled {
        SectionStatus::Started
    } else {
        SectionStatus::Empty
    }
}

pub fn experience_status(entries: &[ExperienceEntry]) -> SectionStatus {
    if entries.iter().any(|e| !e.title.is_empty()) {
        return SectionStatus::Done;
    }
    let any_filled = entries
        .iter()
        .any(|e| !e.company.is_empty() || !e.duration.is_empty() || !e.description.is_empty());
    if any_filled {
        SectionStatus::Started
    } else {
        SectionStatus::Empty
    }
}

pub fn skills_status(skills: &[String]) -> SectionStatus {
    if skills.is_empty() {
        SectionStatus::Empty
    } else {
        SectionStatus::Done
    }
}

pub fn projects_status(entries: &[ProjectEntry]) -> SectionStatus {
    if entries.iter().any(|e| !e.name.is_empty()) {
        return SectionStatus::Done;
    }
    let any_filled = entries.iter().any(|e| {
        !e.description.is_empty() || !e.technologies.is_empty() || !e.link.is_empty()
    });
    if any_filled {
        SectionStatus::Started
    } else {
        SectionStatus::Empty
    }
}

pub fn certifications_status(entries: &[CertificationEntry]) -> SectionStatus {
    if entries.iter().any(|e| !e.name.is_empty()) {
        return SectionStatus::Done;
    }
    let any_filled = entries
        .iter()
        .any(|e| !e.issuer.is_empty() || !e.year.is_empty() || !e.credential_id.is_empty());
    if any_filled {
        SectionStatus::Started
    } else {
        SectionStatus::Empty
    }
}

pub fn compute_completeness_report(doc: &ResumeDocument) -> CompletenessReport {
    let mut sections = Vec::new();
    let mut missing_sections = Vec::new();

    let info = &doc.personal_info;
    let mut personal_recs = Vec::new();
    let mut missing_fields = Vec::new();
    for (label, value) in [
        ("name", &info.name),
        ("email", &info.email),
        ("phone", &info.phone),
    ] {
        if value.is_empty() {
            missing_fields.push(label);
        }
    }
    if !missing_fields.is_empty() {
        personal_recs.push(format!("Fill in your {}", missing_fields.join(", ")));
    }
    push_section(
        &mut sections,
        &mut missing_sections,
        "personal_info",
        personal_info_status(info),
        true,
        1,
        personal_recs,
    );

    let mut education_recs = Vec::new();
    let degreeless = doc
        .education
        .iter()
        .filter(|e| e.degree.is_empty())
        .count();
    if education_status(&doc.education) != SectionStatus::Done {
        education_recs.push("Add at least one education entry with a degree".to_string());
    } else if degreeless > 0 {
        education_recs.push(format!(
            "{} education entries have no degree and will not appear in the preview",
            degreeless
        ));
    }
    push_section(
        &mut sections,
        &mut missing_sections,
        "education",
        education_status(&doc.education),
        true,
        doc.education.len(),
        education_recs,
    );

    let mut experience_recs = Vec::new();
    let titleless = doc
        .experience
        .iter()
        .filter(|e| e.title.is_empty())
        .count();
    if titleless > 0 {
        experience_recs.push(format!(
            "{} experience entries have no title and will not appear in the preview",
            titleless
        ));
    }
    push_section(
        &mut sections,
        &mut missing_sections,
        "experience",
        experience_status(&doc.experience),
        false,
        doc.experience.len(),
        experience_recs,
    );

    let mut skills_recs = Vec::new();
    if doc.skills.is_empty() {
        skills_recs.push("Add at least one skill".to_string());
    }
    push_section(
        &mut sections,
        &mut missing_sections,
        "skills",
        skills_status(&doc.skills),
        true,
        doc.skills.len(),
        skills_recs,
    );

    let mut project_recs = Vec::new();
    let nameless = doc.projects.iter().filter(|e| e.name.is_empty()).count();
    if nameless > 0 {
        project_recs.push(format!(
            "{} project entries have no name and will not appear in the preview",
            nameless
        ));
    }
    push_section(
        &mut sections,
        &mut missing_sections,
        "projects",
        projects_status(&doc.projects),
        false,
        doc.projects.len(),
        project_recs,
    );

    push_section(
        &mut sections,
        &mut missing_sections,
        "certifications",
        certifications_status(&doc.certifications),
        false,
        doc.certifications.len(),
        Vec::new(),
    );

    CompletenessReport {
        complete: is_complete(doc),
        sections,
        missing_sections,
    }
}

fn push_section(
    sections: &mut Vec<SectionHealth>,
    missing_sections: &mut Vec<String>,
    name: &str,
    status: SectionStatus,
    required: bool,
    entry_count: usize,
    recommendations: Vec<String>,
) {
    if required && status != SectionStatus::Done {
        missing_sections.push(name.to_string());
    }
    sections.push(SectionHealth {
        section: name.to_string(),
        status,
        required,
        entry_count,
        recommendations,
    });
}
