//! Wizard session: owns the current step and the aggregate document. Every
//! transition is explicit and user-triggered; no transition can fail, and
//! downstream save/load failures never touch session state.

use tracing::debug;

use crate::document::completeness::{self, SectionStatus};
use crate::document::skills;
use crate::errors::AppError;
use crate::models::document::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument,
};
use crate::wizard::step::Step;

/// One whole top-level document fragment, as handed back by a section
/// editor. The typed form of the original `updateSection(key, value)`
/// callback payload.
#[derive(Debug, Clone)]
pub enum SectionPatch {
    PersonalInfo(PersonalInfo),
    Education(Vec<EducationEntry>),
    Experience(Vec<ExperienceEntry>),
    Skills(Vec<String>),
    Projects(Vec<ProjectEntry>),
    Certifications(Vec<CertificationEntry>),
}

pub struct WizardSession {
    current_step: Step,
    document: ResumeDocument,
    dirty: bool,
}

impl WizardSession {
    pub fn new(document: ResumeDocument) -> Self {
        Self {
            current_step: Step::PersonalInfo,
            document,
            dirty: false,
        }
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Unsaved edits since the last save (or since the session started).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Jumps to step `n`. Out-of-range targets are silently ignored.
    pub fn go_to_step(&mut self, n: u8) {
        match Step::from_number(n) {
            Some(step) => self.current_step = step,
            None => debug!("ignoring out-of-range step target {n}"),
        }
    }

    pub fn next(&mut self) {
        self.current_step = self.current_step.next();
    }

    pub fn back(&mut self) {
        self.current_step = self.current_step.back();
    }

    /// Jumps straight to the review step from anywhere.
    pub fn finish(&mut self) {
        self.current_step = Step::Preview;
    }

    /// Replaces one top-level document fragment. Skills are deduplicated on
    /// the way in; an education replacement that would empty the list is
    /// rejected so the length invariant stays enforced in one place.
    pub fn replace_section(&mut self, patch: SectionPatch) -> Result<(), AppError> {
        match patch {
            SectionPatch::PersonalInfo(info) => self.document.personal_info = info,
            SectionPatch::Education(entries) => {
                if entries.is_empty() {
                    return Err(AppError::Validation(
                        "a resume keeps at least one education entry".to_string(),
                    ));
                }
                self.document.education = entries;
            }
            SectionPatch::Experience(entries) => self.document.experience = entries,
            SectionPatch::Skills(values) => self.document.skills = skills::deduped(values),
            SectionPatch::Projects(entries) => self.document.projects = entries,
            SectionPatch::Certifications(entries) => self.document.certifications = entries,
        }
        self.dirty = true;
        Ok(())
    }

    /// Per-step badge for the progress indicator, derived from the document.
    pub fn step_status(&self, step: Step) -> SectionStatus {
        let doc = &self.document;
        match step {
            Step::PersonalInfo => completeness::personal_info_status(&doc.personal_info),
            Step::Education => completeness::education_status(&doc.education),
            Step::Experience => completeness::experience_status(&doc.experience),
            Step::Skills => completeness::skills_status(&doc.skills),
            Step::Projects => completeness::projects_status(&doc.projects),
            Step::Certifications => completeness::certifications_status(&doc.certifications),
            Step::Preview => {
                if completeness::is_complete(doc) {
                    SectionStatus::Done
                } else {
                    SectionStatus::Empty
                }
            }
        }
    }
}
