//! Interactive shell — the terminal stand-in for the wizard's form UI.
//! Parses line commands and dispatches them onto the session. All domain
//! rules live in the document and wizard modules; the shell only maps
//! 1-based display positions to entry ids and prints inline messages.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;

use crate::document::completeness::{compute_completeness_report, is_complete, SectionStatus};
use crate::document::entries::{self, RemoveOutcome};
use crate::document::skills;
use crate::document::technologies::{format_technologies, parse_technologies};
use crate::models::document::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
};
use crate::preview;
use crate::state::AppState;
use crate::wizard::session::{SectionPatch, WizardSession};
use crate::wizard::step::{Step, STEP_COUNT};

const PERSONAL_FIELDS: &str = "name, email, phone, location, linkedin, website, summary";
const EDUCATION_FIELDS: &str = "degree, institution, year, cgpa";
const EXPERIENCE_FIELDS: &str = "title, company, duration, description";
const PROJECT_FIELDS: &str = "name, description, technologies, link";
const CERTIFICATION_FIELDS: &str = "name, issuer, year, credential";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Show,
    Status,
    Preview,
    Next,
    Back,
    GoTo(u8),
    Finish,
    Edit { field: String, value: String },
    Add,
    Remove(usize),
    Set { position: usize, field: String, value: String },
    SkillAdd(String),
    SkillRemove(usize),
    SkillSuggest,
    Save,
    Export(Option<String>),
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "help" => Ok(Command::Help),
        "show" => Ok(Command::Show),
        "status" => Ok(Command::Status),
        "preview" => Ok(Command::Preview),
        "next" => Ok(Command::Next),
        "back" => Ok(Command::Back),
        "finish" => Ok(Command::Finish),
        "save" => Ok(Command::Save),
        "quit" | "exit" => Ok(Command::Quit),
        "add" => Ok(Command::Add),
        "goto" => rest
            .parse::<u8>()
            .map(Command::GoTo)
            .map_err(|_| "usage: goto <step number>".to_string()),
        "remove" => rest
            .parse::<usize>()
            .map(Command::Remove)
            .map_err(|_| "usage: remove <entry number>".to_string()),
        "edit" => {
            let (field, value) =
                split_field_value(rest).ok_or_else(|| "usage: edit <field> [value]".to_string())?;
            Ok(Command::Edit { field, value })
        }
        "set" => {
            let usage = || "usage: set <entry number> <field> [value]".to_string();
            let (position, tail) = rest.split_once(char::is_whitespace).ok_or_else(usage)?;
            let position = position.parse::<usize>().map_err(|_| usage())?;
            let (field, value) = split_field_value(tail.trim()).ok_or_else(usage)?;
            Ok(Command::Set {
                position,
                field,
                value,
            })
        }
        "skill" => {
            let (sub, tail) = match rest.split_once(char::is_whitespace) {
                Some((sub, tail)) => (sub, tail.trim()),
                None => (rest, ""),
            };
            match sub {
                "add" if !tail.is_empty() => Ok(Command::SkillAdd(tail.to_string())),
                "remove" => tail
                    .parse::<usize>()
                    .map(Command::SkillRemove)
                    .map_err(|_| "usage: skill remove <number>".to_string()),
                "suggest" => Ok(Command::SkillSuggest),
                _ => Err("usage: skill add <name> | skill remove <number> | skill suggest"
                    .to_string()),
            }
        }
        "export" => Ok(Command::Export(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        })),
        other => Err(format!(
            "unknown command '{other}', type 'help' for the command list"
        )),
    }
}

fn split_field_value(rest: &str) -> Option<(String, String)> {
    if rest.is_empty() {
        return None;
    }
    match rest.split_once(char::is_whitespace) {
        Some((field, value)) => Some((field.to_string(), value.trim().to_string())),
        None => Some((rest.to_string(), String::new())),
    }
}

pub fn run(mut session: WizardSession, state: AppState) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    writeln!(out, "CareerSphere resume wizard. Type 'help' for commands.")?;
    print_step(&session, &mut out)?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            prompt(&mut out)?;
            continue;
        }
        match parse_command(trimmed) {
            Ok(Command::Quit) => {
                if session.is_dirty() {
                    writeln!(out, "Unsaved changes discarded.")?;
                }
                break;
            }
            Ok(cmd) => dispatch(cmd, &mut session, &state, &mut out)?,
            Err(msg) => writeln!(out, "{msg}")?,
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

pub fn dispatch(
    cmd: Command,
    session: &mut WizardSession,
    state: &AppState,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        Command::Help => print_help(out)?,
        Command::Show => print_step(session, out)?,
        Command::Status => print_status(session, state, out)?,
        Command::Preview => {
            let rendered = preview::render(session.document());
            if rendered.is_empty() {
                writeln!(out, "(nothing to preview yet)")?;
            } else {
                writeln!(out, "{rendered}")?;
            }
        }
        Command::Next => {
            if session.current_step() == Step::Skills && session.document().skills.is_empty() {
                writeln!(out, "Tip: a resume needs at least one skill to be complete.")?;
            }
            session.next();
            print_step(session, out)?;
        }
        Command::Back => {
            session.back();
            print_step(session, out)?;
        }
        Command::GoTo(n) => {
            session.go_to_step(n);
            print_step(session, out)?;
        }
        Command::Finish => {
            session.finish();
            print_step(session, out)?;
        }
        Command::Edit { field, value } => handle_edit(session, &field, &value, out)?,
        Command::Add => handle_add(session, out)?,
        Command::Remove(position) => handle_remove(session, position, out)?,
        Command::Set {
            position,
            field,
            value,
        } => handle_set(session, position, &field, &value, out)?,
        Command::SkillAdd(raw) => {
            let mut values = session.document().skills.clone();
            if skills::add_skill(&mut values, &raw) {
                if apply_patch(session, SectionPatch::Skills(values), out)? {
                    writeln!(out, "Added skill '{}'.", raw.trim())?;
                }
            } else {
                writeln!(out, "Skill is empty or already added.")?;
            }
        }
        Command::SkillRemove(position) => {
            let mut values = session.document().skills.clone();
            let removed = position
                .checked_sub(1)
                .map(|i| skills::remove_skill(&mut values, i))
                .unwrap_or(false);
            if removed {
                if apply_patch(session, SectionPatch::Skills(values), out)? {
                    writeln!(out, "Removed skill {position}.")?;
                }
            } else {
                writeln!(out, "No skill {position}.")?;
            }
        }
        Command::SkillSuggest => {
            let remaining = skills::remaining_suggestions(&session.document().skills);
            if remaining.is_empty() {
                writeln!(out, "No suggestions left.")?;
            } else {
                writeln!(out, "Suggestions: {}", remaining.join(", "))?;
            }
        }
        Command::Save => match state.store.save(session.document()) {
            Ok(()) => {
                session.mark_saved();
                if is_complete(session.document()) {
                    writeln!(out, "Saved. Resume is complete.")?;
                } else {
                    let report = compute_completeness_report(session.document());
                    writeln!(
                        out,
                        "Saved. Resume is not complete yet (missing: {}).",
                        report.missing_sections.join(", ")
                    )?;
                }
            }
            Err(e) => writeln!(out, "{}", e.user_message())?,
        },
        Command::Export(path) => {
            let path =
                path.unwrap_or_else(|| format!("{}/resume.md", state.config.data_dir));
            let mut content = preview::render(session.document());
            content.push_str(&format!(
                "\n---\nExported {}\n",
                Utc::now().format("%Y-%m-%d %H:%M UTC")
            ));
            match std::fs::write(&path, content) {
                Ok(()) => writeln!(out, "Exported to {path}.")?,
                Err(e) => {
                    tracing::error!("export to {path} failed: {e}");
                    writeln!(out, "Could not write {path}.")?;
                }
            }
        }
        Command::Quit => {}
    }
    Ok(())
}

/// Applies a section replacement, printing the inline message on rejection.
fn apply_patch(
    session: &mut WizardSession,
    patch: SectionPatch,
    out: &mut impl Write,
) -> Result<bool> {
    match session.replace_section(patch) {
        Ok(()) => Ok(true),
        Err(e) => {
            writeln!(out, "{}", e.user_message())?;
            Ok(false)
        }
    }
}

fn handle_edit(
    session: &mut WizardSession,
    field: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    if session.current_step() != Step::PersonalInfo {
        writeln!(out, "'edit' applies to the Personal Info step (goto 1).")?;
        return Ok(());
    }
    let mut info = session.document().personal_info.clone();
    if !set_personal_field(&mut info, field, value) {
        writeln!(out, "Unknown field '{field}'. Fields: {PERSONAL_FIELDS}")?;
        return Ok(());
    }
    if apply_patch(session, SectionPatch::PersonalInfo(info), out)? {
        writeln!(out, "Set {field}.")?;
    }
    Ok(())
}

fn handle_add(session: &mut WizardSession, out: &mut impl Write) -> Result<()> {
    let doc = session.document();
    let (patch, count) = match session.current_step() {
        Step::Education => {
            let mut v = doc.education.clone();
            v.push(EducationEntry::blank());
            let n = v.len();
            (SectionPatch::Education(v), n)
        }
        Step::Experience => {
            let mut v = doc.experience.clone();
            v.push(ExperienceEntry::blank());
            let n = v.len();
            (SectionPatch::Experience(v), n)
        }
        Step::Projects => {
            let mut v = doc.projects.clone();
            v.push(ProjectEntry::blank());
            let n = v.len();
            (SectionPatch::Projects(v), n)
        }
        Step::Certifications => {
            let mut v = doc.certifications.clone();
            v.push(CertificationEntry::blank());
            let n = v.len();
            (SectionPatch::Certifications(v), n)
        }
        Step::Skills => {
            writeln!(out, "Use 'skill add <name>' on this step.")?;
            return Ok(());
        }
        _ => {
            writeln!(out, "Nothing to add on this step.")?;
            return Ok(());
        }
    };
    if apply_patch(session, patch, out)? {
        writeln!(out, "Added entry {count}. Fill it in with 'set {count} <field> <value>'.")?;
    }
    Ok(())
}

fn handle_remove(session: &mut WizardSession, position: usize, out: &mut impl Write) -> Result<()> {
    match session.current_step() {
        Step::Education => {
            let mut v = session.document().education.clone();
            let Some(id) = entries::entry_id_at(&v, position) else {
                writeln!(out, "No entry {position}.")?;
                return Ok(());
            };
            match entries::remove_education(&mut v, id) {
                RemoveOutcome::Removed => {
                    if apply_patch(session, SectionPatch::Education(v), out)? {
                        writeln!(out, "Removed entry {position}.")?;
                    }
                }
                RemoveOutcome::LastEntryKept => {
                    writeln!(out, "A resume keeps at least one education entry.")?;
                }
                RemoveOutcome::NotFound => writeln!(out, "No entry {position}.")?,
            }
        }
        Step::Experience => {
            let mut v = session.document().experience.clone();
            if remove_at(&mut v, position) {
                if apply_patch(session, SectionPatch::Experience(v), out)? {
                    writeln!(out, "Removed entry {position}.")?;
                }
            } else {
                writeln!(out, "No entry {position}.")?;
            }
        }
        Step::Projects => {
            let mut v = session.document().projects.clone();
            if remove_at(&mut v, position) {
                if apply_patch(session, SectionPatch::Projects(v), out)? {
                    writeln!(out, "Removed entry {position}.")?;
                }
            } else {
                writeln!(out, "No entry {position}.")?;
            }
        }
        Step::Certifications => {
            let mut v = session.document().certifications.clone();
            if remove_at(&mut v, position) {
                if apply_patch(session, SectionPatch::Certifications(v), out)? {
                    writeln!(out, "Removed entry {position}.")?;
                }
            } else {
                writeln!(out, "No entry {position}.")?;
            }
        }
        Step::Skills => writeln!(out, "Use 'skill remove <number>' on this step.")?,
        _ => writeln!(out, "'remove' applies to a list step.")?,
    }
    Ok(())
}

fn remove_at<T: entries::SectionEntry>(items: &mut Vec<T>, position: usize) -> bool {
    match entries::entry_id_at(items, position) {
        Some(id) => entries::remove_entry(items, id),
        None => false,
    }
}

fn handle_set(
    session: &mut WizardSession,
    position: usize,
    field: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<()> {
    let patch = match session.current_step() {
        Step::Education => {
            let mut v = session.document().education.clone();
            let Some(id) = entries::entry_id_at(&v, position) else {
                writeln!(out, "No entry {position}.")?;
                return Ok(());
            };
            let mut known = true;
            entries::update_entry(&mut v, id, |e| known = set_education_field(e, field, value));
            if !known {
                writeln!(out, "Unknown field '{field}'. Fields: {EDUCATION_FIELDS}")?;
                return Ok(());
            }
            SectionPatch::Education(v)
        }
        Step::Experience => {
            let mut v = session.document().experience.clone();
            let Some(id) = entries::entry_id_at(&v, position) else {
                writeln!(out, "No entry {position}.")?;
                return Ok(());
            };
            let mut known = true;
            entries::update_entry(&mut v, id, |e| known = set_experience_field(e, field, value));
            if !known {
                writeln!(out, "Unknown field '{field}'. Fields: {EXPERIENCE_FIELDS}")?;
                return Ok(());
            }
            SectionPatch::Experience(v)
        }
        Step::Projects => {
            let mut v = session.document().projects.clone();
            let Some(id) = entries::entry_id_at(&v, position) else {
                writeln!(out, "No entry {position}.")?;
                return Ok(());
            };
            let mut known = true;
            entries::update_entry(&mut v, id, |e| known = set_project_field(e, field, value));
            if !known {
                writeln!(out, "Unknown field '{field}'. Fields: {PROJECT_FIELDS}")?;
                return Ok(());
            }
            SectionPatch::Projects(v)
        }
        Step::Certifications => {
            let mut v = session.document().certifications.clone();
            let Some(id) = entries::entry_id_at(&v, position) else {
                writeln!(out, "No entry {position}.")?;
                return Ok(());
            };
            let mut known = true;
            entries::update_entry(&mut v, id, |e| {
                known = set_certification_field(e, field, value)
            });
            if !known {
                writeln!(out, "Unknown field '{field}'. Fields: {CERTIFICATION_FIELDS}")?;
                return Ok(());
            }
            SectionPatch::Certifications(v)
        }
        _ => {
            writeln!(out, "'set' applies to a list step.")?;
            return Ok(());
        }
    };
    if apply_patch(session, patch, out)? {
        writeln!(out, "Updated entry {position}.")?;
    }
    Ok(())
}

fn set_personal_field(info: &mut PersonalInfo, field: &str, value: &str) -> bool {
    match field {
        "name" => info.name = value.to_string(),
        "email" => info.email = value.to_string(),
        "phone" => info.phone = value.to_string(),
        "location" => info.location = value.to_string(),
        "linkedin" => info.linkedin = value.to_string(),
        "website" => info.website = value.to_string(),
        "summary" => info.summary = value.to_string(),
        _ => return false,
    }
    true
}

fn set_education_field(entry: &mut EducationEntry, field: &str, value: &str) -> bool {
    match field {
        "degree" => entry.degree = value.to_string(),
        "institution" => entry.institution = value.to_string(),
        "year" => entry.year = value.to_string(),
        "cgpa" => entry.cgpa = value.to_string(),
        _ => return false,
    }
    true
}

fn set_experience_field(entry: &mut ExperienceEntry, field: &str, value: &str) -> bool {
    match field {
        "title" => entry.title = value.to_string(),
        "company" => entry.company = value.to_string(),
        "duration" => entry.duration = value.to_string(),
        "description" => entry.description = value.to_string(),
        _ => return false,
    }
    true
}

fn set_project_field(entry: &mut ProjectEntry, field: &str, value: &str) -> bool {
    match field {
        "name" => entry.name = value.to_string(),
        "description" => entry.description = value.to_string(),
        "technologies" => entry.technologies = parse_technologies(value),
        "link" => entry.link = value.to_string(),
        _ => return false,
    }
    true
}

fn set_certification_field(entry: &mut CertificationEntry, field: &str, value: &str) -> bool {
    match field {
        "name" => entry.name = value.to_string(),
        "issuer" => entry.issuer = value.to_string(),
        "year" => entry.year = value.to_string(),
        "credential" => entry.credential_id = value.to_string(),
        _ => return false,
    }
    true
}

fn badge(status: SectionStatus) -> &'static str {
    match status {
        SectionStatus::Done => "[done]",
        SectionStatus::Started => "[in progress]",
        SectionStatus::Empty => "[empty]",
    }
}

fn display(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Navigation: next | back | goto <n> | finish")?;
    writeln!(out, "View:       show | status | preview")?;
    writeln!(out, "Personal:   edit <field> [value]")?;
    writeln!(out, "Lists:      add | remove <n> | set <n> <field> [value]")?;
    writeln!(out, "Skills:     skill add <name> | skill remove <n> | skill suggest")?;
    writeln!(out, "Document:   save | export [path] | quit")?;
    Ok(())
}

fn print_status(session: &WizardSession, state: &AppState, out: &mut impl Write) -> Result<()> {
    for step in Step::ALL {
        let marker = if step == session.current_step() { ">" } else { " " };
        writeln!(
            out,
            "{} {}. {} {}",
            marker,
            step.number(),
            step.title(),
            badge(session.step_status(step))
        )?;
    }
    let report = compute_completeness_report(session.document());
    writeln!(out, "Complete: {}", if report.complete { "yes" } else { "no" })?;
    if !report.missing_sections.is_empty() {
        writeln!(out, "Missing: {}", report.missing_sections.join(", "))?;
    }
    for section in &report.sections {
        for rec in &section.recommendations {
            writeln!(out, "  - {rec}")?;
        }
    }
    match state.store.last_saved_at() {
        Some(at) => writeln!(out, "Last saved: {}", at.format("%Y-%m-%d %H:%M UTC"))?,
        None => writeln!(out, "Not saved yet.")?,
    }
    if state.store.is_marked_complete() {
        writeln!(out, "Stored resume is marked complete.")?;
    }
    if session.is_dirty() {
        writeln!(out, "You have unsaved changes.")?;
    }
    Ok(())
}

fn print_step(session: &WizardSession, out: &mut impl Write) -> Result<()> {
    let step = session.current_step();
    let doc = session.document();
    writeln!(out, "Step {}/{}: {}", step.number(), STEP_COUNT, step.title())?;

    match step {
        Step::PersonalInfo => {
            let info = &doc.personal_info;
            for (label, value) in [
                ("name", &info.name),
                ("email", &info.email),
                ("phone", &info.phone),
                ("location", &info.location),
                ("linkedin", &info.linkedin),
                ("website", &info.website),
                ("summary", &info.summary),
            ] {
                writeln!(out, "  {label}: {}", display(value))?;
            }
        }
        Step::Education => {
            for (i, e) in doc.education.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. degree: {} | institution: {} | year: {} | cgpa: {}",
                    i + 1,
                    display(&e.degree),
                    display(&e.institution),
                    display(&e.year),
                    display(&e.cgpa)
                )?;
            }
        }
        Step::Experience => {
            if doc.experience.is_empty() {
                writeln!(out, "  No experience entries (optional).")?;
            }
            for (i, e) in doc.experience.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. title: {} | company: {} | duration: {}",
                    i + 1,
                    display(&e.title),
                    display(&e.company),
                    display(&e.duration)
                )?;
                if !e.description.is_empty() {
                    writeln!(out, "     {}", e.description)?;
                }
            }
        }
        Step::Skills => {
            if doc.skills.is_empty() {
                writeln!(out, "  No skills yet. A resume needs at least one skill.")?;
            }
            for (i, skill) in doc.skills.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, skill)?;
            }
        }
        Step::Projects => {
            if doc.projects.is_empty() {
                writeln!(out, "  No project entries (optional).")?;
            }
            for (i, e) in doc.projects.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. name: {} | technologies: {} | link: {}",
                    i + 1,
                    display(&e.name),
                    display(&format_technologies(&e.technologies)),
                    display(&e.link)
                )?;
                if !e.description.is_empty() {
                    writeln!(out, "     {}", e.description)?;
                }
            }
        }
        Step::Certifications => {
            if doc.certifications.is_empty() {
                writeln!(out, "  No certification entries (optional).")?;
            }
            for (i, e) in doc.certifications.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. name: {} | issuer: {} | year: {} | credential: {}",
                    i + 1,
                    display(&e.name),
                    display(&e.issuer),
                    display(&e.year),
                    display(&e.credential_id)
                )?;
            }
        }
        Step::Preview => {
            let rendered = preview::render(doc);
            if rendered.is_empty() {
                writeln!(out, "  (nothing to preview yet)")?;
            } else {
                writeln!(out, "{rendered}")?;
            }
            let report = compute_completeness_report(doc);
            if report.complete {
                writeln!(out, "Resume is complete. 'save' to persist it.")?;
            } else {
                writeln!(
                    out,
                    "Resume is not complete yet (missing: {}). 'goto 1' to keep editing.",
                    report.missing_sections.join(", ")
                )?;
            }
        }
    }
    Ok(())
}
