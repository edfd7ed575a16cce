//! Preview renderer: a pure function from the resume document to its
//! printable markdown form. A section renders only when it has at least one
//! entry with a non-empty primary field; partially filled entries whose
//! primary field is still blank are omitted rather than shown with holes.

use crate::document::technologies::format_technologies;
use crate::models::document::ResumeDocument;

pub fn render(doc: &ResumeDocument) -> String {
    let mut md = String::new();
    let info = &doc.personal_info;

    if !info.name.is_empty() {
        md.push_str(&format!("# {}\n\n", info.name));
    }
    let contact: Vec<&str> = [&info.email, &info.phone, &info.location]
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    if !contact.is_empty() {
        md.push_str(&format!("{}\n\n", contact.join(" | ")));
    }
    let links: Vec<&str> = [&info.linkedin, &info.website]
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    if !links.is_empty() {
        md.push_str(&format!("{}\n\n", links.join(" | ")));
    }
    if !info.summary.is_empty() {
        md.push_str(&format!("{}\n\n", info.summary));
    }

    let education: Vec<_> = doc
        .education
        .iter()
        .filter(|e| !e.degree.is_empty())
        .collect();
    if !education.is_empty() {
        md.push_str("## Education\n\n");
        for entry in education {
            let mut line = format!("- **{}**", entry.degree);
            if !entry.institution.is_empty() {
                line.push_str(&format!(", {}", entry.institution));
            }
            if !entry.year.is_empty() {
                line.push_str(&format!(" ({})", entry.year));
            }
            if !entry.cgpa.is_empty() {
                line.push_str(&format!(", CGPA {}", entry.cgpa));
            }
            line.push('\n');
            md.push_str(&line);
        }
        md.push('\n');
    }

    let experience: Vec<_> = doc
        .experience
        .iter()
        .filter(|e| !e.title.is_empty())
        .collect();
    if !experience.is_empty() {
        md.push_str("## Experience\n\n");
        for entry in experience {
            let mut heading = format!("### {}", entry.title);
            if !entry.company.is_empty() {
                heading.push_str(&format!(", {}", entry.company));
            }
            heading.push('\n');
            md.push_str(&heading);
            if !entry.duration.is_empty() {
                md.push_str(&format!("*{}*\n", entry.duration));
            }
            md.push('\n');
            if !entry.description.is_empty() {
                md.push_str(&format!("{}\n\n", entry.description));
            }
        }
    }

    if !doc.skills.is_empty() {
        md.push_str("## Skills\n\n");
        md.push_str(&format!("{}\n\n", doc.skills.join(", ")));
    }

    let projects: Vec<_> = doc.projects.iter().filter(|e| !e.name.is_empty()).collect();
    if !projects.is_empty() {
        md.push_str("## Projects\n\n");
        for entry in projects {
            md.push_str(&format!("### {}\n\n", entry.name));
            if !entry.description.is_empty() {
                md.push_str(&format!("{}\n\n", entry.description));
            }
            if !entry.technologies.is_empty() {
                md.push_str(&format!(
                    "Technologies: {}\n\n",
                    format_technologies(&entry.technologies)
                ));
            }
            if !entry.link.is_empty() {
                md.push_str(&format!("{}\n\n", entry.link));
            }
        }
    }

    let certifications: Vec<_> = doc
        .certifications
        .iter()
        .filter(|e| !e.name.is_empty())
        .collect();
    if !certifications.is_empty() {
        md.push_str("## Certifications\n\n");
        for entry in certifications {
            let mut line = format!("- **{}**", entry.name);
            if !entry.issuer.is_empty() {
                line.push_str(&format!(", {}", entry.issuer));
            }
            if !entry.year.is_empty() {
                line.push_str(&format!(" ({})", entry.year));
            }
            if !entry.credential_id.is_empty() {
                line.push_str(&format!(", credential {}", entry.credential_id));
            }
            line.push('\n');
            md.push_str(&line);
        }
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{EducationEntry, ExperienceEntry, ProjectEntry};

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(render(&ResumeDocument::new()), "");
    }

    #[test]
    fn test_degreeless_education_entry_is_hidden() {
        let mut doc = ResumeDocument::new();
        doc.education[0].institution = "MIT".to_string();
        let mut with_degree = EducationEntry::blank();
        with_degree.degree = "BSc".to_string();
        doc.education.push(with_degree);

        let out = render(&doc);
        assert!(out.contains("## Education"));
        assert!(out.contains("BSc"));
        assert!(!out.contains("MIT"));
    }

    #[test]
    fn test_education_section_absent_when_no_entry_has_degree() {
        let mut doc = ResumeDocument::new();
        doc.education[0].institution = "MIT".to_string();
        assert!(!render(&doc).contains("## Education"));
    }

    #[test]
    fn test_titleless_experience_is_hidden() {
        let mut doc = ResumeDocument::new();
        let mut entry = ExperienceEntry::blank();
        entry.company = "Acme".to_string();
        doc.experience.push(entry);
        assert!(!render(&doc).contains("Acme"));
    }

    #[test]
    fn test_header_and_contact_line() {
        let mut doc = ResumeDocument::new();
        doc.personal_info.name = "Ana".to_string();
        doc.personal_info.email = "a@x.com".to_string();
        doc.personal_info.location = "Kathmandu".to_string();
        let out = render(&doc);
        assert!(out.starts_with("# Ana\n"));
        assert!(out.contains("a@x.com | Kathmandu"));
    }

    #[test]
    fn test_skills_section() {
        let mut doc = ResumeDocument::new();
        doc.skills = vec!["React".to_string(), "SQL".to_string()];
        let out = render(&doc);
        assert!(out.contains("## Skills"));
        assert!(out.contains("React, SQL"));
    }

    #[test]
    fn test_project_renders_technologies_line() {
        let mut doc = ResumeDocument::new();
        let mut project = ProjectEntry::blank();
        project.name = "Portal".to_string();
        project.technologies = vec!["React".to_string(), "Node.js".to_string()];
        doc.projects.push(project);
        let out = render(&doc);
        assert!(out.contains("### Portal"));
        assert!(out.contains("Technologies: React, Node.js"));
    }

    #[test]
    fn test_render_is_pure() {
        let mut doc = ResumeDocument::new();
        doc.personal_info.name = "Ana".to_string();
        let snapshot = doc.clone();
        let first = render(&doc);
        let second = render(&doc);
        assert_eq!(first, second);
        assert_eq!(doc, snapshot);
    }
}
