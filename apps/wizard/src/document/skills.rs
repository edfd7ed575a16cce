//! Skills editor operations. The skills list preserves insertion order for
//! display and holds no duplicates (case-sensitive exact match).

pub const SUGGESTED_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "Git",
    "Docker",
    "AWS",
    "Communication",
    "Teamwork",
    "Problem Solving",
];

/// Trims the raw input and appends it unless it is empty after trimming or
/// already present. Returns whether the list changed. Calling this twice
/// with the same input changes the list at most once.
pub fn add_skill(skills: &mut Vec<String>, raw: &str) -> bool {
    let skill = raw.trim();
    if skill.is_empty() {
        return false;
    }
    if skills.iter().any(|s| s == skill) {
        return false;
    }
    skills.push(skill.to_string());
    true
}

/// Removes by 0-based position. Out-of-range is a no-op.
pub fn remove_skill(skills: &mut Vec<String>, index: usize) -> bool {
    if index >= skills.len() {
        return false;
    }
    skills.remove(index);
    true
}

/// Deduplicates a whole skills fragment, keeping first occurrences in order.
/// Used when a section replacement hands the document a new list wholesale.
pub fn deduped(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// The suggestion chips still worth showing: a derived view, never stored.
pub fn remaining_suggestions(skills: &[String]) -> Vec<&'static str> {
    SUGGESTED_SKILLS
        .iter()
        .copied()
        .filter(|suggestion| !skills.iter().any(|have| have == suggestion))
        .collect()
}
