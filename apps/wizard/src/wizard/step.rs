use serde::{Deserialize, Serialize};

/// The seven wizard steps, in display order. The machine is cyclic: Preview
/// is not terminal, the review step links straight back to editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PersonalInfo,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Preview,
}

pub const STEP_COUNT: u8 = 7;

impl Step {
    pub const ALL: [Step; STEP_COUNT as usize] = [
        Step::PersonalInfo,
        Step::Education,
        Step::Experience,
        Step::Skills,
        Step::Projects,
        Step::Certifications,
        Step::Preview,
    ];

    /// 1-based step number shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::Education => 2,
            Step::Experience => 3,
            Step::Skills => 4,
            Step::Projects => 5,
            Step::Certifications => 6,
            Step::Preview => 7,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::PersonalInfo),
            2 => Some(Step::Education),
            3 => Some(Step::Experience),
            4 => Some(Step::Skills),
            5 => Some(Step::Projects),
            6 => Some(Step::Certifications),
            7 => Some(Step::Preview),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Education => "Education",
            Step::Experience => "Experience",
            Step::Skills => "Skills",
            Step::Projects => "Projects",
            Step::Certifications => "Certifications",
            Step::Preview => "Preview",
        }
    }

    /// Advance by one, saturating at Preview.
    pub fn next(self) -> Step {
        Step::from_number(self.number() + 1).unwrap_or(Step::Preview)
    }

    /// Retreat by one, saturating at PersonalInfo.
    pub fn back(self) -> Step {
        match self.number() {
            0 | 1 => Step::PersonalInfo,
            n => Step::from_number(n - 1).unwrap_or(Step::PersonalInfo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(8), None);
    }

    #[test]
    fn test_next_saturates_at_preview() {
        assert_eq!(Step::Certifications.next(), Step::Preview);
        assert_eq!(Step::Preview.next(), Step::Preview);
    }

    #[test]
    fn test_back_saturates_at_personal_info() {
        assert_eq!(Step::Education.back(), Step::PersonalInfo);
        assert_eq!(Step::PersonalInfo.back(), Step::PersonalInfo);
    }

    #[test]
    fn test_full_forward_walk() {
        let mut step = Step::PersonalInfo;
        for expected in 1..=STEP_COUNT {
            assert_eq!(step.number(), expected);
            step = step.next();
        }
        assert_eq!(step, Step::Preview);
    }
}
