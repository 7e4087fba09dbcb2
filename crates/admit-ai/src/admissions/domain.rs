use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::catalog::RoundKind;

/// Countries treated as domestic for language-proficiency and geographic-diversity rules.
const DOMESTIC_COUNTRIES: [&str; 4] = ["united states", "united states of america", "usa", "us"];

/// Structured applicant facts, validated by the caller before they reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub gpa_unweighted: f64,
    #[serde(default)]
    pub gpa_weighted: Option<f64>,
    #[serde(default)]
    pub gpa_trend: GpaTrend,
    #[serde(default)]
    pub gpa_by_year: BTreeMap<GradeLevel, f64>,
    #[serde(default)]
    pub class_rank: Option<u32>,
    #[serde(default)]
    pub class_size: Option<u32>,
    #[serde(default)]
    pub sat_score: Option<u16>,
    #[serde(default)]
    pub act_score: Option<u8>,
    #[serde(default)]
    pub sat_subject_tests: Vec<SubjectTestScore>,
    #[serde(default)]
    pub ap_courses: Vec<ApCourse>,
    #[serde(default)]
    pub ib_diploma: bool,
    #[serde(default)]
    pub ib_score: Option<u8>,
    #[serde(default)]
    pub curriculum_difficulty: CurriculumDifficulty,
    #[serde(default)]
    pub language: LanguageProficiency,

    #[serde(default)]
    pub extracurriculars: Vec<Activity>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub research_experience: String,

    pub lor_quality: u8,
    pub essay_quality: u8,

    #[serde(default)]
    pub interest: DemonstratedInterest,

    pub country: String,
    #[serde(default)]
    pub state_province: String,
    #[serde(default)]
    pub first_generation: bool,
    #[serde(default)]
    pub legacy_status: bool,
    #[serde(default)]
    pub recruited_athlete: bool,
    #[serde(default)]
    pub fee_waiver: bool,
    #[serde(default)]
    pub family_income_bracket: Option<String>,
    #[serde(default)]
    pub high_school_type: Option<String>,

    pub target_school: String,
    #[serde(default)]
    pub target_major: String,
    #[serde(default)]
    pub application_round: RoundKind,
}

impl ApplicantProfile {
    pub fn is_domestic(&self) -> bool {
        let country = self.country.trim().to_ascii_lowercase();
        DOMESTIC_COUNTRIES.contains(&country.as_str())
    }

    /// Change in GPA between the earliest and latest recorded grade levels.
    pub fn gpa_improvement(&self) -> Option<f64> {
        if self.gpa_by_year.len() < 2 {
            return None;
        }
        let first = self.gpa_by_year.values().next()?;
        let last = self.gpa_by_year.values().next_back()?;
        Some(last - first)
    }

    pub fn average_ap_score(&self) -> Option<f64> {
        if self.ap_courses.is_empty() {
            return None;
        }
        let total: f64 = self
            .ap_courses
            .iter()
            .map(|course| f64::from(course.score))
            .sum();
        Some(total / self.ap_courses.len() as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpaTrend {
    Upward,
    Downward,
    #[default]
    #[serde(other)]
    Stable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurriculumDifficulty {
    Low,
    Medium,
    High,
    VeryHigh,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl CurriculumDifficulty {
    /// Flat academic bonus for course rigor.
    pub const fn bonus(self) -> f64 {
        match self {
            CurriculumDifficulty::Low => 1.0,
            CurriculumDifficulty::Medium | CurriculumDifficulty::Unspecified => 3.0,
            CurriculumDifficulty::High => 4.0,
            CurriculumDifficulty::VeryHigh => 5.0,
        }
    }
}

/// High-school grade level (9 through 12). Accepts "9", "9th", "Grade 9" on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GradeLevel(pub u8);

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.0 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        write!(f, "{}{}", self.0, suffix)
    }
}

impl Serialize for GradeLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GradeLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits: String = raw
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        digits
            .parse::<u8>()
            .map(GradeLevel)
            .map_err(|_| serde::de::Error::custom(format!("invalid grade level '{raw}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApCourse {
    pub subject: String,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTestScore {
    pub subject: String,
    pub score: u16,
}

/// English-proficiency results; only consulted for non-domestic applicants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageProficiency {
    #[serde(default)]
    pub toefl: Option<u8>,
    #[serde(default)]
    pub ielts: Option<f32>,
    #[serde(default)]
    pub duolingo: Option<u8>,
}

impl LanguageProficiency {
    pub fn is_strong(&self) -> bool {
        self.toefl.is_some_and(|score| score >= 110)
            || self.ielts.is_some_and(|score| score >= 7.5)
            || self.duolingo.is_some_and(|score| score >= 130)
    }

    pub fn is_weak(&self) -> bool {
        self.toefl.is_some_and(|score| score < 90) || self.ielts.is_some_and(|score| score < 6.5)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub name: String,
    /// school, regional, state, national, international, or a named olympiad.
    pub level: String,
    #[serde(default)]
    pub award: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemonstratedInterest {
    #[serde(default)]
    pub campus_visit: bool,
    #[serde(default)]
    pub interview_completed: bool,
    #[serde(default)]
    pub contacted_admissions: bool,
    #[serde(default)]
    pub attended_info_sessions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_levels_parse_ordinal_labels_and_sort_numerically() {
        let years: BTreeMap<GradeLevel, f64> =
            serde_json::from_str(r#"{"9th": 3.5, "10th": 3.7, "Grade 12": 3.9, "11": 3.8}"#)
                .expect("grade levels parse");

        let ordered: Vec<u8> = years.keys().map(|level| level.0).collect();
        assert_eq!(ordered, vec![9, 10, 11, 12]);
        assert_eq!(GradeLevel(10).to_string(), "10th");
    }

    #[test]
    fn unknown_enumerations_fall_back_to_defaults() {
        let trend: GpaTrend = serde_json::from_str("\"sideways\"").expect("parses");
        let difficulty: CurriculumDifficulty = serde_json::from_str("\"extreme\"").expect("parses");
        assert_eq!(trend, GpaTrend::Stable);
        assert_eq!(difficulty.bonus(), 3.0);
        let downward: GpaTrend = serde_json::from_str("\"downward\"").expect("parses");
        assert_eq!(downward, GpaTrend::Downward);
    }

    #[test]
    fn language_proficiency_thresholds() {
        let strong = LanguageProficiency {
            duolingo: Some(135),
            ..LanguageProficiency::default()
        };
        let weak = LanguageProficiency {
            ielts: Some(6.0),
            ..LanguageProficiency::default()
        };
        assert!(strong.is_strong());
        assert!(!strong.is_weak());
        assert!(weak.is_weak());
        assert!(!LanguageProficiency::default().is_weak());
    }
}
