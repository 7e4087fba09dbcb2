use std::collections::BTreeMap;

use super::super::catalog::SchoolRecord;
use super::super::domain::{ApplicantProfile, GpaTrend};
use super::policy::AdmissionDecision;
use super::ComponentScores;

const AFFIRMATION: &str = "Continue your strong performance across all areas";
const INTEREST_ADVICE: &str =
    "Visit campus, attend info sessions, and contact admissions to show interest";

/// Canned suggestions, emitted once each when any weakness contains one of the markers.
const ADVICE_RULES: [(&[&str], &str); 5] = [
    (
        &["GPA"],
        "Focus on maintaining or improving your GPA in remaining semesters",
    ),
    (
        &["SAT", "ACT"],
        "Consider retaking standardized tests to improve your scores",
    ),
    (&["AP"], "Take more rigorous courses if available"),
    (
        &["extracurricular"],
        "Deepen involvement in 2-3 key activities rather than spreading thin",
    ),
    (
        &["intended major"],
        "Choose courses and activities that connect to your intended major",
    ),
];

const STRONG_SECTION_SCORE: f64 = 70.0;
const ALIGNED_MAJOR_SCORE: f64 = 70.0;
const MISALIGNED_MAJOR_SCORE: f64 = 50.0;

#[derive(Debug, Default)]
pub(crate) struct ProfileFindings {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Strengths and weaknesses in fixed order: academics, major fit, activities, materials.
pub(crate) fn analyze_profile(
    profile: &ApplicantProfile,
    school: &SchoolRecord,
    scores: &ComponentScores,
) -> ProfileFindings {
    let mut findings = ProfileFindings::default();
    let strengths = &mut findings.strengths;
    let weaknesses = &mut findings.weaknesses;

    if profile.gpa_unweighted >= school.avg_gpa_unweighted {
        strengths.push(format!(
            "Strong GPA ({}) meets or exceeds school average ({})",
            profile.gpa_unweighted, school.avg_gpa_unweighted
        ));
    } else {
        weaknesses.push(format!(
            "GPA ({}) below school average ({})",
            profile.gpa_unweighted, school.avg_gpa_unweighted
        ));
    }

    match profile.gpa_trend {
        GpaTrend::Upward => strengths.push("Upward GPA trend shows academic growth".to_string()),
        GpaTrend::Downward => weaknesses.push("Downward GPA trend is concerning".to_string()),
        GpaTrend::Stable => {}
    }

    if let Some(sat) = profile.sat_score {
        if sat >= school.sat_75th {
            strengths.push(format!("Excellent SAT score ({sat}) in top range"));
        } else if sat < school.sat_25th {
            weaknesses.push(format!("SAT score ({sat}) below typical range"));
        }
    } else if let Some(act) = profile.act_score {
        let (low, high) = school.act_range;
        if act >= high {
            strengths.push(format!("Excellent ACT score ({act}) in top range"));
        } else if act < low {
            weaknesses.push(format!("ACT score ({act}) below typical range"));
        }
    }

    let ap_count = profile.ap_courses.len();
    if ap_count >= 8 {
        strengths.push(format!("Rigorous course load with {ap_count} AP courses"));
    } else if ap_count < 4 && !profile.ib_diploma {
        weaknesses.push("Limited AP course rigor".to_string());
    }

    if !profile.target_major.trim().is_empty() {
        if scores.major_alignment >= ALIGNED_MAJOR_SCORE {
            strengths.push(format!(
                "Coursework and activities align with intended major ({})",
                profile.target_major.trim()
            ));
        } else if scores.major_alignment < MISALIGNED_MAJOR_SCORE {
            weaknesses.push("Little coursework or activity tied to intended major".to_string());
        }
    }

    if profile.research_experience.chars().count() > 100 {
        strengths.push("Substantial research experience".to_string());
    }

    let activities = profile.extracurriculars.len();
    if activities >= 5 {
        strengths.push("Well-rounded extracurricular profile".to_string());
    } else if activities < 3 {
        weaknesses.push("Limited extracurricular involvement".to_string());
    }

    if profile.competitions.len() >= 3 {
        strengths.push("Strong competition record".to_string());
    }

    if profile.lor_quality >= 4 {
        strengths.push("Strong letters of recommendation".to_string());
    } else if profile.lor_quality <= 2 {
        weaknesses.push("Weak letters of recommendation".to_string());
    }

    if profile.essay_quality >= 4 {
        strengths.push("Compelling personal essays".to_string());
    } else if profile.essay_quality <= 2 {
        weaknesses.push("Essays need improvement".to_string());
    }

    findings
}

pub(crate) fn reasoning(
    school: &SchoolRecord,
    probability: f64,
    findings: &ProfileFindings,
) -> Vec<String> {
    let mut reasoning = vec![format!(
        "{} has an acceptance rate of {:.1}%, making it a {} school.",
        school.name,
        school.acceptance_rate * 100.0,
        school.selectivity_tier.label()
    )];

    let outlook = match AdmissionDecision::classify(probability) {
        AdmissionDecision::LikelyAdmit => "Your profile is highly competitive for this institution.",
        AdmissionDecision::Possible => "Your profile is competitive, but admission is not guaranteed.",
        AdmissionDecision::Reach => {
            "This school is a reach, but you have a chance with a strong application."
        }
        AdmissionDecision::Unlikely | AdmissionDecision::Unknown => {
            "This school is a significant reach given your current profile."
        }
    };
    reasoning.push(outlook.to_string());

    if !findings.strengths.is_empty() {
        reasoning.push(format!("Key strengths: {}", leading(&findings.strengths)));
    }
    if !findings.weaknesses.is_empty() {
        reasoning.push(format!(
            "Areas for improvement: {}",
            leading(&findings.weaknesses)
        ));
    }

    reasoning
}

fn leading(items: &[String]) -> String {
    items
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn advice(school: &SchoolRecord, weaknesses: &[String]) -> Vec<String> {
    let mut advice: Vec<String> = ADVICE_RULES
        .iter()
        .filter(|(markers, _)| {
            weaknesses
                .iter()
                .any(|weakness| markers.iter().any(|marker| weakness.contains(marker)))
        })
        .map(|(_, suggestion)| suggestion.to_string())
        .collect();

    if school.values_demonstrated_interest {
        advice.push(INTEREST_ADVICE.to_string());
    }

    if advice.is_empty() {
        advice.push(AFFIRMATION.to_string());
    }
    advice
}

pub(crate) fn detailed_analysis(
    school: &SchoolRecord,
    scores: &ComponentScores,
) -> BTreeMap<String, String> {
    let academic_band = if scores.academic >= STRONG_SECTION_SCORE {
        "competitive"
    } else {
        "below average"
    };
    let activity_band = if scores.extracurricular >= STRONG_SECTION_SCORE {
        "strong"
    } else {
        "moderate"
    };
    let priority = if school.values_demonstrated_interest {
        "demonstrated interest"
    } else {
        "academic excellence primarily"
    };

    BTreeMap::from([
        (
            "academic".to_string(),
            format!(
                "Academic score: {:.1}/100. Your GPA and test scores are {academic_band} for this school.",
                scores.academic
            ),
        ),
        (
            "extracurricular".to_string(),
            format!(
                "Extracurricular score: {:.1}/100. Your activities demonstrate {activity_band} involvement.",
                scores.extracurricular
            ),
        ),
        ("fit".to_string(), format!("This school values {priority}.")),
    ])
}

pub(crate) fn fit_analysis(
    profile: &ApplicantProfile,
    school: &SchoolRecord,
) -> BTreeMap<String, String> {
    let standing = if profile.gpa_unweighted >= school.avg_gpa_unweighted {
        "Competitive applicant"
    } else {
        "Below average applicant"
    };

    BTreeMap::from([
        (
            "selectivity".to_string(),
            format!("This is a {} school", school.selectivity_tier.label()),
        ),
        (
            "acceptance_rate".to_string(),
            format!("{:.1}% acceptance rate", school.acceptance_rate * 100.0),
        ),
        ("your_standing".to_string(), standing.to_string()),
    ])
}
