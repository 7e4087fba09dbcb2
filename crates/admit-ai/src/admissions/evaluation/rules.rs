use super::super::catalog::SchoolRecord;
use super::super::domain::{ApplicantProfile, GpaTrend};
use super::config::ComponentWeights;
use super::keywords::{
    self, contains_any, count_matches, INCOME_BRACKET_BONUSES, LEADERSHIP_KEYWORDS,
    PRESTIGE_KEYWORDS, RESEARCH_KEYWORDS, UNDERREPRESENTED_STATES, UNDER_RESOURCED_SCHOOL_TYPES,
};
use super::ComponentScores;

const MAX_SCORE: f64 = 100.0;
const NEUTRAL_SCORE: f64 = 50.0;
const GPA_RATIO_CAP: f64 = 1.2;
const RESEARCH_MIN_CHARS: usize = 50;

pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}

/// Compute every component and the weighted total for `profile` against `school`.
pub(crate) fn score_profile(
    profile: &ApplicantProfile,
    school: &SchoolRecord,
    weights: &ComponentWeights,
) -> ComponentScores {
    let mut scores = ComponentScores {
        academic: academic_score(profile, school),
        major_alignment: major_alignment_score(profile),
        extracurricular: extracurricular_score(profile),
        application: application_score(profile),
        demographic: demographic_score(profile),
        demonstrated_interest: demonstrated_interest_score(profile, school),
        contextual: contextual_score(profile),
        total: 0.0,
    };
    scores.total = clamp_score(weights.apply(&scores));
    scores
}

pub fn academic_score(profile: &ApplicantProfile, school: &SchoolRecord) -> f64 {
    let mut score = gpa_ratio(profile.gpa_unweighted, school.avg_gpa_unweighted) * 25.0;

    if let Some(weighted) = profile.gpa_weighted {
        score += gpa_ratio(weighted, school.avg_gpa_weighted) * 10.0;
    }

    score += gpa_trend_adjustment(profile);
    score += class_rank_bonus(profile);
    score += standardized_test_points(profile, school);
    score += ap_ib_points(profile);
    score += profile.curriculum_difficulty.bonus();
    score += subject_test_points(profile);

    if !profile.is_domestic() {
        if profile.language.is_strong() {
            score += 3.0;
        } else if profile.language.is_weak() {
            score -= 8.0;
        }
    }

    clamp_score(score)
}

fn gpa_ratio(gpa: f64, school_average: f64) -> f64 {
    if school_average <= 0.0 {
        return 0.0;
    }
    (gpa / school_average).min(GPA_RATIO_CAP)
}

fn gpa_trend_adjustment(profile: &ApplicantProfile) -> f64 {
    match profile.gpa_trend {
        GpaTrend::Upward => {
            let improvement = profile.gpa_improvement().unwrap_or(0.0);
            if improvement > 0.3 {
                10.0
            } else if improvement > 0.15 {
                7.0
            } else {
                5.0
            }
        }
        GpaTrend::Downward => -12.0,
        GpaTrend::Stable => 0.0,
    }
}

fn class_rank_bonus(profile: &ApplicantProfile) -> f64 {
    let (Some(rank), Some(size)) = (profile.class_rank, profile.class_size) else {
        return 0.0;
    };
    if rank == 0 || size == 0 || rank > size {
        return 0.0;
    }
    let percentile = f64::from(size - rank) / f64::from(size);
    if percentile >= 0.95 {
        5.0
    } else if percentile >= 0.90 {
        4.0
    } else if percentile >= 0.80 {
        3.0
    } else {
        0.0
    }
}

/// Piecewise score for one test against a school's band: 25 at the ceiling, 15 plus up
/// to 10 between midpoint and ceiling, 10 inside the lower half, 5 below the floor.
fn band_points(score: f64, floor: f64, ceiling: f64) -> f64 {
    let midpoint = (floor + ceiling) / 2.0;
    if score >= ceiling {
        25.0
    } else if score >= midpoint {
        15.0 + (score - midpoint) / (ceiling - midpoint) * 10.0
    } else if score >= floor {
        10.0
    } else {
        5.0
    }
}

fn standardized_test_points(profile: &ApplicantProfile, school: &SchoolRecord) -> f64 {
    if let Some(sat) = profile.sat_score {
        band_points(
            f64::from(sat),
            f64::from(school.sat_25th),
            f64::from(school.sat_75th),
        )
    } else if let Some(act) = profile.act_score {
        let (low, high) = school.act_range;
        band_points(f64::from(act), f64::from(low), f64::from(high))
    } else {
        0.0
    }
}

fn ap_ib_points(profile: &ApplicantProfile) -> f64 {
    let count = profile.ap_courses.len();
    let mut points = match count {
        n if n >= 10 => 10.0,
        n if n >= 7 => 8.0,
        n if n >= 5 => 6.0,
        n if n >= 3 => 4.0,
        n => n as f64,
    };

    if let Some(average) = profile.average_ap_score() {
        points += if average >= 4.5 {
            5.0
        } else if average >= 4.0 {
            4.0
        } else if average >= 3.5 {
            2.0
        } else {
            0.0
        };
    }

    if profile.ib_diploma {
        points += match profile.ib_score {
            Some(score) if score >= 40 => 8.0,
            Some(score) if score >= 35 => 5.0,
            Some(score) if score >= 30 => 3.0,
            _ => 0.0,
        };
    }

    points
}

fn subject_test_points(profile: &ApplicantProfile) -> f64 {
    let high_scores = profile
        .sat_subject_tests
        .iter()
        .filter(|test| test.score >= 750)
        .count();
    (high_scores as f64 * 2.0).min(5.0)
}

/// Overlap between the applicant's coursework/activities and the intended major's
/// category. Majors outside every category score a neutral 50.
pub fn major_alignment_score(profile: &ApplicantProfile) -> f64 {
    let Some(category) = keywords::match_major(&profile.target_major) else {
        return NEUTRAL_SCORE;
    };

    let ap_hits = profile
        .ap_courses
        .iter()
        .filter(|course| {
            let subject = course.subject.to_lowercase();
            category
                .relevant_ap_prefixes
                .iter()
                .any(|prefix| subject.starts_with(prefix))
        })
        .count();

    let activity_hits = profile
        .extracurriculars
        .iter()
        .filter(|activity| {
            let text = format!(
                "{} {} {}",
                activity.name, activity.role, activity.description
            )
            .to_lowercase();
            contains_any(&text, category.relevant_activity_keywords)
        })
        .count();

    let score = 30.0
        + (ap_hits as f64 * 10.0).min(40.0)
        + (activity_hits as f64 * 10.0).min(30.0);
    clamp_score(score)
}

pub fn extracurricular_score(profile: &ApplicantProfile) -> f64 {
    let mut score = 0.0;

    let research = profile.research_experience.to_lowercase();
    if research.chars().count() > RESEARCH_MIN_CHARS {
        score += (count_matches(&research, &RESEARCH_KEYWORDS) as f64 * 5.0).min(35.0);
    }

    let activities = profile.extracurriculars.len();
    score += match activities {
        n if n >= 8 => 40.0,
        n if n >= 5 => 30.0,
        n if n >= 3 => 20.0,
        n => n as f64 * 5.0,
    };

    if profile
        .extracurriculars
        .iter()
        .any(|activity| contains_any(&activity.role.to_lowercase(), &LEADERSHIP_KEYWORDS))
    {
        score += 5.0;
    }

    score += match profile.competitions.len() {
        n if n >= 5 => 25.0,
        n if n >= 3 => 18.0,
        n if n >= 1 => 10.0,
        _ => 0.0,
    };

    if profile
        .competitions
        .iter()
        .any(|competition| contains_any(&competition.level.to_lowercase(), &PRESTIGE_KEYWORDS))
    {
        score += 10.0;
    }

    clamp_score(score)
}

pub fn application_score(profile: &ApplicantProfile) -> f64 {
    let lor = f64::from(profile.lor_quality) / 5.0 * 50.0;
    let essay = f64::from(profile.essay_quality) / 5.0 * 50.0;
    clamp_score(lor + essay)
}

pub fn demographic_score(profile: &ApplicantProfile) -> f64 {
    let mut score = NEUTRAL_SCORE;

    if !profile.is_domestic() {
        score += 15.0;
    } else {
        let state = profile.state_province.trim().to_lowercase();
        if UNDERREPRESENTED_STATES.contains(&state.as_str()) {
            score += 5.0;
        }
    }

    if profile.first_generation {
        score += 10.0;
    }
    if profile.legacy_status {
        score += 5.0;
    }
    if profile.recruited_athlete {
        score += 20.0;
    }

    clamp_score(score)
}

/// Schools that do not track interest leave the component neutral.
pub fn demonstrated_interest_score(profile: &ApplicantProfile, school: &SchoolRecord) -> f64 {
    if !school.values_demonstrated_interest {
        return NEUTRAL_SCORE;
    }

    let interest = &profile.interest;
    let mut score = 0.0;
    if interest.campus_visit {
        score += 25.0;
    }
    if interest.interview_completed {
        score += 30.0;
    }
    if interest.contacted_admissions {
        score += 20.0;
    }
    score += (f64::from(interest.attended_info_sessions) * 10.0).min(25.0);

    clamp_score(score)
}

pub fn contextual_score(profile: &ApplicantProfile) -> f64 {
    let mut score = NEUTRAL_SCORE;

    if profile.fee_waiver {
        score += 10.0;
    }

    if let Some(bracket) = profile.family_income_bracket.as_deref() {
        let bracket = bracket.trim();
        if let Some((_, bonus)) = INCOME_BRACKET_BONUSES
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(bracket))
        {
            score += bonus;
        }
    }

    if let Some(school_type) = profile.high_school_type.as_deref() {
        if contains_any(&school_type.to_lowercase(), &UNDER_RESOURCED_SCHOOL_TYPES) {
            score += 5.0;
        }
    }

    clamp_score(score)
}
