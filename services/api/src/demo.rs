use crate::cli::EngineArgs;
use crate::infra::{build_service, load_catalog, DefaultAdmissionsService};
use admit_ai::admissions::{
    Activity, ApCourse, ApplicantProfile, Competition, CurriculumDifficulty,
    DemonstratedInterest, EvaluationResult, GpaTrend, GradeLevel, LanguageProficiency,
    RoundKind,
};
use admit_ai::error::AppError;
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

const DEMO_SCHOOLS: [&str; 4] = ["MIT", "Duke University", "University of Michigan", "Purdue University"];

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Schools to evaluate against (defaults to a reach-to-safety spread)
    #[arg(long = "school")]
    pub(crate) schools: Vec<String>,
    /// Print the full JSON result for each school
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SchoolsArgs {
    /// Show acceptance rate, tier and rounds next to each name
    #[arg(long)]
    pub(crate) details: bool,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to an applicant profile in JSON
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the result as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

fn service_for(engine: &EngineArgs) -> Result<Arc<DefaultAdmissionsService>, AppError> {
    let catalog = load_catalog(engine.catalog.as_deref())?;
    build_service(catalog, engine.scoring_profile.unwrap_or_default())
}

pub(crate) fn run_schools(args: SchoolsArgs) -> Result<(), AppError> {
    let service = service_for(&args.engine)?;
    let names = service.schools();
    println!("{} schools in catalog", names.len());

    for name in names {
        if !args.details {
            println!("- {name}");
            continue;
        }
        let record = service.school(&name)?;
        let rounds: Vec<&str> = record
            .available_application_rounds
            .iter()
            .map(|round| round.code())
            .collect();
        println!(
            "- {} | {:.1}% | {} | {}",
            record.name,
            record.acceptance_rate * 100.0,
            record.selectivity_tier.label(),
            rounds.join(", ")
        );
    }
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let service = service_for(&args.engine)?;
    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: ApplicantProfile = serde_json::from_str(&raw)?;

    let result = service.evaluate(&profile, None);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&profile.target_school, &result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = service_for(&args.engine)?;
    let schools: Vec<String> = if args.schools.is_empty() {
        DEMO_SCHOOLS.iter().map(|name| name.to_string()).collect()
    } else {
        args.schools
    };

    println!("Admissions evaluation demo");
    println!("Sample applicant: 3.92 GPA, 1540 SAT, 9 APs, intended major Computer Science");

    for school in &schools {
        for round in [RoundKind::RegularDecision, RoundKind::EarlyDecision] {
            let profile = ApplicantProfile {
                target_school: school.clone(),
                application_round: round,
                ..demo_profile()
            };
            let result = service.evaluate(&profile, None);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                continue;
            }
            println!("\n[{}]", round.label());
            render_result(school, &result);
        }
    }
    Ok(())
}

fn render_result(school: &str, result: &EvaluationResult) {
    println!(
        "{}: {} ({:.1}%)",
        school,
        result.decision,
        result.admission_probability * 100.0
    );

    if let Some(impact) = &result.application_round_impact {
        println!(
            "  Round: {} x{:.1} ({:.1}% -> {:.1}%)",
            impact.round.code(),
            impact.multiplier,
            impact.base_probability * 100.0,
            impact.final_probability * 100.0
        );
    }
    if let Some(scores) = &result.score_breakdown {
        println!(
            "  Scores: academic {:.1} | major {:.1} | activities {:.1} | materials {:.1} | total {:.1}",
            scores.academic,
            scores.major_alignment,
            scores.extracurricular,
            scores.application,
            scores.total
        );
    }
    for line in &result.reasoning {
        println!("  {line}");
    }
    if !result.advice.is_empty() {
        println!("  Advice:");
        for tip in &result.advice {
            println!("    - {tip}");
        }
    }
}

fn demo_profile() -> ApplicantProfile {
    let ap_subjects = [
        ("AP Calculus BC", 5),
        ("AP Physics C: Mechanics", 5),
        ("AP Computer Science A", 5),
        ("AP Chemistry", 4),
        ("AP Statistics", 5),
        ("AP English Language and Composition", 4),
        ("AP United States History", 4),
        ("AP Microeconomics", 5),
        ("AP Spanish Language and Culture", 4),
    ];

    ApplicantProfile {
        gpa_unweighted: 3.92,
        gpa_weighted: Some(4.35),
        gpa_trend: GpaTrend::Upward,
        gpa_by_year: BTreeMap::from([
            (GradeLevel(9), 3.75),
            (GradeLevel(10), 3.88),
            (GradeLevel(11), 3.97),
            (GradeLevel(12), 4.0),
        ]),
        class_rank: Some(6),
        class_size: Some(320),
        sat_score: Some(1540),
        act_score: None,
        sat_subject_tests: Vec::new(),
        ap_courses: ap_subjects
            .iter()
            .map(|(subject, score)| ApCourse {
                subject: subject.to_string(),
                score: *score,
            })
            .collect(),
        ib_diploma: false,
        ib_score: None,
        curriculum_difficulty: CurriculumDifficulty::VeryHigh,
        language: LanguageProficiency::default(),
        extracurriculars: vec![
            Activity {
                name: "Robotics Team".to_string(),
                role: "Captain".to_string(),
                description: "Led build of competition robot and mentored new members".to_string(),
            },
            Activity {
                name: "Coding Club".to_string(),
                role: "Founder".to_string(),
                description: "Runs weekly workshops and an annual hackathon".to_string(),
            },
            Activity {
                name: "Math Team".to_string(),
                role: "Member".to_string(),
                description: String::new(),
            },
            Activity {
                name: "Food Bank".to_string(),
                role: "Volunteer".to_string(),
                description: String::new(),
            },
            Activity {
                name: "Jazz Band".to_string(),
                role: "Pianist".to_string(),
                description: String::new(),
            },
        ],
        competitions: vec![
            Competition {
                name: "USA Computing Olympiad".to_string(),
                level: "National".to_string(),
                award: "Platinum division".to_string(),
            },
            Competition {
                name: "FIRST Robotics Regional".to_string(),
                level: "Regional".to_string(),
                award: "Finalist".to_string(),
            },
        ],
        research_experience: "Summer research in a university lab with a professor on graph \
            algorithms; co-authored a paper submitted to a student conference"
            .to_string(),
        lor_quality: 4,
        essay_quality: 4,
        interest: DemonstratedInterest {
            campus_visit: true,
            interview_completed: false,
            contacted_admissions: true,
            attended_info_sessions: 1,
        },
        country: "United States".to_string(),
        state_province: "Colorado".to_string(),
        first_generation: false,
        legacy_status: false,
        recruited_athlete: false,
        fee_waiver: false,
        family_income_bracket: None,
        high_school_type: Some("Public".to_string()),
        target_school: String::new(),
        target_major: "Computer Science".to_string(),
        application_round: RoundKind::RegularDecision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admit_ai::admissions::{AdmissionDecision, SchoolCatalog};

    #[test]
    fn demo_schools_exist_in_builtin_catalog() {
        let catalog = SchoolCatalog::builtin();
        for name in DEMO_SCHOOLS {
            assert!(catalog.lookup(name).is_some(), "{name}");
        }
    }

    #[test]
    fn demo_profile_evaluates_against_every_demo_school() {
        let service = service_for(&EngineArgs::default()).expect("service");
        for name in DEMO_SCHOOLS {
            let profile = ApplicantProfile {
                target_school: name.to_string(),
                ..demo_profile()
            };
            let result = service.evaluate(&profile, None);
            assert_ne!(result.decision, AdmissionDecision::Unknown, "{name}");
        }
    }
}
