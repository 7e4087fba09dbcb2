use super::{RoundKind, SchoolRecord, SelectivityTier};

/// Compile-time row of the built-in catalog.
struct SchoolSeed {
    name: &'static str,
    rank: u16,
    acceptance_rate: f64,
    avg_gpa: (f64, f64),
    sat: (u16, u16),
    act: (u8, u8),
    tier: SelectivityTier,
    rounds: &'static [RoundKind],
    demonstrated_interest: bool,
    need_blind: bool,
    popular_majors: &'static [&'static str],
}

impl SchoolSeed {
    fn to_record(&self) -> SchoolRecord {
        SchoolRecord {
            name: self.name.to_string(),
            rank: Some(self.rank),
            acceptance_rate: self.acceptance_rate,
            avg_gpa_unweighted: self.avg_gpa.0,
            avg_gpa_weighted: self.avg_gpa.1,
            sat_25th: self.sat.0,
            sat_75th: self.sat.1,
            act_range: self.act,
            selectivity_tier: self.tier,
            values_demonstrated_interest: self.demonstrated_interest,
            need_blind: self.need_blind,
            available_application_rounds: self.rounds.iter().copied().collect(),
            popular_majors: self
                .popular_majors
                .iter()
                .map(|major| major.to_string())
                .collect(),
        }
    }
}

pub(super) fn records() -> impl Iterator<Item = SchoolRecord> {
    SEEDS.iter().map(SchoolSeed::to_record)
}

const SEEDS: &[SchoolSeed] = &[
    SchoolSeed {
        name: "Princeton University",
        rank: 1,
        acceptance_rate: 0.039,
        avg_gpa: (3.95, 4.18),
        sat: (1470, 1570),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::SingleChoiceEarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: true,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "MIT",
        rank: 2,
        acceptance_rate: 0.04,
        avg_gpa: (3.96, 4.17),
        sat: (1520, 1580),
        act: (34, 36),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: true,
        popular_majors: &[
            "Computer Science",
            "Mechanical Engineering",
            "Mathematics",
            "Physics",
            "Electrical Engineering",
        ],
    },
    SchoolSeed {
        name: "Harvard University",
        rank: 3,
        acceptance_rate: 0.033,
        avg_gpa: (3.95, 4.18),
        sat: (1460, 1580),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::SingleChoiceEarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: true,
        popular_majors: &["Economics", "Government", "Computer Science", "Biology", "Psychology"],
    },
    SchoolSeed {
        name: "Stanford University",
        rank: 3,
        acceptance_rate: 0.035,
        avg_gpa: (3.96, 4.19),
        sat: (1470, 1570),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::RestrictiveEarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: true,
        popular_majors: &[
            "Computer Science",
            "Engineering",
            "Biology",
            "Economics",
            "Human Biology",
        ],
    },
    SchoolSeed {
        name: "Yale University",
        rank: 5,
        acceptance_rate: 0.046,
        avg_gpa: (3.95, 4.19),
        sat: (1460, 1570),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::SingleChoiceEarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: true,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Pennsylvania",
        rank: 6,
        acceptance_rate: 0.056,
        avg_gpa: (3.90, 4.16),
        sat: (1450, 1560),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Caltech",
        rank: 7,
        acceptance_rate: 0.029,
        avg_gpa: (3.97, 4.19),
        sat: (1530, 1580),
        act: (35, 36),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: true,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Duke University",
        rank: 7,
        acceptance_rate: 0.058,
        avg_gpa: (3.94, 4.17),
        sat: (1480, 1570),
        act: (34, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Johns Hopkins University",
        rank: 9,
        acceptance_rate: 0.073,
        avg_gpa: (3.92, 4.15),
        sat: (1480, 1570),
        act: (34, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Northwestern University",
        rank: 9,
        acceptance_rate: 0.07,
        avg_gpa: (3.92, 4.15),
        sat: (1450, 1550),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Brown University",
        rank: 11,
        acceptance_rate: 0.052,
        avg_gpa: (3.94, 4.16),
        sat: (1450, 1560),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Cornell University",
        rank: 11,
        acceptance_rate: 0.087,
        avg_gpa: (3.90, 4.14),
        sat: (1400, 1540),
        act: (32, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Dartmouth College",
        rank: 11,
        acceptance_rate: 0.062,
        avg_gpa: (3.93, 4.15),
        sat: (1440, 1560),
        act: (32, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Columbia University",
        rank: 14,
        acceptance_rate: 0.039,
        avg_gpa: (3.95, 4.17),
        sat: (1470, 1570),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Vanderbilt University",
        rank: 14,
        acceptance_rate: 0.066,
        avg_gpa: (3.91, 4.15),
        sat: (1460, 1570),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Washington University in St. Louis",
        rank: 14,
        acceptance_rate: 0.116,
        avg_gpa: (3.92, 4.15),
        sat: (1470, 1570),
        act: (33, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Rice University",
        rank: 17,
        acceptance_rate: 0.087,
        avg_gpa: (3.92, 4.15),
        sat: (1470, 1570),
        act: (34, 35),
        tier: SelectivityTier::MostCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Notre Dame",
        rank: 18,
        acceptance_rate: 0.128,
        avg_gpa: (3.90, 4.13),
        sat: (1400, 1550),
        act: (32, 35),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::RestrictiveEarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "UCLA",
        rank: 18,
        acceptance_rate: 0.09,
        avg_gpa: (3.90, 4.31),
        sat: (1290, 1510),
        act: (27, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[
            "Biology",
            "Psychology",
            "Economics",
            "Political Science",
            "Computer Science",
        ],
    },
    SchoolSeed {
        name: "UC Berkeley",
        rank: 20,
        acceptance_rate: 0.113,
        avg_gpa: (3.89, 4.29),
        sat: (1330, 1530),
        act: (28, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[
            "Computer Science",
            "Economics",
            "Electrical Engineering",
            "Political Science",
            "Business",
        ],
    },
    SchoolSeed {
        name: "Emory University",
        rank: 21,
        acceptance_rate: 0.113,
        avg_gpa: (3.88, 4.12),
        sat: (1370, 1520),
        act: (31, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Georgetown University",
        rank: 21,
        acceptance_rate: 0.12,
        avg_gpa: (3.89, 4.13),
        sat: (1380, 1530),
        act: (31, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::RestrictiveEarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Michigan",
        rank: 23,
        acceptance_rate: 0.18,
        avg_gpa: (3.88, 4.11),
        sat: (1340, 1530),
        act: (31, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &["Business", "Engineering", "Computer Science", "Economics", "Psychology"],
    },
    SchoolSeed {
        name: "Carnegie Mellon University",
        rank: 24,
        acceptance_rate: 0.114,
        avg_gpa: (3.91, 4.14),
        sat: (1460, 1560),
        act: (33, 35),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Southern California",
        rank: 24,
        acceptance_rate: 0.095,
        avg_gpa: (3.86, 4.10),
        sat: (1380, 1530),
        act: (31, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Virginia",
        rank: 24,
        acceptance_rate: 0.191,
        avg_gpa: (3.87, 4.11),
        sat: (1370, 1520),
        act: (31, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Wake Forest University",
        rank: 27,
        acceptance_rate: 0.217,
        avg_gpa: (3.84, 4.08),
        sat: (1330, 1480),
        act: (30, 33),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "New York University",
        rank: 28,
        acceptance_rate: 0.12,
        avg_gpa: (3.69, 3.95),
        sat: (1350, 1530),
        act: (31, 34),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &["Business", "Liberal Arts", "Film", "Economics", "Psychology"],
    },
    SchoolSeed {
        name: "Tufts University",
        rank: 28,
        acceptance_rate: 0.095,
        avg_gpa: (3.91, 4.13),
        sat: (1420, 1540),
        act: (32, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of North Carolina at Chapel Hill",
        rank: 28,
        acceptance_rate: 0.167,
        avg_gpa: (3.87, 4.39),
        sat: (1300, 1480),
        act: (29, 33),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "UC Santa Barbara",
        rank: 31,
        acceptance_rate: 0.257,
        avg_gpa: (3.85, 4.22),
        sat: (1230, 1480),
        act: (27, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Florida",
        rank: 32,
        acceptance_rate: 0.23,
        avg_gpa: (3.85, 4.42),
        sat: (1280, 1450),
        act: (28, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "UC Irvine",
        rank: 32,
        acceptance_rate: 0.211,
        avg_gpa: (3.83, 4.18),
        sat: (1230, 1450),
        act: (26, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Boston College",
        rank: 34,
        acceptance_rate: 0.167,
        avg_gpa: (3.86, 4.09),
        sat: (1370, 1500),
        act: (31, 34),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "UC San Diego",
        rank: 34,
        acceptance_rate: 0.238,
        avg_gpa: (3.87, 4.23),
        sat: (1250, 1490),
        act: (27, 34),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Rochester",
        rank: 36,
        acceptance_rate: 0.387,
        avg_gpa: (3.80, 4.05),
        sat: (1330, 1510),
        act: (30, 34),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Boston University",
        rank: 37,
        acceptance_rate: 0.14,
        avg_gpa: (3.71, 3.96),
        sat: (1310, 1500),
        act: (30, 34),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &["Business", "Communications", "Engineering", "Biology", "Economics"],
    },
    SchoolSeed {
        name: "UC Davis",
        rank: 37,
        acceptance_rate: 0.372,
        avg_gpa: (3.82, 4.16),
        sat: (1160, 1430),
        act: (25, 32),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Brandeis University",
        rank: 39,
        acceptance_rate: 0.31,
        avg_gpa: (3.79, 4.03),
        sat: (1330, 1500),
        act: (30, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Case Western Reserve University",
        rank: 39,
        acceptance_rate: 0.267,
        avg_gpa: (3.78, 4.02),
        sat: (1330, 1500),
        act: (31, 34),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::EarlyAction,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "College of William & Mary",
        rank: 39,
        acceptance_rate: 0.333,
        avg_gpa: (3.84, 4.28),
        sat: (1330, 1490),
        act: (30, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Georgia Institute of Technology",
        rank: 42,
        acceptance_rate: 0.161,
        avg_gpa: (3.87, 4.18),
        sat: (1370, 1530),
        act: (31, 35),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Tulane University",
        rank: 42,
        acceptance_rate: 0.089,
        avg_gpa: (3.76, 4.00),
        sat: (1340, 1490),
        act: (30, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::EarlyAction,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Wisconsin-Madison",
        rank: 42,
        acceptance_rate: 0.494,
        avg_gpa: (3.82, 4.05),
        sat: (1300, 1480),
        act: (28, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Illinois Urbana-Champaign",
        rank: 45,
        acceptance_rate: 0.447,
        avg_gpa: (3.80, 4.04),
        sat: (1280, 1490),
        act: (28, 34),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Lehigh University",
        rank: 45,
        acceptance_rate: 0.323,
        avg_gpa: (3.75, 3.99),
        sat: (1320, 1480),
        act: (30, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Northeastern University",
        rank: 45,
        acceptance_rate: 0.066,
        avg_gpa: (3.82, 4.06),
        sat: (1390, 1530),
        act: (32, 35),
        tier: SelectivityTier::HighlyCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::EarlyAction,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Pepperdine University",
        rank: 45,
        acceptance_rate: 0.317,
        avg_gpa: (3.73, 3.97),
        sat: (1230, 1420),
        act: (27, 32),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyDecision, RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Ohio State University",
        rank: 49,
        acceptance_rate: 0.527,
        avg_gpa: (3.76, 4.00),
        sat: (1240, 1450),
        act: (27, 32),
        tier: SelectivityTier::Competitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Purdue University",
        rank: 49,
        acceptance_rate: 0.528,
        avg_gpa: (3.74, 3.98),
        sat: (1190, 1440),
        act: (26, 33),
        tier: SelectivityTier::Competitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Georgia",
        rank: 49,
        acceptance_rate: 0.426,
        avg_gpa: (3.79, 4.02),
        sat: (1240, 1420),
        act: (27, 32),
        tier: SelectivityTier::Competitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "University of Texas at Austin",
        rank: 49,
        acceptance_rate: 0.298,
        avg_gpa: (3.77, 4.01),
        sat: (1230, 1480),
        act: (27, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[RoundKind::EarlyAction, RoundKind::RegularDecision],
        demonstrated_interest: false,
        need_blind: false,
        popular_majors: &[],
    },
    SchoolSeed {
        name: "Villanova University",
        rank: 49,
        acceptance_rate: 0.23,
        avg_gpa: (3.78, 4.01),
        sat: (1330, 1480),
        act: (30, 33),
        tier: SelectivityTier::VeryCompetitive,
        rounds: &[
            RoundKind::EarlyDecisionI,
            RoundKind::EarlyDecisionII,
            RoundKind::EarlyAction,
            RoundKind::RegularDecision,
        ],
        demonstrated_interest: true,
        need_blind: false,
        popular_majors: &[],
    },];

