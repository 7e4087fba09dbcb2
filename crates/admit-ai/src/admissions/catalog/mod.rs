//! Read-only per-school admissions statistics, keyed by institution name.

mod builtin;
mod parser;
mod reference;

pub use reference::ap_subjects;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Coarse selectivity bucket controlling how steep the probability curve is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectivityTier {
    VeryCompetitive,
    HighlyCompetitive,
    MostCompetitive,
    #[serde(other)]
    Competitive,
}

impl SelectivityTier {
    pub const fn code(self) -> &'static str {
        match self {
            SelectivityTier::Competitive => "competitive",
            SelectivityTier::VeryCompetitive => "very_competitive",
            SelectivityTier::HighlyCompetitive => "highly_competitive",
            SelectivityTier::MostCompetitive => "most_competitive",
        }
    }

    /// Human readable form, e.g. "most competitive".
    pub const fn label(self) -> &'static str {
        match self {
            SelectivityTier::Competitive => "competitive",
            SelectivityTier::VeryCompetitive => "very competitive",
            SelectivityTier::HighlyCompetitive => "highly competitive",
            SelectivityTier::MostCompetitive => "most competitive",
        }
    }
}

impl FromStr for SelectivityTier {
    type Err = std::convert::Infallible;

    /// Unrecognised tiers fall back to `Competitive`, the flattest curve.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(|c: char| c == ' ' || c == '-', "_");
        Ok(match normalized.as_str() {
            "most_competitive" => SelectivityTier::MostCompetitive,
            "highly_competitive" => SelectivityTier::HighlyCompetitive,
            "very_competitive" => SelectivityTier::VeryCompetitive,
            _ => SelectivityTier::Competitive,
        })
    }
}

/// Admissions cycle an applicant applies under.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RoundKind {
    #[serde(rename = "Early Decision (ED)", alias = "ED")]
    EarlyDecision,
    #[serde(rename = "Early Decision I (ED1)", alias = "ED1")]
    EarlyDecisionI,
    #[serde(rename = "Early Decision II (ED2)", alias = "ED2")]
    EarlyDecisionII,
    #[serde(rename = "Restrictive Early Action (REA)", alias = "REA")]
    RestrictiveEarlyAction,
    #[serde(rename = "Single-Choice Early Action (SCEA)", alias = "SCEA")]
    SingleChoiceEarlyAction,
    #[serde(rename = "Early Action (EA)", alias = "EA")]
    EarlyAction,
    #[default]
    #[serde(rename = "Regular Decision (RD)", alias = "RD")]
    RegularDecision,
    #[serde(rename = "Rolling Admission", alias = "Rolling")]
    Rolling,
}

impl RoundKind {
    pub const ALL: [RoundKind; 8] = [
        RoundKind::EarlyDecision,
        RoundKind::EarlyDecisionI,
        RoundKind::EarlyDecisionII,
        RoundKind::RestrictiveEarlyAction,
        RoundKind::SingleChoiceEarlyAction,
        RoundKind::EarlyAction,
        RoundKind::RegularDecision,
        RoundKind::Rolling,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            RoundKind::EarlyDecision => "ED",
            RoundKind::EarlyDecisionI => "ED1",
            RoundKind::EarlyDecisionII => "ED2",
            RoundKind::RestrictiveEarlyAction => "REA",
            RoundKind::SingleChoiceEarlyAction => "SCEA",
            RoundKind::EarlyAction => "EA",
            RoundKind::RegularDecision => "RD",
            RoundKind::Rolling => "Rolling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoundKind::EarlyDecision => "Early Decision (ED)",
            RoundKind::EarlyDecisionI => "Early Decision I (ED1)",
            RoundKind::EarlyDecisionII => "Early Decision II (ED2)",
            RoundKind::RestrictiveEarlyAction => "Restrictive Early Action (REA)",
            RoundKind::SingleChoiceEarlyAction => "Single-Choice Early Action (SCEA)",
            RoundKind::EarlyAction => "Early Action (EA)",
            RoundKind::RegularDecision => "Regular Decision (RD)",
            RoundKind::Rolling => "Rolling Admission",
        }
    }

    /// Whether a school advertising `offered` accepts applications under `self`.
    /// A plain ED round and ED1 are the same deadline under two names.
    pub fn is_satisfied_by(self, offered: RoundKind) -> bool {
        use RoundKind::{EarlyDecision, EarlyDecisionI};
        self == offered
            || matches!(
                (self, offered),
                (EarlyDecision, EarlyDecisionI) | (EarlyDecisionI, EarlyDecision)
            )
    }
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised application round '{0}'")]
pub struct UnknownRound(pub String);

impl FromStr for RoundKind {
    type Err = UnknownRound;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        RoundKind::ALL
            .into_iter()
            .find(|round| {
                round.code().eq_ignore_ascii_case(trimmed)
                    || round.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownRound(trimmed.to_string()))
    }
}

/// Static admissions statistics for one institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u16>,
    pub acceptance_rate: f64,
    pub avg_gpa_unweighted: f64,
    pub avg_gpa_weighted: f64,
    pub sat_25th: u16,
    pub sat_75th: u16,
    pub act_range: (u8, u8),
    pub selectivity_tier: SelectivityTier,
    pub values_demonstrated_interest: bool,
    pub need_blind: bool,
    pub available_application_rounds: BTreeSet<RoundKind>,
    #[serde(default)]
    pub popular_majors: Vec<String>,
}

impl SchoolRecord {
    pub fn offers(&self, round: RoundKind) -> bool {
        self.available_application_rounds
            .iter()
            .any(|offered| round.is_satisfied_by(*offered))
    }

    pub fn sat_midpoint(&self) -> f64 {
        (f64::from(self.sat_25th) + f64::from(self.sat_75th)) / 2.0
    }

    /// Check the record invariants; the error names the violated bound.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("school name is empty".to_string());
        }
        if !(self.acceptance_rate > 0.0 && self.acceptance_rate <= 1.0) {
            return Err(format!(
                "acceptance_rate {} outside (0, 1]",
                self.acceptance_rate
            ));
        }
        if self.sat_25th > self.sat_75th {
            return Err(format!(
                "sat_25th {} exceeds sat_75th {}",
                self.sat_25th, self.sat_75th
            ));
        }
        if self.act_range.0 > self.act_range.1 {
            return Err(format!(
                "ACT low {} exceeds ACT high {}",
                self.act_range.0, self.act_range.1
            ));
        }
        for (label, gpa) in [
            ("avg_gpa_unweighted", self.avg_gpa_unweighted),
            ("avg_gpa_weighted", self.avg_gpa_weighted),
        ] {
            if !(gpa > 0.0 && gpa <= 5.0) {
                return Err(format!("{label} {gpa} outside (0, 5]"));
            }
        }
        Ok(())
    }
}

/// Errors raised while loading a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read school catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid school catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("school '{name}' rejected: {reason}")]
    InvalidRecord { name: String, reason: String },
    #[error("school '{0}' listed more than once")]
    Duplicate(String),
}

/// Immutable name-indexed store of school records, shared read-only across evaluations.
#[derive(Debug, Clone, Default)]
pub struct SchoolCatalog {
    schools: BTreeMap<String, SchoolRecord>,
}

impl SchoolCatalog {
    /// Catalog of top US universities shipped with the engine.
    pub fn builtin() -> Self {
        let schools = builtin::records()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self { schools }
    }

    pub fn from_records<I>(records: I) -> Result<Self, CatalogImportError>
    where
        I: IntoIterator<Item = SchoolRecord>,
    {
        let mut schools = BTreeMap::new();
        for mut record in records {
            record.name = record.name.trim().to_string();
            record
                .validate()
                .map_err(|reason| CatalogImportError::InvalidRecord {
                    name: record.name.clone(),
                    reason,
                })?;
            if schools.contains_key(&record.name) {
                return Err(CatalogImportError::Duplicate(record.name));
            }
            schools.insert(record.name.clone(), record);
        }
        Ok(Self { schools })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let records = parser::parse_records(reader)?;
        Self::from_records(records)
    }

    pub fn lookup(&self, name: &str) -> Option<&SchoolRecord> {
        self.schools.get(name.trim())
    }

    /// All school names in sorted order.
    pub fn list_names(&self) -> Vec<&str> {
        self.schools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}
