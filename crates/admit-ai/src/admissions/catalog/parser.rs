use super::{CatalogImportError, RoundKind, SchoolRecord, SelectivityTier};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SchoolRecord>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<SchoolRow>() {
        records.push(row?.into_record()?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SchoolRow {
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rank: Option<String>,
    acceptance_rate: f64,
    avg_gpa_unweighted: f64,
    avg_gpa_weighted: f64,
    sat_25th: u16,
    sat_75th: u16,
    act_low: u8,
    act_high: u8,
    selectivity: String,
    #[serde(deserialize_with = "flexible_bool")]
    values_demonstrated_interest: bool,
    #[serde(deserialize_with = "flexible_bool")]
    need_blind: bool,
    #[serde(default)]
    rounds: String,
    #[serde(default)]
    popular_majors: String,
}

impl SchoolRow {
    fn into_record(self) -> Result<SchoolRecord, CatalogImportError> {
        let rank = match self.rank.as_deref() {
            Some(raw) => Some(raw.parse::<u16>().map_err(|_| {
                CatalogImportError::InvalidRecord {
                    name: self.name.clone(),
                    reason: format!("rank '{raw}' is not a positive integer"),
                }
            })?),
            None => None,
        };

        let mut rounds = BTreeSet::new();
        for code in split_list(&self.rounds) {
            let round =
                code.parse::<RoundKind>()
                    .map_err(|err| CatalogImportError::InvalidRecord {
                        name: self.name.clone(),
                        reason: err.to_string(),
                    })?;
            rounds.insert(round);
        }
        // Every school takes regular applications even when the export omits it.
        rounds.insert(RoundKind::RegularDecision);

        let selectivity_tier = self
            .selectivity
            .parse::<SelectivityTier>()
            .unwrap_or(SelectivityTier::Competitive);

        Ok(SchoolRecord {
            rank,
            acceptance_rate: self.acceptance_rate,
            avg_gpa_unweighted: self.avg_gpa_unweighted,
            avg_gpa_weighted: self.avg_gpa_weighted,
            sat_25th: self.sat_25th,
            sat_75th: self.sat_75th,
            act_range: (self.act_low, self.act_high),
            selectivity_tier,
            values_demonstrated_interest: self.values_demonstrated_interest,
            need_blind: self.need_blind,
            available_application_rounds: rounds,
            popular_majors: split_list(&self.popular_majors)
                .map(str::to_string)
                .collect(),
            name: self.name,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';')
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, found '{other}'"
        ))),
    }
}
