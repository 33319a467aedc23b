// src/ingest/record.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Respondent sex. Declaration order is the group-by order (alphabetical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to "it is much better for everyone involved if the man is the
/// achiever outside the home and the woman takes care of the home and family".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Agreement {
    #[serde(rename = "strongly disagree")]
    StronglyDisagree,
    #[serde(rename = "disagree")]
    Disagree,
    #[serde(rename = "agree")]
    Agree,
    #[serde(rename = "strongly agree")]
    StronglyAgree,
}

impl Agreement {
    /// All levels, lowest agreement first.
    pub const LEVELS: [Agreement; 4] = [
        Agreement::StronglyDisagree,
        Agreement::Disagree,
        Agreement::Agree,
        Agreement::StronglyAgree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Agreement::StronglyDisagree => "strongly disagree",
            Agreement::Disagree => "disagree",
            Agreement::Agree => "agree",
            Agreement::StronglyAgree => "strongly agree",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::LEVELS.into_iter().find(|l| l.as_str() == wanted)
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cleaned survey row. Fields carry their dashboard names, not the GSS codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Respondent {
    pub id: Option<f64>,
    pub weight: Option<f64>,
    pub sex: Option<Sex>,
    pub education: Option<f64>,
    pub region: Option<String>,
    pub age: Option<f64>,
    pub income: Option<f64>,
    pub job_prestige: Option<f64>,
    pub mother_job_prestige: Option<f64>,
    pub father_job_prestige: Option<f64>,
    pub socioeconomic_index: Option<f64>,
    pub satjob: Option<String>,
    pub relationship: Option<String>,
    pub male_breadwinner: Option<Agreement>,
    pub men_bettersuited: Option<String>,
    pub child_suffer: Option<String>,
    pub men_overwork: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agreement_levels_are_ordered() {
        let mut shuffled = vec![
            Agreement::Agree,
            Agreement::StronglyAgree,
            Agreement::StronglyDisagree,
            Agreement::Disagree,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Agreement::LEVELS.to_vec());
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(Agreement::from_str(" Strongly Agree "), Some(Agreement::StronglyAgree));
        assert_eq!(Agreement::from_str("neutral"), None);
        assert_eq!(Sex::from_str("MALE"), Some(Sex::Male));
        assert_eq!(Sex::from_str("other"), None);
        assert!(Sex::Female < Sex::Male);
    }

    #[test]
    fn serializes_as_labels() {
        assert_eq!(
            serde_json::to_string(&Agreement::StronglyDisagree).unwrap(),
            "\"strongly disagree\""
        );
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
    }
}
