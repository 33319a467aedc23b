use std::collections::HashSet;

/// Tokens the survey export uses for "no answer".
pub const SURVEY_SENTINELS: &[&str] = &[
    "IAP",
    "IAP,DK,NA,uncodeable",
    "NOT SURE",
    "DK",
    "IAP, DK, NA, uncodeable",
    ".a",
    "CAN'T CHOOSE",
];

/// Tokens any CSV reader treats as missing.
pub const STANDARD_NA: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Top-coded age label; the respondent is recorded as this age.
pub const AGE_TOP_CODE: (&str, f64) = ("89 or older", 89.0);

/// Set of cell values that mean "absent".
#[derive(Debug, Clone)]
pub struct MissingValues {
    tokens: HashSet<String>,
}

impl Default for MissingValues {
    fn default() -> Self {
        Self::new(SURVEY_SENTINELS.iter().copied())
    }
}

impl MissingValues {
    /// The standard NA tokens plus `extra`.
    pub fn new<'a>(extra: impl IntoIterator<Item = &'a str>) -> Self {
        let tokens = STANDARD_NA
            .iter()
            .copied()
            .chain(extra)
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn is_missing(&self, cell: &str) -> bool {
        self.tokens.contains(clean_str(cell))
    }
}

/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_and_standard_tokens_are_missing() {
        let na = MissingValues::default();
        for token in ["IAP", " DK ", "CAN'T CHOOSE", "", "NaN", "\"NA\""] {
            assert!(na.is_missing(token), "{token:?} should be missing");
        }
        assert!(!na.is_missing("agree"));
        assert!(!na.is_missing("0"));
    }

    #[test]
    fn clean_str_strips_quotes() {
        assert_eq!(clean_str("  \"male\" "), "male");
        assert_eq!(clean_str("\""), "\"");
        assert_eq!(clean_str("plain"), "plain");
    }
}
