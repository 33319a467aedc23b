// src/ingest/mod.rs

pub mod record;
pub mod utils;

use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::borrow::Cow;
use tracing::{debug, info, warn};

pub use record::{Agreement, Respondent, Sex};
pub use utils::MissingValues;

use utils::{clean_str, AGE_TOP_CODE};

/// Survey columns kept for the dashboard: (GSS code, dashboard name).
/// Indexed by [`Col`].
pub const SOURCE_COLUMNS: [(&str, &str); 17] = [
    ("id", "id"),
    ("wtss", "weight"),
    ("sex", "sex"),
    ("educ", "education"),
    ("region", "region"),
    ("age", "age"),
    ("coninc", "income"),
    ("prestg10", "job_prestige"),
    ("mapres10", "mother_job_prestige"),
    ("papres10", "father_job_prestige"),
    ("sei10", "socioeconomic_index"),
    ("satjob", "satjob"),
    ("fechld", "relationship"),
    ("fefam", "male_breadwinner"),
    ("fepol", "men_bettersuited"),
    ("fepresch", "child_suffer"),
    ("meovrwrk", "men_overwork"),
];

/// Slot of each kept column in [`SOURCE_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Col {
    Id,
    Wtss,
    Sex,
    Educ,
    Region,
    Age,
    Coninc,
    Prestg10,
    Mapres10,
    Papres10,
    Sei10,
    Satjob,
    Fechld,
    Fefam,
    Fepol,
    Fepresch,
    Meovrwrk,
}

impl Col {
    pub const ALL: [Col; SOURCE_COLUMNS.len()] = [
        Col::Id,
        Col::Wtss,
        Col::Sex,
        Col::Educ,
        Col::Region,
        Col::Age,
        Col::Coninc,
        Col::Prestg10,
        Col::Mapres10,
        Col::Papres10,
        Col::Sei10,
        Col::Satjob,
        Col::Fechld,
        Col::Fefam,
        Col::Fepol,
        Col::Fepresch,
        Col::Meovrwrk,
    ];

    /// GSS code, as it appears in the source header.
    pub fn code(self) -> &'static str {
        SOURCE_COLUMNS[self as usize].0
    }

    pub fn name(self) -> &'static str {
        SOURCE_COLUMNS[self as usize].1
    }
}

/// The cleaned respondent table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Survey {
    rows: Vec<Respondent>,
}

impl Survey {
    pub fn new(rows: Vec<Respondent>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Respondent] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The export is Windows-1252; undecodable bytes are replaced, not fatal.
pub fn decode_cp1252(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if had_errors {
        warn!("survey source contained bytes outside cp1252; replaced");
    }
    text
}

/// Parse the raw CSV text into typed respondents.
///
/// Only the columns in [`SOURCE_COLUMNS`] are read; every one must be present
/// in the header. Cells matching `missing` become `None`. A cell that is not
/// missing but cannot be coerced to its field type aborts the whole load.
#[tracing::instrument(level = "info", skip(text, missing), fields(bytes = text.len()))]
pub fn parse_survey(text: &str, missing: &MissingValues) -> Result<Survey> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers().context("reading CSV header")?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // header is line 1
        let line = idx + 2;
        let record = result.with_context(|| format!("CSV parse error at line {}", line))?;
        let cells = Cells {
            record: &record,
            columns: &columns,
            missing,
            line,
        };
        rows.push(cells.respondent()?);
    }

    info!(rows = rows.len(), columns = SOURCE_COLUMNS.len(), "loaded survey");
    Ok(Survey::new(rows))
}

/// Position of each kept column in the source header, indexed by [`Col`].
struct ColumnIndex {
    positions: [usize; SOURCE_COLUMNS.len()],
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let mut positions = [0; SOURCE_COLUMNS.len()];
        for col in Col::ALL {
            positions[col as usize] = headers
                .iter()
                .position(|h| clean_str(h) == col.code())
                .ok_or_else(|| anyhow!("survey source has no `{}` column", col.code()))?;
        }
        debug!(source_columns = headers.len(), "resolved survey columns");
        Ok(Self { positions })
    }

    fn position(&self, col: Col) -> usize {
        self.positions[col as usize]
    }
}

/// One CSV record viewed through the column index.
struct Cells<'a> {
    record: &'a StringRecord,
    columns: &'a ColumnIndex,
    missing: &'a MissingValues,
    line: usize,
}

impl Cells<'_> {
    fn raw(&self, col: Col) -> Option<&str> {
        let cell = self.record.get(self.columns.position(col)).unwrap_or("");
        if self.missing.is_missing(cell) {
            None
        } else {
            Some(clean_str(cell))
        }
    }

    fn text(&self, col: Col) -> Option<String> {
        self.raw(col).map(str::to_string)
    }

    fn number(&self, col: Col) -> Result<Option<f64>> {
        self.raw(col)
            .map(|cell| parse_finite(cell).with_context(|| self.at(col)))
            .transpose()
    }

    fn age(&self) -> Result<Option<f64>> {
        let Some(cell) = self.raw(Col::Age) else {
            return Ok(None);
        };
        let value = if cell.eq_ignore_ascii_case(AGE_TOP_CODE.0) {
            AGE_TOP_CODE.1
        } else {
            parse_finite(cell).with_context(|| self.at(Col::Age))?
        };
        if value < 0.0 {
            bail!("negative age {} at {}", value, self.at(Col::Age));
        }
        Ok(Some(value))
    }

    fn sex(&self) -> Result<Option<Sex>> {
        self.raw(Col::Sex)
            .map(|cell| {
                Sex::from_str(cell)
                    .ok_or_else(|| anyhow!("unknown sex `{}` at {}", cell, self.at(Col::Sex)))
            })
            .transpose()
    }

    fn agreement(&self, col: Col) -> Result<Option<Agreement>> {
        self.raw(col)
            .map(|cell| {
                Agreement::from_str(cell)
                    .ok_or_else(|| anyhow!("unknown agreement level `{}` at {}", cell, self.at(col)))
            })
            .transpose()
    }

    fn at(&self, col: Col) -> String {
        format!("line {} column `{}`", self.line, col.code())
    }

    fn respondent(&self) -> Result<Respondent> {
        Ok(Respondent {
            id: self.number(Col::Id)?,
            weight: self.number(Col::Wtss)?,
            sex: self.sex()?,
            education: self.number(Col::Educ)?,
            region: self.text(Col::Region),
            age: self.age()?,
            income: self.number(Col::Coninc)?,
            job_prestige: self.number(Col::Prestg10)?,
            mother_job_prestige: self.number(Col::Mapres10)?,
            father_job_prestige: self.number(Col::Papres10)?,
            socioeconomic_index: self.number(Col::Sei10)?,
            satjob: self.text(Col::Satjob),
            relationship: self.text(Col::Fechld),
            male_breadwinner: self.agreement(Col::Fefam)?,
            men_bettersuited: self.text(Col::Fepol),
            child_suffer: self.text(Col::Fepresch),
            men_overwork: self.text(Col::Meovrwrk),
        })
    }
}

fn parse_finite(cell: &str) -> Result<f64> {
    let value: f64 = cell
        .parse()
        .map_err(|_| anyhow!("`{}` is not a number", cell))?;
    if !value.is_finite() {
        bail!("`{}` is not a finite number", cell);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const HEADER: &str = "id,wtss,sex,educ,region,age,coninc,prestg10,mapres10,papres10,sei10,satjob,fechld,fefam,fepol,fepresch,meovrwrk,extra";

    fn csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn cleans_a_full_row() -> Result<()> {
        let text = csv(&[
            "7,1.2,female,16,new england,89 or older,30000,47,IAP,50,65.3,very satisfied,agree,strongly disagree,disagree,IAP,agree,ignored",
        ]);
        let survey = parse_survey(&text, &MissingValues::default())?;
        assert_eq!(survey.len(), 1);

        let r = &survey.rows()[0];
        assert_eq!(r.id, Some(7.0));
        assert_eq!(r.sex, Some(Sex::Female));
        assert_eq!(r.age, Some(89.0));
        assert_eq!(r.income, Some(30000.0));
        assert_eq!(r.mother_job_prestige, None);
        assert_eq!(r.male_breadwinner, Some(Agreement::StronglyDisagree));
        assert_eq!(r.child_suffer, None);
        assert_eq!(r.region.as_deref(), Some("new england"));
        Ok(())
    }

    #[test]
    fn ages_are_numeric_or_absent() -> Result<()> {
        let text = csv(&[
            "1,1,male,12,x,34,1,1,1,1,1,a,b,agree,c,d,e,",
            "2,1,male,12,x,89 or older,1,1,1,1,1,a,b,agree,c,d,e,",
            "3,1,male,12,x,DK,1,1,1,1,1,a,b,agree,c,d,e,",
            "4,1,male,12,x,,1,1,1,1,1,a,b,agree,c,d,e,",
        ]);
        let survey = parse_survey(&text, &MissingValues::default())?;
        let ages: Vec<_> = survey.rows().iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![Some(34.0), Some(89.0), None, None]);
        assert!(survey
            .rows()
            .iter()
            .filter_map(|r| r.age)
            .all(|a| a.is_finite() && a >= 0.0));
        Ok(())
    }

    #[test]
    fn rejects_negative_age() {
        let text = csv(&["1,1,male,12,x,-3,1,1,1,1,1,a,b,agree,c,d,e,"]);
        let err = parse_survey(&text, &MissingValues::default()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("negative age -3"), "{msg}");
        assert!(msg.contains("line 2 column `age`"), "{msg}");
    }

    #[test]
    fn column_slots_line_up_with_source_columns() {
        assert_eq!(Col::ALL.len(), SOURCE_COLUMNS.len());
        for (slot, col) in Col::ALL.into_iter().enumerate() {
            assert_eq!(col as usize, slot);
            assert_eq!((col.code(), col.name()), SOURCE_COLUMNS[slot]);
        }
        assert_eq!(Col::Fefam.name(), "male_breadwinner");
        assert_eq!(Col::Prestg10.code(), "prestg10");
    }

    #[test]
    fn header_order_does_not_matter() -> Result<()> {
        let text = "meovrwrk,fepresch,fepol,fefam,fechld,satjob,sei10,papres10,mapres10,prestg10,coninc,age,region,educ,sex,wtss,id\n\
                    e,d,c,agree,b,a,1,1,1,55,20000,40,x,12,female,1,9";
        let survey = parse_survey(text, &MissingValues::default())?;
        let r = &survey.rows()[0];
        assert_eq!(r.id, Some(9.0));
        assert_eq!(r.sex, Some(Sex::Female));
        assert_eq!(r.job_prestige, Some(55.0));
        assert_eq!(r.men_overwork.as_deref(), Some("e"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_agreement_level() {
        let text = csv(&["1,1,male,12,x,34,1,1,1,1,1,a,b,maybe,c,d,e,"]);
        let err = parse_survey(&text, &MissingValues::default()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("maybe"), "{msg}");
        assert!(msg.contains("fefam"), "{msg}");
    }

    #[test]
    fn rejects_non_numeric_income() {
        let text = csv(&["1,1,male,12,x,34,lots,1,1,1,1,a,b,agree,c,d,e,"]);
        let err = parse_survey(&text, &MissingValues::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2 column `coninc`"));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_survey("id,sex\n1,male", &MissingValues::default()).unwrap_err();
        assert!(err.to_string().contains("wtss"));
    }

    #[test]
    fn decodes_windows_1252() {
        // 0x92 is a right single quote in cp1252
        let text = decode_cp1252(b"CAN\x92T");
        assert_eq!(text, "CAN\u{2019}T");
    }
}
