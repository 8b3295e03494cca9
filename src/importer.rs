use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{RedstringError, Result};
use crate::matcher::resolve_recipient;
use crate::models::Contribution;

// ---------------------------------------------------------------------------
// Column table
// ---------------------------------------------------------------------------

/// Semantic meaning of one position in a CFB contribution filing row.
/// The filings keep every column present, so unused positions are
/// explicit `Skip` entries rather than blank sentinels.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Col {
    Skip,
    Election,
    OfficeCd,
    RecipId,
    CanClass,
    RecipientName,
    Committee,
    Filing,
    Schedule,
    RefNo,
    Date,
    ContributorName,
    CCode,
    Borough,
    City,
    State,
    Zip,
    Occupation,
    EmployerName,
    Amount,
}

const COLUMNS: &[Col] = &[
    Col::Election,
    Col::OfficeCd,
    Col::RecipId,
    Col::CanClass,
    Col::RecipientName,
    Col::Committee,
    Col::Filing,
    Col::Schedule,
    Col::Skip, // pageno
    Col::Skip, // sequenceno
    Col::RefNo,
    Col::Date,
    Col::Skip, // refunddate
    Col::ContributorName,
    Col::CCode,
    Col::Skip, // strno
    Col::Skip, // strname
    Col::Skip, // apartment
    Col::Borough,
    Col::City,
    Col::State,
    Col::Zip,
    Col::Occupation,
    Col::EmployerName,
    Col::Skip, // empstrno
    Col::Skip, // empstrname
    Col::Skip, // empcity
    Col::Skip, // empstate
    Col::Amount,
    Col::Skip, // matchamnt
    Col::Skip, // prevamnt
    Col::Skip, // pay_method
    Col::Skip, // intermno
    Col::Skip, // intermname
    Col::Skip, // intstrno
    Col::Skip, // instrnm
    Col::Skip, // intaptno
    Col::Skip, // intcity
    Col::Skip, // intst
    Col::Skip, // intzip
    Col::Skip, // intempname
    Col::Skip, // intempstno
    Col::Skip, // intempstnm
    Col::Skip, // intempcity
    Col::Skip, // intempst
    Col::Skip, // intoccupa
    Col::Skip, // purposecd
    Col::Skip, // exemptcd
    Col::Skip, // adjtypecd
    Col::Skip, // rr_ind
    Col::Skip, // seg_ind
    Col::Skip, // int_c_code
];

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Filing dates come as M/D/YYYY, without zero padding.
pub fn parse_date_mdy(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%m/%d/%Y")
        .map_err(|_| RedstringError::BadDate(raw.to_string()))
}

/// Decimal dollars to integer cents.
pub fn parse_amount_cents(raw: &str) -> Result<i64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RedstringError::BadAmount(raw.to_string()))?;
    Ok((v * 100.0).round() as i64)
}

// ---------------------------------------------------------------------------
// Record normalizer
// ---------------------------------------------------------------------------

fn normalize_record(
    conn: &Connection,
    record: &csv::StringRecord,
    unmatched: &mut BTreeSet<String>,
) -> Result<Contribution> {
    if record.len() != COLUMNS.len() {
        return Err(RedstringError::ColumnCount {
            expected: COLUMNS.len(),
            found: record.len(),
        });
    }
    let mut c = Contribution::default();
    for (i, val) in record.iter().enumerate() {
        if val.is_empty() {
            continue;
        }
        match COLUMNS[i] {
            Col::Skip => {}
            Col::Election => c.election = val.to_string(),
            Col::OfficeCd => c.office_cd = val.to_string(),
            Col::RecipId => c.cfb_recipient_id = val.to_string(),
            Col::CanClass => c.can_class = val.to_string(),
            Col::RecipientName => {
                c.recipient_name = val.to_string();
                match resolve_recipient(conn, val)? {
                    Some(id) => c.recipient_id = Some(id),
                    None => {
                        unmatched.insert(val.to_string());
                    }
                }
            }
            Col::Committee => c.committee = val.to_string(),
            Col::Filing => c.filing = val.to_string(),
            Col::Schedule => c.schedule = val.to_string(),
            Col::RefNo => c.refno = val.to_string(),
            Col::Date => c.date = Some(parse_date_mdy(val)?),
            Col::ContributorName => c.contributor_name = val.to_string(),
            Col::CCode => c.c_code = val.to_string(),
            Col::Borough => c.borough = val.to_string(),
            Col::City => c.city = val.to_string(),
            Col::State => c.state = val.to_string(),
            Col::Zip => c.zip = val.to_string(),
            Col::Occupation => c.occupation = val.to_string(),
            Col::EmployerName => c.employer_name = val.to_string(),
            Col::Amount => c.amount = parse_amount_cents(val)?,
        }
    }
    Ok(c)
}

// ---------------------------------------------------------------------------
// Upsert engine
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub enum Upsert {
    Inserted,
    /// A row with this refno already exists. Existing rows are never
    /// updated by the importer, so a corrected filing re-imported later
    /// will not overwrite the first-seen values.
    Duplicate,
}

pub fn upsert_contribution(conn: &Connection, c: &Contribution) -> Result<Upsert> {
    if c.refno.is_empty() {
        return Err(RedstringError::MissingRefNo);
    }
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM contributions WHERE refno = ?1", [&c.refno], |row| {
            row.get(0)
        })
        .optional()?;
    if existing.is_some() {
        return Ok(Upsert::Duplicate);
    }
    conn.execute(
        "INSERT INTO contributions (
            refno, amount, date, contributor_name, recipient_name,
            recipient_id, cfb_recipient_id, election, office_cd, can_class,
            committee, filing, schedule, c_code, borough,
            city, state, zip, occupation, employer_name
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
        rusqlite::params![
            c.refno,
            c.amount,
            c.date.map(|d| d.format("%Y-%m-%d").to_string()),
            c.contributor_name,
            c.recipient_name,
            c.recipient_id,
            c.cfb_recipient_id,
            c.election,
            c.office_cd,
            c.can_class,
            c.committee,
            c.filing,
            c.schedule,
            c.c_code,
            c.borough,
            c.city,
            c.state,
            c.zip,
            c.occupation,
            c.employer_name,
        ],
    )?;
    Ok(Upsert::Inserted)
}

// ---------------------------------------------------------------------------
// import_file
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub duplicates: usize,
    pub missing_refno: usize,
    pub unmatched: BTreeSet<String>,
}

/// Run the batch import over one CFB contributions CSV.
///
/// Rows are processed strictly in order, one lookup or insert per
/// statement; there is no transaction spanning records. A malformed
/// date or amount aborts the run (bad export, fix upstream and rerun).
/// A row without a reference number is skipped and counted; a refno
/// already in the store is a no-op.
pub fn import_file(conn: &Connection, file_path: &Path) -> Result<ImportResult> {
    let file = std::fs::File::open(file_path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut result = ImportResult::default();
    for row in rdr.records() {
        let record = row?;
        let c = normalize_record(conn, &record, &mut result.unmatched)?;
        match upsert_contribution(conn, &c) {
            Ok(Upsert::Inserted) => result.imported += 1,
            Ok(Upsert::Duplicate) => result.duplicates += 1,
            Err(RedstringError::MissingRefNo) => result.missing_refno += 1,
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}

/// Write the unmatched recipient names one per line, replacing any
/// report from a previous run.
pub fn write_unmatched_report(path: &Path, names: &BTreeSet<String>) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    for name in names {
        writeln!(file, "{name}")?;
    }
    Ok(())
}
