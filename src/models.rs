use chrono::NaiveDate;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Individual {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cfb_name: String,
    pub role: Option<String>,
}

impl Individual {
    /// Canonical display form the CFB filings use: "Last, First".
    /// This is the exact-match key for recipient resolution.
    pub fn cfb_name(first: &str, last: &str) -> String {
        format!("{last}, {first}")
    }
}

/// One normalized CFB contribution filing, ready for the store.
/// `amount` is integer cents; `recipient_id` is the resolved internal
/// individual, left `None` when the recipient name did not match.
#[derive(Debug, Clone, Default)]
pub struct Contribution {
    pub refno: String,
    pub amount: i64,
    pub date: Option<NaiveDate>,
    pub contributor_name: String,
    pub recipient_name: String,
    pub recipient_id: Option<i64>,
    pub cfb_recipient_id: String,
    pub election: String,
    pub office_cd: String,
    pub can_class: String,
    pub committee: String,
    pub filing: String,
    pub schedule: String,
    pub c_code: String,
    pub borough: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub occupation: String,
    pub employer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfb_name() {
        assert_eq!(Individual::cfb_name("John", "Smith"), "Smith, John");
    }
}
