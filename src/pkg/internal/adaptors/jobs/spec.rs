use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Draft,
    Published,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Draft => write!(f, "DRAFT"),
            JobStatus::Published => write!(f, "PUBLISHED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: u32,
    pub company: String,
    /// Plain URL or `data:` URL, empty when no logo was uploaded.
    #[serde(default)]
    pub company_logo: String,
    pub job_name: String,
    pub description: String,
    pub status: JobStatus,
    pub work_type: String,
    #[serde(with = "publish_date")]
    pub publish_date: NaiveDate,
    pub created_by: String,
}

impl JobEntry {
    /// First character of the company name, shown when there is no logo.
    pub fn initial(&self) -> String {
        self.company.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn publish_date_display(&self) -> String {
        publish_date::display(&self.publish_date)
    }
}

/// Publish dates travel as display strings (`13 Oct 2023`) but are kept as
/// real dates so that ordering is chronological.
pub mod publish_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const DISPLAY_FORMAT: &str = "%d %b %Y";
    const ACCEPTED_FORMATS: [&str; 3] = [DISPLAY_FORMAT, "%d/%m/%Y", "%Y-%m-%d"];

    pub fn display(date: &NaiveDate) -> String {
        date.format(DISPLAY_FORMAT).to_string()
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DISPLAY_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> core::result::Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised publish date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_publish_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 10, 13);
        assert_eq!(publish_date::parse("13 Oct 2023"), expected);
        assert_eq!(publish_date::parse("13/10/2023"), expected);
        assert_eq!(publish_date::parse(" 2023-10-13 "), expected);
        assert_eq!(publish_date::parse("October the 13th"), None);
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = JobEntry {
            id: 1,
            company: "Meta".into(),
            company_logo: "./meta-logo.png".into(),
            job_name: "Ethical Hacker".into(),
            description: "Lorem ipsum dolor sit amet.".into(),
            status: JobStatus::Draft,
            work_type: "Remote".into(),
            publish_date: NaiveDate::from_ymd_opt(2023, 10, 13).unwrap(),
            created_by: "Marie S.".into(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["jobName"], json!("Ethical Hacker"));
        assert_eq!(value["status"], json!("DRAFT"));
        assert_eq!(value["publishDate"], json!("13 Oct 2023"));
        assert_eq!(value["createdBy"], json!("Marie S."));
        assert_eq!(entry.initial(), "M");
    }
}
