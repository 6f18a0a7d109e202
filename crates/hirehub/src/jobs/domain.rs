use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier wrapper for job posting documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct JobId(pub String);

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawJobId {
            Plain(String),
            ObjectId {
                #[serde(rename = "$oid")]
                oid: String,
            },
        }

        Ok(match RawJobId::deserialize(deserializer)? {
            RawJobId::Plain(id) => JobId(id),
            RawJobId::ObjectId { oid } => JobId(oid),
        })
    }
}

/// A job posting as served by the job listing endpoint.
///
/// Every text field is optional on the wire and defaults to empty. Salaries stay raw strings;
/// [`JobPosting::min_salary_value`] and [`JobPosting::max_salary_value`] read the leading integer
/// and fall back to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    #[serde(rename = "_id")]
    pub id: JobId,
    #[serde(rename = "jobTitle", deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company_name: String,
    #[serde(rename = "minPrice", deserialize_with = "lenient_string")]
    pub min_salary: String,
    #[serde(rename = "maxPrice", deserialize_with = "lenient_string")]
    pub max_salary: String,
    #[serde(alias = "SalaryType", deserialize_with = "lenient_string")]
    pub salary_type: String,
    #[serde(rename = "jobLocation", deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub posting_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub experience_level: String,
    #[serde(deserialize_with = "lenient_string")]
    pub employment_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub posted_by: String,
    #[serde(deserialize_with = "lenient_skills")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company_logo: String,
}

impl JobPosting {
    pub fn min_salary_value(&self) -> i64 {
        parse_leading_integer(&self.min_salary).unwrap_or(0)
    }

    pub fn max_salary_value(&self) -> i64 {
        parse_leading_integer(&self.max_salary).unwrap_or(0)
    }

    /// Posting timestamp in UTC, or `None` when the date is missing or malformed.
    pub fn posted_at(&self) -> Option<NaiveDateTime> {
        parse_posting_date(&self.posting_date)
    }
}

/// Reads an optional sign and the digits that follow, ignoring any trailing text.
///
/// `"50000"` → 50000, `"50k"` → 50, `" 7"` → 7, `"abc"` → `None`. Magnitudes beyond the `i64`
/// range saturate at `i64::MAX` or `i64::MIN`.
pub(crate) fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value = rest[..digits_end].bytes().try_fold(0i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        let next = acc.checked_mul(10);
        if negative {
            next.and_then(|value| value.checked_sub(digit))
        } else {
            next.and_then(|value| value.checked_add(digit))
        }
    });

    Some(match value {
        Some(value) => value,
        None if negative => i64::MIN,
        None => i64::MAX,
    })
}

/// Parses RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps, and bare
/// `YYYY-MM-DD` dates. Bare dates are midnight and every value is read as UTC.
pub(crate) fn parse_posting_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Array(_)) => String::new(),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        // Extended JSON dates exported from the document store.
        Some(Value::Object(map)) => map
            .get("$date")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default(),
    })
}

fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(skill) => Some(skill),
            // Skill pickers post `{ value, label }` pairs.
            Value::Object(map) => map
                .get("label")
                .or_else(|| map.get("value"))
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .collect())
}
