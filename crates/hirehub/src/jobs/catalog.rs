use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use tracing::info;

use super::domain::{JobId, JobPosting};

/// Supplies the full, materialized job collection before each query evaluation.
pub trait JobSource: Send + Sync {
    fn all_jobs(&self) -> Result<Arc<[JobPosting]>, CatalogError>;
}

/// Error raised while loading or serving the job collection.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read job catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid job catalog csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("job source unavailable: {0}")]
    Unavailable(String),
}

/// Job collection held in memory and shared across requests.
#[derive(Debug, Clone)]
pub struct InMemoryJobCatalog {
    jobs: Arc<[JobPosting]>,
}

impl Default for InMemoryJobCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl JobSource for InMemoryJobCatalog {
    fn all_jobs(&self) -> Result<Arc<[JobPosting]>, CatalogError> {
        Ok(Arc::clone(&self.jobs))
    }
}

impl InMemoryJobCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs: jobs.into() }
    }

    /// Reads a JSON array shaped like the job listing endpoint's response.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let jobs: Vec<JobPosting> = serde_json::from_reader(reader)?;
        Ok(Self::new(jobs))
    }

    /// Reads a CSV export whose headers use the job document field names. `skills` is a
    /// semicolon-separated list.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut jobs = Vec::new();
        for record in csv_reader.deserialize::<CatalogRow>() {
            jobs.push(record?.into_posting());
        }

        Ok(Self::new(jobs))
    }

    /// Loads a catalog file, picking the CSV reader for `.csv` files and JSON otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let catalog = if is_csv {
            Self::from_csv_reader(reader)?
        } else {
            Self::from_json_reader(reader)?
        };

        info!(path = %path.display(), jobs = catalog.len(), "loaded job catalog");
        Ok(catalog)
    }

    /// The two postings seeded for local development, posted at `posted_at`.
    pub fn demo_at(posted_at: DateTime<Utc>) -> Self {
        let posting_date = posted_at.to_rfc3339_opts(SecondsFormat::Millis, true);

        Self::new(vec![
            JobPosting {
                id: JobId("demo-frontend-developer".to_string()),
                title: "Frontend Developer".to_string(),
                company_name: "TechCorp Inc.".to_string(),
                min_salary: "60000".to_string(),
                max_salary: "80000".to_string(),
                salary_type: "Yearly".to_string(),
                location: "Mumbai, India".to_string(),
                posting_date: posting_date.clone(),
                experience_level: "Mid-level".to_string(),
                employment_type: "Full-time".to_string(),
                description: "We are looking for a skilled Frontend Developer to join our team. \
                    You will be responsible for developing user interface components and \
                    implementing them following well-known React.js workflows."
                    .to_string(),
                posted_by: "recruiter@techcorp.com".to_string(),
                skills: ["React", "JavaScript", "HTML", "CSS", "TypeScript"]
                    .map(str::to_string)
                    .into(),
                company_logo: String::new(),
            },
            JobPosting {
                id: JobId("demo-software-engineering-intern".to_string()),
                title: "Software Engineering Intern".to_string(),
                company_name: "StartupXYZ".to_string(),
                min_salary: "25000".to_string(),
                max_salary: "35000".to_string(),
                salary_type: "Yearly".to_string(),
                location: "Bangalore, India".to_string(),
                posting_date,
                experience_level: "Entry-level".to_string(),
                employment_type: "Internship".to_string(),
                description: "Great opportunity for students to gain hands-on experience in \
                    software development. You'll work alongside senior developers on real \
                    projects."
                    .to_string(),
                posted_by: "hr@startupxyz.com".to_string(),
                skills: ["Python", "JavaScript", "Git", "SQL"]
                    .map(str::to_string)
                    .into(),
                company_logo: String::new(),
            },
        ])
    }

    pub fn demo() -> Self {
        Self::demo_at(Utc::now())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CatalogRow {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    job_title: String,
    company_name: String,
    min_price: String,
    max_price: String,
    salary_type: String,
    job_location: String,
    posting_date: String,
    experience_level: String,
    employment_type: String,
    description: String,
    posted_by: String,
    skills: String,
    company_logo: String,
}

impl CatalogRow {
    fn into_posting(self) -> JobPosting {
        let skills = self
            .skills
            .split(';')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        JobPosting {
            id: JobId(self.id),
            title: self.job_title,
            company_name: self.company_name,
            min_salary: self.min_price,
            max_salary: self.max_price,
            salary_type: self.salary_type,
            location: self.job_location,
            posting_date: self.posting_date,
            experience_level: self.experience_level,
            employment_type: self.employment_type,
            description: self.description,
            posted_by: self.posted_by,
            skills,
            company_logo: self.company_logo,
        }
    }
}
