use crate::infra::parse_positive;
use chrono::Utc;
use clap::Args;
use hirehub::error::AppError;
use hirehub::jobs::{
    InMemoryJobCatalog, JobPage, JobPosting, JobQueryEngine, JobSource, PostingWindow,
    DEFAULT_PAGE_SIZE,
};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct JobSearchArgs {
    /// JSON or CSV job catalog. Defaults to the seeded demo postings.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Case-insensitive text matched against job titles
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Location, salary ceiling, YYYY-MM-DD date, salary type, experience, or employment type
    #[arg(long, conflicts_with = "posted_within")]
    pub(crate) category: Option<String>,
    /// Only show postings from a recent window (all, 24h, 7d, 30d)
    #[arg(long)]
    pub(crate) posted_within: Option<PostingWindow>,
    /// 1-based page to display
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Postings per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_positive)]
    pub(crate) page_size: usize,
}

pub(crate) fn run_job_search(args: JobSearchArgs) -> Result<(), AppError> {
    let JobSearchArgs {
        catalog,
        query,
        category,
        posted_within,
        page,
        page_size,
    } = args;

    let catalog = match catalog {
        Some(path) => InMemoryJobCatalog::from_path(path)?,
        None => InMemoryJobCatalog::demo(),
    };
    let jobs = catalog.all_jobs()?;

    let category = posted_within
        .map(|window| window.token(Utc::now()))
        .or(category);

    let results =
        JobQueryEngine::new(page_size).evaluate(&jobs, &query, category.as_deref(), page);
    print!("{}", render_job_page(&results, &query, category.as_deref()));

    Ok(())
}

pub(crate) fn render_job_page(page: &JobPage<'_>, query: &str, category: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "HireHub job search");
    let _ = writeln!(
        out,
        "Query: {} | Filter: {}",
        if query.is_empty() { "(any title)" } else { query },
        match category {
            Some(token) if !token.is_empty() => token,
            _ => "(none)",
        }
    );

    if page.jobs.is_empty() {
        let _ = writeln!(out, "\n0 Jobs");
        let _ = writeln!(
            out,
            "No jobs found for the selected filter. Try different criteria!"
        );
        if page.total == 0 {
            return out;
        }
    } else {
        let _ = writeln!(out);
        for job in &page.jobs {
            let _ = writeln!(out, "- {}", describe(job));
        }
    }

    let _ = writeln!(
        out,
        "\nPage {} of {} ({} matching jobs)",
        page.page,
        page.page_count(),
        page.total
    );
    out
}

fn describe(job: &JobPosting) -> String {
    let mut parts = vec![job.title.clone()];
    for field in [&job.company_name, &job.location] {
        if !field.is_empty() {
            parts.push(field.clone());
        }
    }

    if !job.min_salary.is_empty() || !job.max_salary.is_empty() {
        let mut salary = format!("{}-{}", job.min_salary, job.max_salary);
        if !job.salary_type.is_empty() {
            salary.push_str(&format!(" ({})", job.salary_type));
        }
        parts.push(salary);
    }

    if !job.employment_type.is_empty() {
        parts.push(job.employment_type.clone());
    }
    if let Some(posted) = job.posted_at() {
        parts.push(format!("posted {}", posted.date()));
    }

    parts.join(" | ")
}
