use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

/// Posting-date options offered next to the job list.
///
/// Each window turns into a `YYYY-MM-DD` category token that the query engine classifies as a
/// posted-after date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingWindow {
    AllTime,
    LastDay,
    LastWeek,
    LastMonth,
}

impl PostingWindow {
    pub const ALL: [PostingWindow; 4] = [
        PostingWindow::AllTime,
        PostingWindow::LastDay,
        PostingWindow::LastWeek,
        PostingWindow::LastMonth,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PostingWindow::AllTime => "All time",
            PostingWindow::LastDay => "Last 24 hours",
            PostingWindow::LastWeek => "Last 7 days",
            PostingWindow::LastMonth => "Last Month",
        }
    }

    pub const fn days(self) -> Option<i64> {
        match self {
            PostingWindow::AllTime => None,
            PostingWindow::LastDay => Some(1),
            PostingWindow::LastWeek => Some(7),
            PostingWindow::LastMonth => Some(30),
        }
    }

    /// Category token for this window relative to `now`. `AllTime` yields the empty token.
    pub fn token(self, now: DateTime<Utc>) -> String {
        match self.days() {
            Some(days) => (now - Duration::days(days)).format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for PostingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PostingWindow {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "any" => Ok(Self::AllTime),
            "24h" | "1d" | "day" => Ok(Self::LastDay),
            "7d" | "week" => Ok(Self::LastWeek),
            "30d" | "month" => Ok(Self::LastMonth),
            other => Err(format!(
                "unknown posting window '{other}' (expected all, 24h, 7d, or 30d)"
            )),
        }
    }
}
