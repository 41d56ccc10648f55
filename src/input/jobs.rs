//! Loading job records from disk

use crate::error::Result;
use crate::matching::ranker::JobRecord;
use log::info;
use std::path::Path;
use tokio::fs;

/// Load a JSON array of job records. Unknown fields are retained in each
/// record's `extra` map; missing title/skills/experience default to empty.
pub async fn load_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    let content = fs::read_to_string(path).await?;
    let jobs: Vec<JobRecord> = serde_json::from_str(&content)?;
    info!("Loaded {} job records from {}", jobs.len(), path.display());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loose_records() {
        let json = r#"[
            {"title": "ML Engineer", "skills": "python, pytorch", "experience": "3+ years"},
            {"title": "Data Analyst", "company": "Acme"}
        ]"#;

        let jobs: Vec<JobRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].skills, "python, pytorch");
        assert_eq!(jobs[1].experience, "");
        assert_eq!(jobs[1].extra["company"], "Acme");
    }
}
