//! Job repository.

use chrono::Utc;
use placement_core::entities::{Job, NewJob};
use placement_core::stats::JobStats;

use crate::backend::{Query, TableBackend};
use crate::error::StoreError;
use crate::helpers::parse_date;
use crate::record::Record;
use crate::rows::{JobInsert, JobRow};
use crate::service::RecordStore;
use crate::updates::JobUpdate;

impl<B: TableBackend> RecordStore<B> {
    /// All jobs, newest first. Empty on failure.
    pub async fn list_jobs(&self) -> Vec<Job> {
        self.list(&Query::newest_first()).await
    }

    pub async fn try_list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        self.try_list(&Query::newest_first()).await
    }

    pub async fn get_job(&self, id: &str) -> Option<Job> {
        self.get(id).await
    }

    pub async fn try_get_job(&self, id: &str) -> Result<Option<Job>, StoreError> {
        self.try_get(id).await
    }

    /// Create a job. The store assigns `id` and `posted_date`.
    ///
    /// # Errors
    ///
    /// Propagates any backend or decode error.
    pub async fn create_job(&self, job: &NewJob) -> Result<Job, StoreError> {
        self.insert(&JobInsert::from(job)).await
    }

    /// Apply a sparse update.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or any backend error.
    pub async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<Job, StoreError> {
        self.patch(id, update).await
    }

    pub async fn delete_job(&self, id: &str) -> bool {
        self.remove::<Job>(id).await
    }

    pub async fn try_delete_job(&self, id: &str) -> Result<(), StoreError> {
        self.try_remove::<Job>(id).await
    }

    /// Dashboard counts over all jobs. Zeros on failure.
    pub async fn job_stats(&self) -> JobStats {
        match self.try_job_stats().await {
            Ok(stats) => stats,
            Err(error) => {
                tracing::warn!(%error, "failed to compute job stats");
                JobStats::default()
            }
        }
    }

    /// Dashboard counts over all jobs, with recency taken from `created_at`.
    ///
    /// Rows without `created_at` fall back to `posted_date`.
    ///
    /// # Errors
    ///
    /// Propagates any backend or decode error.
    pub async fn try_job_stats(&self) -> Result<JobStats, StoreError> {
        let rows = self
            .backend()
            .select(Job::TABLE, &Query::newest_first())
            .await?;
        let mut dated = Vec::with_capacity(rows.len());
        for value in rows {
            let row: JobRow = serde_json::from_value(value)?;
            let created_on = row.created_at.as_deref().map(parse_date).transpose()?;
            let job = Job::try_from(row)?;
            let day = created_on.unwrap_or(job.posted_date);
            dated.push((job, day));
        }
        Ok(JobStats::tally(
            dated.iter().map(|(job, day)| (job, *day)),
            Utc::now().date_naive(),
        ))
    }
}
