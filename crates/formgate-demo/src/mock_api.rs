//! In-memory mock backend for form submissions

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use formgate::{FormSnapshot, SubmitSink};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A submission accepted by the mock backend.
#[derive(Debug, Clone)]
pub struct StoredSubmission {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub body: FormSnapshot,
}

/// Mock submission backend
///
/// Stores accepted submissions in memory behind an `Arc`, so clones share
/// one store. Latency is simulated and failures can be injected to
/// exercise the retry path.
#[derive(Clone)]
pub struct MockApi {
    latency: Duration,
    fail_submissions: bool,
    received: Arc<RwLock<Vec<StoredSubmission>>>,
}

impl MockApi {
    pub fn new(latency: Duration, fail_submissions: bool) -> Self {
        Self {
            latency,
            fail_submissions,
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of submissions accepted so far.
    pub async fn size(&self) -> usize {
        self.received.read().await.len()
    }

    /// Copies of the accepted submissions, oldest first.
    pub async fn submissions(&self) -> Vec<StoredSubmission> {
        self.received.read().await.clone()
    }
}

#[async_trait]
impl SubmitSink for MockApi {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String> {
        tokio::time::sleep(self.latency).await;

        if self.fail_submissions {
            return Err(anyhow!("Failed to connect to server. Please try again."));
        }

        let submission = StoredSubmission {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            body: snapshot.clone(),
        };
        tracing::info!("Accepted submission {}", submission.id);

        let mut received = self.received.write().await;
        received.push(submission);
        Ok("User registered successfully!".to_string())
    }
}
