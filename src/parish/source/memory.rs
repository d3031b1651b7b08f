use super::{DataSource, LoadResult};
use crate::failure::Failure;
use crate::model::Record;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Fixed in-memory collection of one record kind.
///
/// Each load returns a fresh copy of the collection, so list views never
/// share state through the source.
pub struct MemorySource<R> {
    records: Vec<R>,
    latency: Duration,
    failures: Mutex<Vec<Failure>>,
}

impl<R: Record> MemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            latency: Duration::ZERO,
            failures: Mutex::new(Vec::new()),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Queue a failure for the next load. Queued failures are consumed in
    /// order; once drained, loads succeed again.
    pub fn fail_next(mut self, failure: Failure) -> Self {
        if let Ok(failures) = self.failures.get_mut() {
            failures.push(failure);
        }
        self
    }

    fn take_failure(&self) -> Option<Failure> {
        let mut failures = self.failures.lock().ok()?;
        if failures.is_empty() {
            None
        } else {
            Some(failures.remove(0))
        }
    }
}

#[async_trait]
impl<R: Record> DataSource<R> for MemorySource<R> {
    async fn load(&self) -> LoadResult<R> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(failure) = self.take_failure() {
            return Err(failure);
        }
        debug!("Loaded {} {} records from memory", self.records.len(), R::KIND);
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PastoralGroup, Record};

    fn group(id: u32) -> PastoralGroup {
        PastoralGroup {
            id,
            name: format!("Pastoral {}", id),
            description: String::new(),
            coordinator: String::new(),
            meeting: String::new(),
            active: true,
        }
    }

    #[tokio::test]
    async fn returns_records_in_insertion_order() {
        let source = MemorySource::new(vec![group(2), group(1)]);
        let loaded = source.load().await.unwrap();
        let ids: Vec<_> = loaded.iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn scripted_failures_are_consumed_in_order() {
        let source = MemorySource::new(vec![group(1)])
            .fail_next(Failure::status(500))
            .fail_next(Failure::status(401));

        assert_eq!(source.load().await.unwrap_err(), Failure::status(500));
        assert_eq!(source.load().await.unwrap_err(), Failure::status(401));
        assert_eq!(source.load().await.unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_delays_completion() {
        let source = MemorySource::new(vec![group(1)]).with_latency(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        source.load().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
