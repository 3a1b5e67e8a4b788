//! Background worker that applies click increments.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio_retry::Retry;
use tokio_retry::strategy::ExponentialBackoff;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Retries after the first failed increment.
const MAX_RETRIES: usize = 3;

/// Drains `rx`, incrementing the click counter for every event.
///
/// At most `concurrency` increments run at once. Failed increments are retried
/// with exponential backoff and then logged and dropped; they never reach the
/// client. Returns once every sender is gone and in-flight increments finish.
pub async fn run_click_worker<L>(
    mut rx: mpsc::Receiver<ClickEvent>,
    link_service: Arc<LinkService<L>>,
    concurrency: usize,
) where
    L: LinkRepository + 'static,
{
    let concurrency = concurrency.max(1);
    let semaphore = Arc::new(Semaphore::new(concurrency));

    while let Some(event) = rx.recv().await {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };

        let service = link_service.clone();
        tokio::spawn(async move {
            let _permit = permit;
            process_click(&service, event).await;
        });
    }

    // Wait for in-flight increments before returning.
    let _ = semaphore.acquire_many(concurrency as u32).await;

    tracing::info!("Click worker stopped");
}

async fn process_click<L: LinkRepository>(service: &LinkService<L>, event: ClickEvent) {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_millis(500))
        .take(MAX_RETRIES);

    if let Err(e) = Retry::spawn(strategy, || service.increment_click(event.link_id)).await {
        tracing::error!(
            error = %e,
            link_id = event.link_id,
            short_code = %event.short_code,
            "failed to record click"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_worker_increments_each_event() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_click_count()
            .withf(|id| *id == 1 || *id == 2)
            .times(3)
            .returning(|_| Ok(()));

        let service = Arc::new(LinkService::new(Arc::new(mock_repo)));
        let (tx, rx) = mpsc::channel(16);

        tx.send(ClickEvent::new(1, "aaaaaa")).await.unwrap();
        tx.send(ClickEvent::new(2, "bbbbbb")).await.unwrap();
        tx.send(ClickEvent::new(1, "aaaaaa")).await.unwrap();
        drop(tx);

        run_click_worker(rx, service, 2).await;
    }

    #[tokio::test]
    async fn test_worker_retries_failed_increment() {
        let mut mock_repo = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_increment_click_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolTimedOut)));

        mock_repo
            .expect_increment_click_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = Arc::new(LinkService::new(Arc::new(mock_repo)));
        let (tx, rx) = mpsc::channel(1);

        tx.send(ClickEvent::new(7, "cccccc")).await.unwrap();
        drop(tx);

        run_click_worker(rx, service, 1).await;
    }

    #[tokio::test]
    async fn test_worker_gives_up_after_max_retries() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_click_count()
            .times(MAX_RETRIES + 1)
            .returning(|_| Err(AppError::Storage(sqlx::Error::PoolTimedOut)));

        let service = Arc::new(LinkService::new(Arc::new(mock_repo)));
        let (tx, rx) = mpsc::channel(1);

        tx.send(ClickEvent::new(7, "cccccc")).await.unwrap();
        drop(tx);

        run_click_worker(rx, service, 1).await;
    }
}
