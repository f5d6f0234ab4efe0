use crate::api::{ApiError, Paginated};
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// What a list page currently displays
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(Paginated<T>),
    Failed(ApiError),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn page(&self) -> Option<&Paginated<T>> {
        match self {
            ViewState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ViewState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Total item count of the loaded page, 0 in every other state
    pub fn count(&self) -> u64 {
        self.page().map(|page| page.count).unwrap_or(0)
    }

    /// Edit the loaded page in place. No-op unless loaded.
    pub fn update_loaded(&mut self, update: impl FnOnce(&mut Paginated<T>)) {
        if let ViewState::Loaded(page) = self {
            update(page);
        }
    }
}

/// Identifies one issued request within a [`LoadSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Hands out tickets so only the newest request of a page gets applied.
///
/// Clones share the same counter. After [`LoadSequence::cancel`] no ticket
/// is current anymore.
#[derive(Debug, Clone, Default)]
pub struct LoadSequence {
    latest: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.cancelled.load(Ordering::SeqCst) && self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Mark the owning page as torn down
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was issued, or the page went away, before this one resolved
    Superseded,
}

/// Run one page request and feed the resulting states to `apply`.
///
/// `apply` receives `Loading` right away, then `Loaded` or `Failed` only if
/// the request is still the newest one for `sequence`. Pages holding more
/// than `limit` results are cut down to `limit`.
pub async fn load_page<T, Fut>(
    sequence: &LoadSequence,
    limit: u64,
    request: Fut,
    mut apply: impl FnMut(ViewState<T>),
) -> LoadOutcome
where
    Fut: Future<Output = Result<Paginated<T>, ApiError>>,
{
    if sequence.is_cancelled() {
        return LoadOutcome::Superseded;
    }

    let ticket = sequence.begin();
    apply(ViewState::Loading);

    let next = match request.await {
        Ok(mut page) => {
            let dropped = page.truncate_to(limit as usize);
            if dropped > 0 {
                warn!("Response held {dropped} results over the limit of {limit}, dropping them");
            }
            ViewState::Loaded(page)
        }
        Err(e) => {
            error!("Failed to load page: {}", e);
            ViewState::Failed(e)
        }
    };

    if !sequence.is_current(ticket) {
        debug!(?ticket, "Discarding superseded page response");
        return LoadOutcome::Superseded;
    }

    apply(next);
    LoadOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    fn page(count: u64, items: std::ops::Range<u32>) -> Paginated<u32> {
        Paginated {
            count,
            next: None,
            previous: None,
            results: items.collect(),
        }
    }

    fn recorder() -> (Arc<Mutex<Vec<ViewState<u32>>>>, impl FnMut(ViewState<u32>) + Clone) {
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let states = states.clone();
            move |state| states.lock().unwrap().push(state)
        };
        (states, sink)
    }

    #[test]
    fn test_tickets_are_monotonic() {
        let sequence = LoadSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));

        sequence.cancel();
        assert!(!sequence.is_current(second));
    }

    #[tokio::test]
    async fn test_success_goes_loading_then_loaded() {
        let sequence = LoadSequence::new();
        let (states, sink) = recorder();

        let outcome = load_page(&sequence, 20, async { Ok(page(3, 0..3)) }, sink).await;

        assert_eq!(outcome, LoadOutcome::Applied);
        let states = states.lock().unwrap();
        assert_eq!(states.len(), 2);
        assert!(states[0].is_loading());
        assert_eq!(states[1].page().unwrap().results, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_failure_clears_loading() {
        let sequence = LoadSequence::new();
        let (states, sink) = recorder();

        load_page(&sequence, 20, async { Err(ApiError::Server(502)) }, sink).await;

        let states = states.lock().unwrap();
        assert_eq!(states.last(), Some(&ViewState::Failed(ApiError::Server(502))));
    }

    #[tokio::test]
    async fn test_oversized_page_is_truncated() {
        let sequence = LoadSequence::new();
        let (states, sink) = recorder();

        load_page(&sequence, 20, async { Ok(page(45, 0..25)) }, sink).await;

        let states = states.lock().unwrap();
        let loaded = states[1].page().unwrap();
        assert_eq!(loaded.results.len(), 20);
        assert_eq!(loaded.count, 45);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let sequence = LoadSequence::new();
        let (states, sink) = recorder();
        let (slow_tx, slow_rx) = oneshot::channel::<Paginated<u32>>();

        let slow = {
            let sequence = sequence.clone();
            let sink = sink.clone();
            tokio::spawn(async move {
                load_page(
                    &sequence,
                    20,
                    async move { Ok(slow_rx.await.unwrap()) },
                    sink,
                )
                .await
            })
        };
        // Let the slow request take its ticket first
        while states.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }

        let fast = load_page(&sequence, 20, async { Ok(page(40, 20..40)) }, sink).await;
        assert_eq!(fast, LoadOutcome::Applied);

        slow_tx.send(page(40, 0..20)).unwrap();
        assert_eq!(slow.await.unwrap(), LoadOutcome::Superseded);

        let states = states.lock().unwrap();
        let last = states.last().unwrap().page().unwrap();
        assert_eq!(last.results.first(), Some(&20));
    }

    #[tokio::test]
    async fn test_response_after_cancel_is_dropped() {
        let sequence = LoadSequence::new();
        let (states, sink) = recorder();
        let (tx, rx) = oneshot::channel::<Paginated<u32>>();

        let pending = {
            let sequence = sequence.clone();
            tokio::spawn(async move {
                load_page(&sequence, 20, async move { Ok(rx.await.unwrap()) }, sink).await
            })
        };
        while states.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }

        sequence.cancel();
        tx.send(page(1, 0..1)).unwrap();

        assert_eq!(pending.await.unwrap(), LoadOutcome::Superseded);
        assert_eq!(states.lock().unwrap().as_slice(), &[ViewState::Loading]);
    }

    #[tokio::test]
    async fn test_identical_requests_run_independently() {
        let sequence = LoadSequence::new();
        let (states, sink) = recorder();
        let calls = Arc::new(AtomicU64::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            load_page(
                &sequence,
                20,
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(page(1, 0..1))
                },
                sink.clone(),
            )
            .await;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(states.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_update_loaded_only_touches_loaded_state() {
        let mut loading: ViewState<u32> = ViewState::Loading;
        loading.update_loaded(|page| page.count = 99);
        assert_eq!(loading, ViewState::Loading);

        let mut loaded = ViewState::Loaded(page(1, 0..1));
        loaded.update_loaded(|page| page.results[0] = 7);
        assert_eq!(loaded.page().unwrap().results, vec![7]);
    }
}
