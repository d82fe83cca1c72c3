use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use vigil_engine::{
    Condition, FailureHook, FnHook, Query, TimeoutError, TracingHook, Wait, WaitError, not,
    throw_if_not,
};

/// Starts matching at a fixed instant.
struct Page {
    ready_at: Option<Instant>,
}

impl Page {
    fn ready_after(delay: Duration) -> Self {
        Self {
            ready_at: Some(Instant::now() + delay),
        }
    }

    fn never_ready() -> Self {
        Self { ready_at: None }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page")
    }
}

fn is_ready() -> Condition<Page> {
    throw_if_not("is ready", |page: &Page| {
        Box::pin(async move { Ok(page.ready_at.is_some_and(|at| Instant::now() >= at)) })
    })
}

fn recording_hook(log: &Arc<Mutex<Vec<String>>>, name: &'static str) -> Arc<dyn FailureHook> {
    let log = log.clone();
    Arc::new(FnHook::new(move |err: &TimeoutError| {
        let log = log.clone();
        Box::pin(async move {
            log.lock().unwrap().push(format!("{}: {}", name, err.function));
            Ok(())
        })
    }))
}

#[tokio::test(start_paused = true)]
async fn test_until_passes_immediately_when_condition_holds() {
    let page = Page::ready_after(Duration::ZERO);
    let wait = Wait::new(&page, Duration::from_secs(10), vec![]);

    let start = Instant::now();
    assert!(wait.until(&is_ready()).await);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_until_resolves_when_state_flips() {
    let page = Page::ready_after(Duration::from_millis(250));
    let wait = Wait::new(&page, Duration::from_secs(4), vec![]);

    let start = Instant::now();
    assert!(wait.until_within(&is_ready(), Duration::from_millis(1500)).await);

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(250), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(500), "elapsed {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_query_times_out_with_descriptive_error() {
    let page = Page::never_ready();
    let wait = Wait::new(&page, Duration::from_secs(4), vec![]);

    let start = Instant::now();
    let err = wait
        .query_within(&is_ready(), Duration::from_millis(1500))
        .await
        .unwrap_err();

    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert!(err.is_timeout());
    let message = err.to_string();
    assert!(message.contains("1500"), "{}", message);
    assert!(message.contains("page.is ready"), "{}", message);

    let timeout = err.timeout_error().unwrap();
    assert_eq!(timeout.timeout, Duration::from_millis(1500));
    assert_eq!(timeout.entity, "page");
    assert_eq!(timeout.function, "is ready");
    assert_eq!(timeout.cause, "is ready");
}

#[tokio::test(start_paused = true)]
async fn test_until_returns_false_after_timeout() {
    let page = Page::never_ready();
    let wait = Wait::new(&page, Duration::from_millis(300), vec![]);

    let start = Instant::now();
    assert!(!wait.until(&is_ready()).await);
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_command_propagates_timeout() {
    let page = Page::never_ready();
    let wait = Wait::new(&page, Duration::from_millis(100), vec![]);

    let err = wait.command(&is_ready()).await.unwrap_err();
    assert!(matches!(err, WaitError::Timeout(_)));
}

#[tokio::test(start_paused = true)]
async fn test_query_returns_value() {
    let page = Page::ready_after(Duration::from_millis(50));
    let wait = Wait::new(&page, Duration::from_secs(1), vec![]);
    let title: Query<Page, String> = Query::new("title", |page: &Page| {
        Box::pin(async move {
            match page.ready_at {
                Some(at) if Instant::now() >= at => Ok("Dashboard".to_string()),
                _ => Err(WaitError::failed("page still loading")),
            }
        })
    });

    assert_eq!(wait.query(&title).await, Ok("Dashboard".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_double_negation_waits_like_original() {
    let page = Page::ready_after(Duration::from_millis(100));
    let wait = Wait::new(&page, Duration::from_secs(1), vec![]);

    let start = Instant::now();
    assert!(wait.until(&not(not(is_ready()))).await);
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_negated_condition_waits_for_opposite() {
    let page = Page::never_ready();
    let wait = Wait::new(&page, Duration::from_secs(1), vec![]);

    let start = Instant::now();
    assert!(wait.until(&not(is_ready())).await);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_hooks_run_in_order_on_timeout() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let failing: Arc<dyn FailureHook> = Arc::new(FnHook::new(|_: &TimeoutError| {
        Box::pin(async { Err(WaitError::failed("disk full")) })
    }));
    let hooks = vec![
        recording_hook(&log, "first"),
        failing,
        Arc::new(TracingHook) as Arc<dyn FailureHook>,
        recording_hook(&log, "second"),
    ];

    let page = Page::never_ready();
    let wait = Wait::new(&page, Duration::from_millis(50), hooks);

    let err = wait.command(&is_ready()).await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(
        *log.lock().unwrap(),
        vec!["first: is ready".to_string(), "second: is ready".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_hooks_skipped_on_success() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let page = Page::ready_after(Duration::from_millis(20));
    let wait = Wait::new(&page, Duration::from_secs(1), vec![recording_hook(&log, "only")]);

    assert!(wait.until(&is_ready()).await);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_waits_on_separate_entities_run_concurrently() {
    let fast = Page::ready_after(Duration::from_millis(100));
    let slow = Page::ready_after(Duration::from_millis(300));
    let fast_wait = Wait::new(&fast, Duration::from_secs(1), vec![]);
    let slow_wait = Wait::new(&slow, Duration::from_secs(1), vec![]);
    let condition = is_ready();

    let start = Instant::now();
    let (a, b) = tokio::join!(fast_wait.until(&condition), slow_wait.until(&condition));

    assert!(a && b);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(400));
}

#[tokio::test]
async fn test_real_clock_timeout() {
    let page = Page::never_ready();
    let wait = Wait::new(&page, Duration::from_millis(60), vec![])
        .with_poll_interval(Duration::from_millis(5));

    let start = std::time::Instant::now();
    assert!(!wait.until(&is_ready()).await);
    assert!(start.elapsed() >= Duration::from_millis(60));
}
