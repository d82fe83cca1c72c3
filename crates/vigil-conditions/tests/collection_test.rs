use async_trait::async_trait;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use vigil_conditions::collection;
use vigil_conditions::driver::{Collection, DriverError};
use vigil_engine::{Wait, WaitError};

struct MockCollection {
    texts: Mutex<Vec<String>>,
}

impl MockCollection {
    fn of(texts: &[&str]) -> Self {
        Self {
            texts: Mutex::new(texts.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl fmt::Display for MockCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all(.todo)")
    }
}

#[async_trait]
impl Collection for MockCollection {
    async fn size(&self) -> Result<usize, DriverError> {
        Ok(self.texts.lock().unwrap().len())
    }
    async fn texts(&self) -> Result<Vec<String>, DriverError> {
        Ok(self.texts.lock().unwrap().clone())
    }
}

#[tokio::test(start_paused = true)]
async fn test_has_size_passes_immediately() {
    let todos = MockCollection::of(&["a", "b", "c"]);
    let wait = Wait::new(&todos, Duration::from_secs(4), vec![]);

    let start = Instant::now();
    assert!(wait.until(&collection::has_size(3)).await);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_has_size_times_out_on_wrong_size() {
    let todos = MockCollection::of(&["a", "b"]);
    let wait = Wait::new(&todos, Duration::from_millis(1500), vec![]);

    let start = Instant::now();
    let err = wait.command(&collection::has_size(3)).await.unwrap_err();

    assert!(start.elapsed() >= Duration::from_millis(1500));
    let timeout = err.timeout_error().unwrap();
    assert_eq!(timeout.function, "has size: 3");
    assert_eq!(timeout.cause, "actual size: 2");
    assert!(err.to_string().contains("1500ms"));
}

#[tokio::test]
async fn test_size_comparisons() {
    let todos = MockCollection::of(&["a", "b"]);

    assert!(collection::has_size_greater_than(1).call(&todos).await.is_ok());
    assert!(collection::has_size_greater_than(2).call(&todos).await.is_err());
    assert!(collection::has_size_less_than(3).call(&todos).await.is_ok());
    assert!(collection::has_size_less_than(2).call(&todos).await.is_err());
}

#[tokio::test]
async fn test_texts() {
    let todos = MockCollection::of(&["buy milk", "walk dog"]);

    assert!(collection::has_texts(&["milk", "dog"]).call(&todos).await.is_ok());
    assert!(collection::has_texts(&["dog", "milk"]).call(&todos).await.is_err());
    assert!(collection::has_exact_texts(&["buy milk", "walk dog"]).call(&todos).await.is_ok());

    let err = collection::has_exact_texts(&["buy milk"])
        .call(&todos)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        WaitError::condition_not_matched("actual texts: [\"buy milk\", \"walk dog\"]")
    );
}

#[tokio::test(start_paused = true)]
async fn test_waits_for_item_to_be_added() {
    let todos = std::sync::Arc::new(MockCollection::of(&["a"]));
    let writer = todos.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        writer.texts.lock().unwrap().push("b".to_string());
    });

    let wait = Wait::new(&*todos, Duration::from_secs(1), vec![]);
    assert!(wait.until(&collection::has_size_greater_than(1)).await);
}
