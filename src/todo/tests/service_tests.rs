//! Service orchestration tests for task paging and mutation.

use std::sync::Arc;

use crate::hypermedia::domain::PageRequest;
use crate::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{Todo, TodoDescription, TodoId},
    ports::{TodoStore, TodoStoreResult},
    services::{TodoInput, TodoService, TodoServiceError},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TodoService<InMemoryTodoStore, DefaultClock>;

#[fixture]
fn store() -> Arc<InMemoryTodoStore> {
    Arc::new(InMemoryTodoStore::seeded(4).expect("seeding should succeed"))
}

#[fixture]
fn service(store: Arc<InMemoryTodoStore>) -> TestService {
    TodoService::new(store, Arc::new(DefaultClock))
}

fn page(skip: usize, take: usize) -> PageRequest {
    PageRequest::new(skip, take).expect("valid page request")
}

#[rstest]
#[case::first_page(0, 2, &["Task (0)", "Task (1)"])]
#[case::last_page(2, 2, &["Task (2)", "Task (3)"])]
#[case::partial_page(3, 2, &["Task (3)"])]
#[case::beyond_end(10, 2, &[])]
#[tokio::test(flavor = "multi_thread")]
async fn page_slices_in_id_order(
    service: TestService,
    #[case] skip: usize,
    #[case] take: usize,
    #[case] expected: &[&str],
) {
    let result = service
        .page(page(skip, take))
        .await
        .expect("paging should succeed");

    let descriptions: Vec<&str> = result
        .items
        .iter()
        .map(|todo| todo.description().as_str())
        .collect();
    assert_eq!(descriptions, expected);
    assert_eq!(result.total, 4);
}

/// Store whose count includes tasks it does not list, as a store that
/// filters its listing would.
struct PartiallyListedStore {
    inner: InMemoryTodoStore,
    unlisted: usize,
}

#[async_trait]
impl TodoStore for PartiallyListedStore {
    async fn list(&self) -> TodoStoreResult<Vec<Todo>> {
        self.inner.list().await
    }

    async fn get(&self, id: TodoId) -> TodoStoreResult<Option<Todo>> {
        self.inner.get(id).await
    }

    async fn add(&self, description: TodoDescription, important: bool) -> TodoStoreResult<Todo> {
        self.inner.add(description, important).await
    }

    async fn update(&self, todo: &Todo) -> TodoStoreResult<()> {
        self.inner.update(todo).await
    }

    async fn remove(&self, id: TodoId) -> TodoStoreResult<bool> {
        self.inner.remove(id).await
    }

    async fn count(&self) -> TodoStoreResult<usize> {
        Ok(self.inner.count().await? + self.unlisted)
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_total_comes_from_store_count() {
    let store = PartiallyListedStore {
        inner: InMemoryTodoStore::seeded(2).expect("seeding should succeed"),
        unlisted: 8,
    };
    let service = TodoService::new(Arc::new(store), Arc::new(DefaultClock));

    let result = service
        .page(page(0, 2))
        .await
        .expect("paging should succeed");

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.total, 10);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_reports_missing_task(service: TestService) {
    let result = service.get(TodoId::new(999)).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound(id)) if id == TodoId::new(999)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_validated_task(service: TestService) {
    let input = TodoInput::new()
        .with_description("Buy milk")
        .with_important("true");
    let created = service.create(&input).await.expect("create should succeed");
    let fetched = service
        .get(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
    assert_eq!(created.id(), TodoId::new(5));
    assert!(created.important());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_invalid_input_without_storing(
    store: Arc<InMemoryTodoStore>,
) {
    let service = TodoService::new(Arc::clone(&store), Arc::new(DefaultClock));
    let input = TodoInput::new()
        .with_description("Buy milk")
        .with_important("maybe");

    let result = service.create(&input).await;

    assert!(matches!(result, Err(TodoServiceError::Input(_))));
    assert_eq!(store.count().await.expect("count should succeed"), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_stamps_and_persists(service: TestService) {
    let completed = service
        .complete(TodoId::new(1))
        .await
        .expect("complete should succeed");
    let fetched = service
        .get(TodoId::new(1))
        .await
        .expect("lookup should succeed");

    assert!(completed.is_complete());
    assert_eq!(fetched.completed_on(), completed.completed_on());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_checks_existence_before_validation(service: TestService) {
    let result = service.update(TodoId::new(42), &TodoInput::new()).await;
    assert!(matches!(result, Err(TodoServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields(service: TestService) {
    let input = TodoInput::new()
        .with_description("Renamed")
        .with_important("TRUE");
    service
        .update(TodoId::new(2), &input)
        .await
        .expect("update should succeed");
    let fetched = service
        .get(TodoId::new(2))
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched.description().as_str(), "Renamed");
    assert!(fetched.important());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_then_reports_missing(service: TestService) {
    service
        .delete(TodoId::new(3))
        .await
        .expect("delete should succeed");
    let second = service.delete(TodoId::new(3)).await;
    assert!(matches!(second, Err(TodoServiceError::NotFound(_))));
}
