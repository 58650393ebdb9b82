use todotable::ui::core::{Action, OperationManager};

#[tokio::test]
async fn test_finished_operation_requests_render() {
    let (mut manager, mut rx) = OperationManager::new();
    let id = manager.spawn_operation(async {}, "noop".to_string());
    assert_eq!(manager.operation_count(), 1);

    assert_eq!(rx.recv().await, Some(Action::Render));

    // The task sends its render request just before finishing
    while manager.cleanup_finished_operations().is_empty() {
        tokio::task::yield_now().await;
    }
    assert_eq!(manager.operation_count(), 0);
    assert!(id > 0);
}

#[tokio::test]
async fn test_cancel_all_operations() {
    let (mut manager, _rx) = OperationManager::new();
    manager.spawn_operation(std::future::pending(), "waits forever".to_string());
    manager.spawn_operation(std::future::pending(), "also waits".to_string());
    assert_eq!(manager.operation_count(), 2);

    manager.cancel_all_operations();
    assert_eq!(manager.operation_count(), 0);
}

#[tokio::test]
async fn test_action_sender_feeds_the_same_channel() {
    let (manager, mut rx) = OperationManager::new();
    manager.action_sender().send(Action::Quit).unwrap();
    assert_eq!(rx.try_recv().ok(), Some(Action::Quit));
}
