use super::*;

#[test]
fn finished_tasks_leave_the_registry() {
    let mut registry = Registry::new();
    let first = registry.insert("profile");
    let second = registry.insert("submit");
    assert_ne!(first, second);
    assert_eq!(registry.len(), 2);

    registry.finish(first);
    assert_eq!(registry.len(), 1);

    // Finishing twice is harmless.
    registry.finish(first);
    assert_eq!(registry.len(), 1);
}

#[test]
fn repeated_submits_do_not_accumulate() {
    let mut registry = Registry::new();
    for _ in 0..100 {
        let id = registry.insert(());
        registry.finish(id);
    }
    assert_eq!(registry.len(), 0);
}

#[test]
fn drain_hands_back_only_live_tasks() {
    let mut registry = Registry::new();
    let done = registry.insert(1);
    registry.insert(2);
    registry.finish(done);

    assert_eq!(registry.drain(), vec![2]);
    assert_eq!(registry.len(), 0);
}

#[test]
fn spawn_is_inert_outside_browser() {
    let scope = TaskScope::new();
    let handle = scope.spawn(async {});
    handle.abort();
}
