#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudo::libs::task::{Task, TaskFilter};
    use tudo::storage::slot::Slot;
    use tudo::storage::tasks::Tasks;

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TaskTestContext {
        fn tasks(&self) -> Tasks {
            Tasks::open(Slot::at(self.temp_dir.path().join("tasks.json")))
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    /// Tasks with fixed ids; `Task::new` assigns ids from the clock, which
    /// collides when several tasks are built within the same millisecond.
    fn task(id: i64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            created_at: id,
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.id, task.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_increments_active_count(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        assert_eq!(tasks.active_count(), 0);

        tasks.insert(task(1, "Buy milk", false)).unwrap();
        assert_eq!(tasks.active_count(), 1);

        tasks.insert(task(2, "Water plants", false)).unwrap();
        assert_eq!(tasks.active_count(), 2);

        // A completed task does not contribute to the active count.
        tasks.insert(task(3, "Old chore", true)).unwrap();
        assert_eq!(tasks.active_count(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_twice_restores_original_buckets(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();

        let toggled = tasks.toggle(1).unwrap().unwrap();
        assert!(toggled.completed);
        assert_eq!(tasks.fetch(TaskFilter::Active).len(), 0);
        assert_eq!(tasks.fetch(TaskFilter::Completed).len(), 1);

        let toggled = tasks.toggle(1).unwrap().unwrap();
        assert!(!toggled.completed);
        assert_eq!(tasks.fetch(TaskFilter::Active).len(), 1);
        assert_eq!(tasks.fetch(TaskFilter::Completed).len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_unknown_id(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();

        assert!(tasks.toggle(42).unwrap().is_none());
        assert!(!tasks.get_by_id(1).unwrap().completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_from_all_views(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();
        tasks.insert(task(2, "Water plants", true)).unwrap();

        let removed = tasks.delete(2).unwrap();
        assert_eq!(removed, 1);

        assert_eq!(tasks.fetch(TaskFilter::All).len(), 1);
        assert_eq!(tasks.fetch(TaskFilter::Active).len(), 1);
        assert_eq!(tasks.fetch(TaskFilter::Completed).len(), 0);
        assert!(tasks.get_by_id(2).is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_unknown_id(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();

        assert_eq!(tasks.delete(42).unwrap(), 0);
        assert_eq!(tasks.fetch(TaskFilter::All).len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_updates_and_trims_text(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();

        let updated = tasks.update_text(1, "  Buy oat milk  ").unwrap().unwrap();
        assert_eq!(updated.text, "Buy oat milk");
        assert_eq!(tasks.get_by_id(1).unwrap().text, "Buy oat milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_empty_text_is_noop(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();

        let kept = tasks.update_text(1, "").unwrap().unwrap();
        assert_eq!(kept.text, "Buy milk");

        let kept = tasks.update_text(1, "   \t ").unwrap().unwrap();
        assert_eq!(kept.text, "Buy milk");

        assert_eq!(tasks.get_by_id(1).unwrap().text, "Buy milk");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_filter_does_not_mutate_data(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.insert(task(1, "Buy milk", false)).unwrap();
        tasks.insert(task(2, "Water plants", true)).unwrap();

        let before = tasks.fetch(TaskFilter::All);
        tasks.fetch(TaskFilter::Active);
        tasks.fetch(TaskFilter::Completed);
        let after = tasks.fetch(TaskFilter::All);

        assert_eq!(before, after);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insertion_order_preserved(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        // Ids out of order on purpose; display order is insertion order.
        tasks.insert(task(30, "third", false)).unwrap();
        tasks.insert(task(10, "first", false)).unwrap();
        tasks.insert(task(20, "second", false)).unwrap();

        let texts: Vec<String> = tasks.fetch(TaskFilter::All).into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["third", "first", "second"]);
    }
}
