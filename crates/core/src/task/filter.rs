//! Title filtering

use super::model::Task;

/// Tasks whose title contains `term`, ignoring case, keeping their order
///
/// An empty term matches everything.
pub fn filter_tasks(tasks: &[Task], term: &str) -> Vec<Task> {
    let term = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("Buy milk").with_id(1),
            Task::new("Clean").with_id(2),
        ]
    }

    #[test]
    fn test_filter_matches_substring() {
        let filtered = filter_tasks(&sample(), "buy");
        assert_eq!(filtered, vec![Task::new("Buy milk").with_id(1)]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let tasks = vec![Task::new("abcdef").with_id(1)];
        assert_eq!(filter_tasks(&tasks, "ABC").len(), 1);
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let tasks = sample();
        assert_eq!(filter_tasks(&tasks, ""), tasks);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_tasks(&sample(), "zzz").is_empty());
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec("[a-zA-Z ]{0,12}", 0..30).prop_map(|titles| {
            titles
                .into_iter()
                .enumerate()
                .map(|(i, title)| Task::new(title).with_id(i as u64 + 1))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(tasks in arb_tasks(), term in "[a-zA-Z]{0,3}") {
            let once = filter_tasks(&tasks, &term);
            let twice = filter_tasks(&once, &term);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_ignores_case(tasks in arb_tasks(), term in "[a-zA-Z]{0,3}") {
            prop_assert_eq!(
                filter_tasks(&tasks, &term.to_uppercase()),
                filter_tasks(&tasks, &term.to_lowercase())
            );
        }

        #[test]
        fn prop_filter_preserves_order(tasks in arb_tasks(), term in "[a-zA-Z]{0,2}") {
            let ids: Vec<u64> = filter_tasks(&tasks, &term)
                .iter()
                .filter_map(|t| t.id)
                .collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            prop_assert_eq!(ids, sorted);
        }
    }
}
