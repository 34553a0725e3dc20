use super::query::QueryKind;

/// Mutations issued by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    CreateOrganization,
    CreateProject,
    UpdateProject,
    CreateTask,
    UpdateTask,
    AddTaskComment,
}

/// Which read queries each mutation makes stale.
///
/// A mutation is settled only once every query listed here has been
/// re-run. Creating an organization invalidates nothing by itself: the
/// tenant change that follows it triggers the refetches.
pub const INVALIDATIONS: &[(MutationKind, &[QueryKind])] = &[
    (MutationKind::CreateOrganization, &[]),
    (MutationKind::CreateProject, &[QueryKind::Projects]),
    (MutationKind::UpdateProject, &[QueryKind::Projects]),
    (
        MutationKind::CreateTask,
        &[QueryKind::Tasks, QueryKind::ProjectStats],
    ),
    (
        MutationKind::UpdateTask,
        &[QueryKind::Tasks, QueryKind::ProjectStats],
    ),
    (MutationKind::AddTaskComment, &[]),
];

/// Queries invalidated by `mutation`.
pub fn invalidated_by(mutation: MutationKind) -> &'static [QueryKind] {
    for (kind, queries) in INVALIDATIONS {
        if *kind == mutation {
            return queries;
        }
    }
    &[]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mutation_has_exactly_one_entry() {
        let all = [
            MutationKind::CreateOrganization,
            MutationKind::CreateProject,
            MutationKind::UpdateProject,
            MutationKind::CreateTask,
            MutationKind::UpdateTask,
            MutationKind::AddTaskComment,
        ];
        for mutation in all {
            let entries = INVALIDATIONS.iter().filter(|(k, _)| *k == mutation).count();
            assert_eq!(entries, 1, "{mutation:?}");
        }
    }

    #[test]
    fn test_project_mutations_refetch_project_list() {
        assert_eq!(invalidated_by(MutationKind::CreateProject), &[QueryKind::Projects]);
        assert_eq!(invalidated_by(MutationKind::UpdateProject), &[QueryKind::Projects]);
    }

    #[test]
    fn test_task_mutations_refetch_tasks_and_stats() {
        let expected = [QueryKind::Tasks, QueryKind::ProjectStats];
        assert_eq!(invalidated_by(MutationKind::CreateTask), &expected);
        assert_eq!(invalidated_by(MutationKind::UpdateTask), &expected);
    }

    #[test]
    fn test_comments_refetch_nothing() {
        assert!(invalidated_by(MutationKind::AddTaskComment).is_empty());
        assert!(invalidated_by(MutationKind::CreateOrganization).is_empty());
    }
}
