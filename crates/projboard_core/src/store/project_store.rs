//! In-memory project store.
//!
//! # Responsibility
//! - Create projects with unique ids and append them in insertion order.
//! - Apply status transitions and fan out snapshots to observers.
//!
//! # Invariants
//! - Ids are unique within the store and never reused.
//! - Reads and notifications hand out copies, never store internals.
//! - One panicking observer does not block delivery to the rest, and the
//!   mutation that triggered the notification stays committed.
//! - The store performs no validation; callers check input first.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, error, info};
use std::panic::{self, AssertUnwindSafe};
use uuid::Uuid;

const MAX_OBSERVER_PANIC_CHARS: usize = 160;

/// Callback receiving the full ordered project sequence.
pub type ProjectObserver = Box<dyn FnMut(&[Project]) + Send>;

/// Result of one `transition` call. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Status changed and observers were notified.
    Applied,
    /// Project already had the requested status.
    Unchanged,
    /// No project with the given id.
    NotFound,
}

impl TransitionOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Owner of all project data for one board.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    observers: Vec<ProjectObserver>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer for every later mutation.
    ///
    /// The observer is not invoked immediately. Registering the same
    /// callback logic twice delivers twice.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Project]) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
        debug!(
            "event=observer_subscribed module=store status=ok observers={}",
            self.observers.len()
        );
    }

    /// Appends a new active project and notifies observers.
    ///
    /// # Contract
    /// - Never fails and never validates; see `ProjectForm::validate`.
    /// - Returns the new project's id.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let id = self.next_id();
        self.projects.push(Project::new(
            id,
            title.into(),
            description.into(),
            people_count,
        ));
        info!(
            "event=project_created module=store status=ok project_id={} projects={}",
            id,
            self.projects.len()
        );
        self.notify();
        id
    }

    /// Moves a project to `status`.
    ///
    /// Unknown ids and same-status moves are silent no-ops without
    /// notification.
    pub fn transition(&mut self, id: ProjectId, status: ProjectStatus) -> TransitionOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id() == id) else {
            debug!(
                "event=project_transition module=store status=skipped reason=not_found project_id={}",
                id
            );
            return TransitionOutcome::NotFound;
        };

        if project.status() == status {
            debug!(
                "event=project_transition module=store status=skipped reason=unchanged project_id={} target={}",
                id, status
            );
            return TransitionOutcome::Unchanged;
        }

        let from = project.status();
        project.set_status(status);
        info!(
            "event=project_transition module=store status=ok project_id={} from={} to={}",
            id, from, status
        );
        self.notify();
        TransitionOutcome::Applied
    }

    /// Returns a copy of all projects in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn next_id(&self) -> ProjectId {
        loop {
            let candidate = Uuid::new_v4();
            if !self.projects.iter().any(|project| project.id() == candidate) {
                return candidate;
            }
        }
    }

    fn notify(&mut self) {
        let snapshot = self.projects.clone();
        let mut faults = 0usize;

        for (index, observer) in self.observers.iter_mut().enumerate() {
            let delivery =
                panic::catch_unwind(AssertUnwindSafe(|| observer(snapshot.as_slice())));
            if let Err(payload) = delivery {
                faults += 1;
                error!(
                    "event=observer_fault module=store status=error observer_index={} payload={}",
                    index,
                    panic_payload_summary(payload.as_ref())
                );
            }
        }

        debug!(
            "event=observers_notified module=store status={} observers={} faults={} projects={}",
            if faults == 0 { "ok" } else { "degraded" },
            self.observers.len(),
            faults,
            snapshot.len()
        );
    }
}

fn panic_payload_summary(payload: &(dyn std::any::Any + Send)) -> String {
    let message = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    crate::logging::sanitize_message(&message, MAX_OBSERVER_PANIC_CHARS)
}

#[cfg(test)]
mod tests {
    use super::{ProjectStore, TransitionOutcome};
    use crate::model::project::ProjectStatus;
    use std::sync::{Arc, Mutex};

    #[test]
    fn subscribe_does_not_invoke_immediately() {
        let calls = Arc::new(Mutex::new(0usize));
        let mut store = ProjectStore::new();
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);

        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(store.observer_count(), 1);
    }

    #[test]
    fn ids_are_unique_across_creates() {
        let mut store = ProjectStore::new();
        let first = store.create("Alpha project", "a", 1);
        let second = store.create("Alpha project", "a", 1);
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn transition_round_trip_changes_status_each_time() {
        let mut store = ProjectStore::new();
        let id = store.create("Alpha project", "a", 1);

        assert_eq!(
            store.transition(id, ProjectStatus::Finished),
            TransitionOutcome::Applied
        );
        assert_eq!(
            store.transition(id, ProjectStatus::Active),
            TransitionOutcome::Applied
        );
        assert_eq!(store.get(id).unwrap().status(), ProjectStatus::Active);
    }

    #[test]
    fn projects_returns_detached_copy() {
        let mut store = ProjectStore::new();
        store.create("Alpha project", "a", 1);
        let mut copy = store.projects();
        copy.clear();
        assert_eq!(store.len(), 1);
    }
}
