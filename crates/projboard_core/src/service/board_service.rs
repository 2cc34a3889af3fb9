//! Board composition root.
//!
//! # Responsibility
//! - Own the project store for one running board.
//! - Gate project creation behind form validation.
//! - Route drops to store transitions and keep both columns current.
//!
//! # Invariants
//! - A rejected form never reaches the store.
//! - Column views are subscribed before any project exists, so they see
//!   every accepted mutation.

use crate::board::column::ColumnView;
use crate::board::drag::DragPayload;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{ProjectStore, TransitionOutcome};
use crate::validation::project_form::{ProjectForm, ProjectFormError};
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard};

type SharedColumn = Arc<Mutex<ColumnView>>;

/// Project board facade used by presentation layers.
pub struct ProjectBoard {
    store: ProjectStore,
    active: SharedColumn,
    finished: SharedColumn,
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectBoard {
    /// Creates an empty board with both columns subscribed.
    pub fn new() -> Self {
        Self::with_store(ProjectStore::new())
    }

    /// Wraps an existing store and subscribes both columns to it.
    ///
    /// Columns start from the store's current contents.
    pub fn with_store(mut store: ProjectStore) -> Self {
        let current = store.projects();
        let active = subscribe_column(&mut store, ProjectStatus::Active, &current);
        let finished = subscribe_column(&mut store, ProjectStatus::Finished, &current);
        Self {
            store,
            active,
            finished,
        }
    }

    /// Validates form input and creates the project.
    ///
    /// # Errors
    /// - Returns the first failed field rule; the store is untouched.
    pub fn submit(&mut self, form: &ProjectForm) -> Result<ProjectId, ProjectFormError> {
        let valid = form.validate().map_err(|err| {
            warn!(
                "event=project_rejected module=board status=rejected field={}",
                err.field().as_str()
            );
            err
        })?;
        Ok(self
            .store
            .create(valid.title, valid.description, valid.people_count))
    }

    /// Handles a card dropped on the column for `target`.
    ///
    /// Payloads that are not project ids behave like unknown ids.
    pub fn drop_on(&mut self, payload: &str, target: ProjectStatus) -> TransitionOutcome {
        match DragPayload::decode(payload) {
            Some(id) => self.store.transition(id, target),
            None => {
                debug!(
                    "event=project_drop module=board status=skipped reason=bad_payload target={}",
                    target
                );
                TransitionOutcome::NotFound
            }
        }
    }

    /// Direct transition for callers that already hold a project id.
    pub fn move_project(&mut self, id: ProjectId, target: ProjectStatus) -> TransitionOutcome {
        self.store.transition(id, target)
    }

    /// Registers an extra observer next to the column views.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Project]) + Send + 'static,
    {
        self.store.subscribe(observer);
    }

    /// Returns a snapshot of the column for `status`.
    pub fn column(&self, status: ProjectStatus) -> ColumnView {
        let shared = match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        };
        lock_column(shared).clone()
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }
}

fn subscribe_column(
    store: &mut ProjectStore,
    status: ProjectStatus,
    current: &[Project],
) -> SharedColumn {
    let mut view = ColumnView::new(status);
    if !current.is_empty() {
        view.refresh(current);
    }
    let shared = Arc::new(Mutex::new(view));
    let target = Arc::clone(&shared);
    store.subscribe(move |projects| lock_column(&target).refresh(projects));
    shared
}

fn lock_column(column: &Mutex<ColumnView>) -> MutexGuard<'_, ColumnView> {
    // A panicking observer may poison the lock; the view is still consistent
    // because `refresh` replaces it wholesale.
    column
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
