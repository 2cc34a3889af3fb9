//! Plain-text drag payload.
//!
//! A drag transfer carries exactly the project id as text. Drop targets
//! decode it and request a transition to their own status.

use crate::model::project::ProjectId;
use uuid::Uuid;

pub struct DragPayload;

impl DragPayload {
    pub fn encode(id: ProjectId) -> String {
        id.hyphenated().to_string()
    }

    /// Returns `None` for anything that is not a project id.
    ///
    /// Besides the `encode` form this accepts any UUID text form
    /// (uppercase, simple, braced, `urn:uuid:`); callers echoing the id
    /// back must re-`encode` it.
    pub fn decode(payload: &str) -> Option<ProjectId> {
        Uuid::parse_str(payload.trim()).ok()
    }
}
