//! Authorization rules as plain functions over the domain model.
//!
//! Callers reach this module only with an already-authenticated `User`;
//! missing or invalid credentials are rejected earlier by the extractors.
//! Operations every signed-in account may perform (posting, commenting,
//! liking, uploading, editing its own profile, reading the dashboard) have
//! no entry here: holding a valid session is the whole rule. Public
//! listings never consult the policy at all.

use super::entities::User;
use uuid::Uuid;

/// Gated operations. Anything not listed is either public, open to every
/// authenticated account, or decided by the ownership predicate instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateJob,
    ReviewJob,
    ReviewAlumni,
    DeleteUser,
    ModeratePost,
    ReadAdminListing,
    CreateEvent,
    DeleteEvent,
    CreateDonation,
    DeleteDonation,
    CreateStory,
    DeleteStory,
}

pub fn allows(user: &User, action: Action) -> bool {
    use Action::*;
    match action {
        // Pending applicants hold Student status, so they fall through to
        // false here without any extra check.
        CreateJob => user.is_verified_alumni() || user.is_admin(),
        ReviewJob | ReviewAlumni | DeleteUser | ModeratePost | ReadAdminListing | CreateEvent
        | DeleteEvent | CreateDonation | DeleteDonation | CreateStory | DeleteStory => {
            user.is_admin()
        }
    }
}

/// Ownership check for author-bound mutations (post edit/delete). Admins get
/// no pass here; moderation runs as its own `ModeratePost` operation.
pub fn owns(actor: &User, owner_id: Uuid) -> bool {
    actor.id == owner_id
}

/// Jobs posted by an admin skip the review queue.
pub fn job_verified_on_creation(actor: &User) -> bool {
    actor.is_admin()
}
