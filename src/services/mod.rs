use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::User;
use crate::repository::UserReader;

pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod courses;
pub mod errors;
pub mod users;

/// Resolve the local profile behind an authenticated identity.
///
/// Identities without a profile row cannot act on anything, so the absence
/// maps to an authorization failure rather than a missing resource.
pub(crate) fn resolve_profile<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<User>
where
    R: UserReader,
{
    match repo.get_user_by_auth_id(&user.sub) {
        Ok(Some(profile)) => Ok(profile),
        Ok(None) => Err(ServiceError::Unauthorized),
        Err(e) => {
            log::error!("Failed to load user profile: {e}");
            Err(ServiceError::Internal)
        }
    }
}
