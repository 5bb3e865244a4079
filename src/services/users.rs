use chrono::Utc;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::{AuthId, EmailAddress, UserName, UserRole};
use crate::domain::user::{NewUser, User};
use crate::forms::users::CreateProfessorFormPayload;
use crate::repository::{UserReader, UserWriter};

use super::{ServiceError, ServiceResult, resolve_profile};

/// Ensure a local profile exists for the authenticated identity.
///
/// Called after sign-in: returns the existing profile when the identity (or
/// its email) is already known, otherwise provisions a STUDENT profile from
/// the identity claims.
pub fn register_student<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<User>
where
    R: UserReader + UserWriter,
{
    match repo.get_user_by_auth_id(&user.sub) {
        Ok(Some(existing)) => return Ok(existing),
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to look up user by auth id: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let auth_id = AuthId::new(user.sub.clone()).map_err(|e| ServiceError::Form(e.to_string()))?;

    // Pre-provisioned profiles (professors) are matched by email on their
    // first sign-in instead of creating a duplicate. The identity is linked
    // onto the row so gated operations resolve it by auth id afterwards.
    match repo.get_user_by_email(&user.email) {
        Ok(Some(mut existing)) => {
            if existing.auth_id.is_none() {
                match repo.set_auth_id(existing.id, &user.sub) {
                    Ok(_) => {
                        existing.auth_id = Some(auth_id);
                        existing.updated_at = Utc::now().naive_utc();
                    }
                    Err(e) => {
                        log::error!("Failed to link auth id to profile: {e}");
                        return Err(ServiceError::Internal);
                    }
                }
            }
            return Ok(existing);
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to look up user by email: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let email = EmailAddress::new(user.email.clone())
        .map_err(|e| ServiceError::Form(e.to_string()))?;
    let now = Utc::now().naive_utc();

    let new_user = NewUser {
        email,
        name: UserName::new(user.name.clone()).ok(),
        avatar: None,
        role: UserRole::Student,
        auth_id: Some(auth_id),
        email_verified: None,
        created_at: now,
        updated_at: now,
    };

    match repo.create_user(&new_user) {
        Ok(created) => Ok(created),
        Err(e) => {
            log::error!("Failed to create user: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Provision a TEACHER profile. Admin-only.
pub fn create_professor<R>(
    payload: CreateProfessorFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter,
{
    let profile = resolve_profile(user, repo)?;
    if profile.role != UserRole::Admin {
        return Err(ServiceError::Unauthorized);
    }

    match repo.get_user_by_email(payload.email.as_str()) {
        Ok(Some(_)) => {
            return Err(ServiceError::Conflict(
                "Ya existe un usuario con este email".to_string(),
            ));
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to look up user by email: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.create_user(&payload.into_new_user()) {
        Ok(created) => Ok(created),
        Err(e) => {
            log::error!("Failed to create professor: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Stamp email verification for the authenticated identity.
///
/// Best-effort: reports whether a profile was updated, swallowing storage
/// errors.
pub fn mark_email_verified<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<bool>
where
    R: UserWriter,
{
    match repo.set_email_verified(&user.sub, Utc::now().naive_utc()) {
        Ok(affected) => Ok(affected > 0),
        Err(e) => {
            log::error!("Failed to mark email as verified: {e}");
            Ok(false)
        }
    }
}

/// Profile of the authenticated identity.
pub fn current_profile<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<User>
where
    R: UserReader,
{
    resolve_profile(user, repo)
}
