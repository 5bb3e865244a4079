use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{AvatarUrl, EmailAddress, TypeConstraintError, UserName, UserRole};
use crate::domain::user::NewUser;

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfessorForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfessorFormPayload {
    pub email: EmailAddress,
    pub name: UserName,
    pub avatar: Option<AvatarUrl>,
}

impl CreateProfessorFormPayload {
    /// Build the insertable profile. Professors are provisioned ahead of
    /// their first sign-in, so no identity-provider id is attached yet.
    pub fn into_new_user(self) -> NewUser {
        let now = Utc::now().naive_utc();
        NewUser {
            email: self.email,
            name: Some(self.name),
            avatar: self.avatar,
            role: UserRole::Teacher,
            auth_id: None,
            email_verified: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateProfessorFormError {
    #[error("Create professor form validation failed: {0}")]
    Validation(String),
    #[error("Create professor form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateProfessorFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateProfessorFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateProfessorForm> for CreateProfessorFormPayload {
    type Error = CreateProfessorFormError;

    fn try_from(value: CreateProfessorForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            email: EmailAddress::new(value.email)?,
            name: UserName::new(value.name)?,
            avatar: trimmed(value.avatar).map(AvatarUrl::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_professor_form_converts_to_payload() {
        let form = CreateProfessorForm {
            email: "ana@example.com".to_string(),
            name: " Ana García ".to_string(),
            avatar: Some("https://cdn.example.com/a/ana.png".to_string()),
        };

        let payload: CreateProfessorFormPayload = form.try_into().unwrap();
        assert_eq!(payload.email.as_str(), "ana@example.com");
        assert_eq!(payload.name.as_str(), "Ana García");

        let new_user = payload.into_new_user();
        assert_eq!(new_user.role, UserRole::Teacher);
        assert!(new_user.auth_id.is_none());
    }

    #[test]
    fn create_professor_form_rejects_bad_email() {
        let form = CreateProfessorForm {
            email: "not-an-email".to_string(),
            name: "Ana".to_string(),
            avatar: None,
        };

        let payload: Result<CreateProfessorFormPayload, _> = form.try_into();
        assert!(matches!(
            payload,
            Err(CreateProfessorFormError::Validation(_))
        ));
    }
}
