use thiserror::Error;

/// A stored user. Only constructed through validation, so every `User`
/// in a store has a non-blank name and a positive age.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub age: f64,
}

/// Raw answers for a user, as collected from the prompt.
///
/// `age` is `None` when the operator typed something that is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub age: Option<f64>,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, age: Option<f64>) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be blank")]
    EmptyName,

    #[error("age must be a number greater than zero")]
    InvalidAge,
}

impl TryFrom<UserDraft> for User {
    type Error = ValidationError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let age = draft.age.ok_or(ValidationError::InvalidAge)?;
        if !age.is_finite() || age <= 0.0 {
            return Err(ValidationError::InvalidAge);
        }
        // Name is stored as entered; only the emptiness check trims.
        Ok(User {
            name: draft.name,
            age,
        })
    }
}
