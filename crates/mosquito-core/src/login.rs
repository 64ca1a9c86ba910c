//! Placeholder login gate in front of the simulation. Any non-blank pair of
//! fields is accepted; nothing is checked against an account.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), LoginError> {
        if self.identifier.trim().is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_identifier_is_rejected() {
        assert_eq!(
            LoginForm::new("   ", "hunter2").validate(),
            Err(LoginError::MissingFields)
        );
    }

    #[test]
    fn any_filled_pair_passes() {
        assert!(LoginForm::new("+44 7700 900000", "x").validate().is_ok());
    }
}
