use subtle::ConstantTimeEq;

use crate::error::PortfolioError;

/// Compare the submitted password against the configured admin secret.
pub fn check_password(provided: Option<&str>, expected: &str) -> Result<(), PortfolioError> {
    let Some(provided) = provided else {
        return Err(PortfolioError::InvalidPassword);
    };
    if bool::from(provided.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(PortfolioError::InvalidPassword)
    }
}
