use thiserror::Error;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const CATEGORY_NOT_FOUND: &str = "Category not found";

#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Missing or soft-deleted row. Carries the message shown to the caller.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type UseCaseResult<T> = std::result::Result<T, UseCaseError>;

pub fn ensure_name(field: &str, name: &str) -> UseCaseResult<()> {
    if name.trim().is_empty() {
        return Err(UseCaseError::Invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub fn ensure_price(field: &str, price: f64) -> UseCaseResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(UseCaseError::Invalid(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(ensure_name("name", "Books").is_ok());
        let err = ensure_name("name", "   ").unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn negative_and_non_finite_prices_are_rejected() {
        assert!(ensure_price("price", 0.0).is_ok());
        assert!(ensure_price("price", 29.99).is_ok());
        assert!(matches!(
            ensure_price("price", -0.01),
            Err(UseCaseError::Invalid(_))
        ));
        assert!(matches!(
            ensure_price("price", f64::NAN),
            Err(UseCaseError::Invalid(_))
        ));
        assert!(matches!(
            ensure_price("price", f64::INFINITY),
            Err(UseCaseError::Invalid(_))
        ));
    }

    #[test]
    fn storage_errors_keep_the_underlying_text() {
        let err = UseCaseError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }
}
