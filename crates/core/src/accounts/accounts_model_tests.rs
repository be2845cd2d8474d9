#[cfg(test)]
mod tests {
    use crate::accounts::NewAccount;
    use crate::errors::{Error, ValidationError};
    use rust_decimal_macros::dec;

    fn new_account(name: &str, cash: rust_decimal::Decimal) -> NewAccount {
        NewAccount {
            id: None,
            name: name.to_string(),
            cash,
        }
    }

    #[test]
    fn test_validate_accepts_zero_starting_balance() {
        assert!(new_account("Checking", dec!(0)).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_positive_starting_balance() {
        assert!(new_account("Brokerage", dec!(10000)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let result = new_account("   ", dec!(100)).validate();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_starting_balance() {
        let result = new_account("Checking", dec!(-1)).validate();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }
}
