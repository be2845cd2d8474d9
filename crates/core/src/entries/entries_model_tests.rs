#[cfg(test)]
mod tests {
    use crate::entries::{EntryError, EntryKind, FlowDirection, NewEntry, TradeSide};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn trade(quantity: i64, unit_price: rust_decimal::Decimal, side: TradeSide) -> NewEntry {
        NewEntry {
            id: None,
            account_id: "acct-1".to_string(),
            kind: EntryKind::Trade {
                symbol: "ACME".to_string(),
                quantity,
                unit_price,
                side,
            },
            entry_date: Utc::now(),
        }
    }

    fn cash_flow(amount: rust_decimal::Decimal, direction: FlowDirection) -> NewEntry {
        NewEntry {
            id: None,
            account_id: "acct-1".to_string(),
            kind: EntryKind::CashFlow {
                amount,
                category: "Food".to_string(),
                description: None,
                direction,
            },
            entry_date: Utc::now(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_entries() {
        assert!(trade(10, dec!(20), TradeSide::Buy).validate().is_ok());
        assert!(cash_flow(dec!(9.99), FlowDirection::Outflow)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_magnitudes() {
        assert!(matches!(
            trade(0, dec!(20), TradeSide::Buy).validate(),
            Err(EntryError::InvalidData(_))
        ));
        assert!(matches!(
            trade(-5, dec!(20), TradeSide::Sell).validate(),
            Err(EntryError::InvalidData(_))
        ));
        assert!(matches!(
            trade(5, dec!(0), TradeSide::Buy).validate(),
            Err(EntryError::InvalidData(_))
        ));
        assert!(matches!(
            cash_flow(dec!(0), FlowDirection::Inflow).validate(),
            Err(EntryError::InvalidData(_))
        ));
        assert!(matches!(
            cash_flow(dec!(-1), FlowDirection::Outflow).validate(),
            Err(EntryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut entry = trade(1, dec!(1), TradeSide::Buy);
        entry.account_id = "  ".to_string();
        assert!(matches!(entry.validate(), Err(EntryError::InvalidData(_))));

        let entry = NewEntry {
            id: None,
            account_id: "acct-1".to_string(),
            kind: EntryKind::Trade {
                symbol: "".to_string(),
                quantity: 1,
                unit_price: dec!(1),
                side: TradeSide::Buy,
            },
            entry_date: Utc::now(),
        };
        assert!(matches!(entry.validate(), Err(EntryError::InvalidData(_))));

        let entry = NewEntry {
            id: None,
            account_id: "acct-1".to_string(),
            kind: EntryKind::CashFlow {
                amount: dec!(5),
                category: " ".to_string(),
                description: None,
                direction: FlowDirection::Outflow,
            },
            entry_date: Utc::now(),
        };
        assert!(matches!(entry.validate(), Err(EntryError::InvalidData(_))));
    }

    #[test]
    fn test_cash_delta_sign_follows_side_and_direction() {
        assert_eq!(
            trade(10, dec!(20), TradeSide::Buy).cash_delta(),
            dec!(-200)
        );
        assert_eq!(
            trade(10, dec!(20), TradeSide::Sell).cash_delta(),
            dec!(200)
        );
        assert_eq!(
            cash_flow(dec!(50), FlowDirection::Inflow).cash_delta(),
            dec!(50)
        );
        assert_eq!(
            cash_flow(dec!(50), FlowDirection::Outflow).cash_delta(),
            dec!(-50)
        );
    }

    #[test]
    fn test_side_and_direction_round_trip_through_strings() {
        assert_eq!(TradeSide::Buy.as_str().parse(), Ok(TradeSide::Buy));
        assert_eq!(TradeSide::Sell.as_str().parse(), Ok(TradeSide::Sell));
        assert_eq!(
            FlowDirection::Inflow.as_str().parse(),
            Ok(FlowDirection::Inflow)
        );
        assert_eq!(
            FlowDirection::Outflow.as_str().parse(),
            Ok(FlowDirection::Outflow)
        );
        assert!("HOLD".parse::<TradeSide>().is_err());
    }
}
