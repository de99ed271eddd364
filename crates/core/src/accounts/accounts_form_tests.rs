//! Tests for the create-account schema and form state.

#[cfg(test)]
mod tests {
    use crate::accounts::{fields, validate_create_account, AccountForm, AccountFormValues, AmountField};
    use crate::catalog::{Currency, Market, Platform};
    use rust_decimal_macros::dec;

    fn valid_values() -> AccountFormValues {
        AccountFormValues {
            market: vec!["FOREX".to_string()],
            currency: Some("USD".to_string()),
            platform: Some("MT5".to_string()),
            is_prop_firm: true,
            broker: "FTMO".to_string(),
            initial_balance: dec!(10000),
            current_balance: dec!(10000),
            ..Default::default()
        }
    }

    /// A form filled the way a user would: keystrokes into the amount inputs.
    fn filled_form() -> AccountForm {
        let mut form = AccountForm::new();
        form.toggle_market(Market::Forex);
        form.set_currency("USD");
        form.set_platform("MT5");
        form.set_broker("FTMO");
        form.input_amount(AmountField::InitialBalance, "1000000");
        form.input_amount(AmountField::CurrentBalance, "1000000");
        form
    }

    // ==================== Schema ====================

    #[test]
    fn test_schema_accepts_valid_draft() {
        let validated = validate_create_account(&valid_values()).unwrap();
        assert_eq!(validated.currency, Currency::Usd);
        assert_eq!(validated.platform, Platform::Mt5);
        assert_eq!(validated.market, vec![Market::Forex]);
    }

    #[test]
    fn test_schema_accepts_empty_market() {
        let values = AccountFormValues {
            market: Vec::new(),
            ..valid_values()
        };
        assert!(validate_create_account(&values).is_ok());
    }

    #[test]
    fn test_schema_reports_every_failing_field() {
        let values = AccountFormValues {
            market: vec!["FOREX".to_string(), "STOCKS".to_string()],
            currency: None,
            platform: Some("MT6".to_string()),
            broker: "X".to_string(),
            initial_balance: dec!(0),
            current_balance: dec!(-1),
            credits: Some(dec!(-0.01)),
            ..Default::default()
        };

        let errors = validate_create_account(&values).unwrap_err();
        assert_eq!(errors.first("market.1").map(|m| m.contains("STOCKS")), Some(true));
        assert_eq!(errors.first(fields::CURRENCY), Some("Required"));
        assert_eq!(errors.first(fields::PLATFORM), Some("Invalid platform 'MT6'"));
        assert_eq!(
            errors.first(fields::BROKER),
            Some("Broker name must be at least 2 characters long")
        );
        assert_eq!(
            errors.first(fields::INITIAL_BALANCE),
            Some("Initial balance must be greater than zero")
        );
        assert_eq!(
            errors.first(fields::CURRENT_BALANCE),
            Some("Current balance must be greater than zero")
        );
        assert_eq!(
            errors.first(fields::CREDITS),
            Some("Credit must be equal or greater than zero")
        );
        assert!(!errors.contains(fields::BROKER_CUSTOM));
    }

    #[test]
    fn test_schema_absent_credits_are_valid() {
        let values = AccountFormValues {
            credits: None,
            ..valid_values()
        };
        let payload = validate_create_account(&values).unwrap().into_new_account();
        assert_eq!(payload.credits, dec!(0));
        assert!(!payload.disabled);
    }

    #[test]
    fn test_schema_other_broker_requires_custom_name() {
        for custom in [None, Some(""), Some("   ")] {
            let values = AccountFormValues {
                broker: "Other".to_string(),
                broker_custom: custom.map(str::to_string),
                ..valid_values()
            };
            let errors = validate_create_account(&values).unwrap_err();
            assert_eq!(errors.first(fields::BROKER_CUSTOM), Some("Enter the broker name"));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_schema_custom_name_ignored_for_catalog_broker() {
        let values = AccountFormValues {
            broker_custom: Some("Ignored".to_string()),
            ..valid_values()
        };
        let payload = validate_create_account(&values).unwrap().into_new_account();
        assert_eq!(payload.broker, "FTMO");
    }

    // ==================== Form state ====================

    #[test]
    fn test_new_form_is_blank() {
        let form = AccountForm::new();
        for field in AmountField::ALL {
            assert_eq!(form.display(field), "");
            assert_eq!(form.amount(field), dec!(0));
        }
        assert_eq!(form.currency(), None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_input_amount_formats_and_keeps_raw_value() {
        let mut form = AccountForm::new();
        form.set_currency("BRL");
        form.input_amount(AmountField::InitialBalance, "1000");

        assert_eq!(form.display(AmountField::InitialBalance), "R$\u{a0}10,00");
        assert_eq!(form.amount(AmountField::InitialBalance), dec!(10.00));

        // next keystroke arrives with the formatted text plus the new digit
        form.input_amount(AmountField::InitialBalance, "R$\u{a0}10,005");
        assert_eq!(form.display(AmountField::InitialBalance), "R$\u{a0}100,05");
        assert_eq!(form.amount(AmountField::InitialBalance), dec!(100.05));
    }

    #[test]
    fn test_input_amount_without_currency_uses_usd() {
        let mut form = AccountForm::new();
        form.input_amount(AmountField::Credits, "250");
        assert_eq!(form.display(AmountField::Credits), "US$\u{a0}2,50");
        assert_eq!(form.values().credits, Some(dec!(2.50)));
    }

    #[test]
    fn test_cleared_input_is_blank_and_zero() {
        let mut form = AccountForm::new();
        form.input_amount(AmountField::CurrentBalance, "500");
        form.input_amount(AmountField::CurrentBalance, "");
        assert_eq!(form.display(AmountField::CurrentBalance), "");
        assert_eq!(form.amount(AmountField::CurrentBalance), dec!(0));
    }

    #[test]
    fn test_currency_switch_reformats_without_converting() {
        let mut form = AccountForm::new();
        form.set_currency("USD");
        form.input_amount(AmountField::InitialBalance, "1000");
        form.input_amount(AmountField::CurrentBalance, "123456");

        form.set_currency("EUR");
        assert_eq!(form.display(AmountField::InitialBalance), "€\u{a0}10,00");
        assert_eq!(form.display(AmountField::CurrentBalance), "€\u{a0}1.234,56");
        assert_eq!(form.display(AmountField::Credits), "");
        assert_eq!(form.amount(AmountField::InitialBalance), dec!(10.00));
        assert_eq!(form.amount(AmountField::CurrentBalance), dec!(1234.56));
        assert_eq!(form.currency(), Some(Currency::Eur));
    }

    #[test]
    fn test_catalog_broker_derives_prop_firm() {
        let mut form = AccountForm::new();
        form.set_broker("FTMO");
        assert!(form.is_prop_firm());
        assert!(!form.is_other_broker());

        // the yes/no control is hidden for catalog brokers
        assert!(!form.set_prop_firm(false));
        assert!(form.is_prop_firm());

        form.set_broker("Other");
        assert!(form.is_other_broker());
        assert!(!form.is_prop_firm());
        assert!(form.set_prop_firm(true));
        assert!(form.is_prop_firm());
    }

    #[test]
    fn test_unknown_broker_keeps_prop_firm_choice() {
        let mut form = AccountForm::new();
        form.set_broker("Other");
        form.set_prop_firm(true);
        form.set_broker("Some Unlisted Broker");
        assert!(form.is_prop_firm());
    }

    #[test]
    fn test_toggle_market() {
        let mut form = AccountForm::new();
        form.toggle_market(Market::Crypto);
        form.toggle_market(Market::Forex);
        assert!(form.is_market_selected(Market::Crypto));

        form.toggle_market(Market::Crypto);
        assert!(!form.is_market_selected(Market::Crypto));
        assert_eq!(form.values().market, vec!["FOREX".to_string()]);
    }

    #[test]
    fn test_to_payload_from_catalog_broker() {
        let mut form = filled_form();
        let payload = form.to_payload().unwrap();

        assert_eq!(payload.broker, "FTMO");
        assert!(payload.is_prop_firm);
        assert_eq!(payload.initial_balance, dec!(10000.00));
        assert_eq!(payload.credits, dec!(0));
        assert!(!payload.disabled);
        assert_eq!(payload.platform, Platform::Mt5);
    }

    #[test]
    fn test_to_payload_resolves_other_broker() {
        let mut form = filled_form();
        form.set_broker("Other");
        form.set_broker_custom("  MyBroker ");
        form.set_disabled(true);
        form.input_amount(AmountField::Credits, "5000");

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.broker, "MyBroker");
        assert!(!payload.is_prop_firm);
        assert!(payload.disabled);
        assert_eq!(payload.credits, dec!(50.00));
    }

    #[test]
    fn test_validation_errors_stay_on_form_until_fixed() {
        let mut form = filled_form();
        form.set_broker("Other");

        assert!(form.to_payload().is_err());
        assert_eq!(form.error(fields::BROKER_CUSTOM), Some("Enter the broker name"));

        form.set_broker_custom("MyBroker");
        assert!(form.validate().is_ok());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.set_broker("Other");
        let _ = form.validate();

        form.reset();
        assert_eq!(form.values(), &AccountFormValues::default());
        assert_eq!(form.display(AmountField::InitialBalance), "");
        assert!(form.errors().is_empty());
    }
}
