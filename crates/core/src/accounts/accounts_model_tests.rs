//! Tests for account domain models and the account switcher.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountSwitcher, AccountUpdate, NewAccount};
    use crate::catalog::{Currency, Market, Platform};
    use crate::errors::{Error, ValidationError};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn account(id: &str, broker: &str) -> Account {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Account {
            id: id.to_string(),
            market: vec![Market::Forex],
            currency: Currency::Usd,
            platform: Platform::Mt5,
            is_prop_firm: true,
            broker: broker.to_string(),
            initial_balance: dec!(10000),
            current_balance: dec!(10250.5),
            floating_balance: dec!(10100),
            credits: None,
            disabled: false,
            created_at: created,
            updated_at: created,
        }
    }

    fn new_account() -> NewAccount {
        NewAccount {
            market: vec![Market::Exchange, Market::Crypto],
            currency: Currency::Brl,
            platform: Platform::Profit,
            is_prop_firm: false,
            broker: "MyBroker".to_string(),
            initial_balance: dec!(1000),
            current_balance: dec!(1000),
            credits: dec!(0),
            disabled: false,
        }
    }

    // ==================== Serialization ====================

    #[test]
    fn test_account_deserializes_api_payload() {
        let json = r#"{
            "id": "acc-1",
            "market": ["FOREX", "CRYPTO"],
            "currency": "EUR",
            "platform": "DX_TRADE",
            "isPropFirm": true,
            "broker": "FTMO",
            "initialBalance": 100000,
            "currentBalance": 101250.5,
            "credits": null,
            "disabled": false,
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-02T08:30:00Z"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.market, vec![Market::Forex, Market::Crypto]);
        assert_eq!(account.currency, Currency::Eur);
        assert_eq!(account.platform, Platform::DxTrade);
        assert!(account.is_prop_firm);
        assert_eq!(account.current_balance, dec!(101250.5));
        // missing floatingBalance defaults to zero
        assert_eq!(account.floating_balance, dec!(0));
        assert_eq!(account.credits, None);
    }

    #[test]
    fn test_account_ignores_unknown_market_tokens() {
        let json = r#"{
            "id": "acc-legacy",
            "market": ["B3", "FOREX"],
            "currency": "BRL",
            "platform": "PROFIT",
            "isPropFirm": false,
            "broker": "XP",
            "initialBalance": 500,
            "currentBalance": 500,
            "credits": 0,
            "disabled": false,
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-01T12:00:00Z"
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.market, vec![Market::Forex]);
        assert_eq!(account.currency, Currency::Brl);

        let list: Vec<Account> =
            serde_json::from_str(&format!("[{}]", json.replace("\"FOREX\"", "\"X\""))).unwrap();
        assert!(list[0].market.is_empty());
    }

    #[test]
    fn test_new_account_serializes_camel_case() {
        let value = serde_json::to_value(new_account()).unwrap();
        assert_eq!(value["isPropFirm"], false);
        assert_eq!(value["currency"], "BRL");
        assert_eq!(value["platform"], "PROFIT");
        assert_eq!(value["market"][1], "CRYPTO");
        assert_eq!(value["initialBalance"], 1000.0);
        assert_eq!(value["credits"], 0.0);
        assert!(value.get("brokerCustom").is_none());
    }

    #[test]
    fn test_account_update_skips_absent_fields() {
        let update = AccountUpdate {
            disabled: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "disabled": true }));
    }

    // ==================== Validation ====================

    #[test]
    fn test_new_account_validate() {
        assert!(new_account().validate().is_ok());

        let mut blank_broker = new_account();
        blank_broker.broker = "   ".to_string();
        assert!(matches!(
            blank_broker.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));

        let mut zero_balance = new_account();
        zero_balance.current_balance = dec!(0);
        assert!(zero_balance.validate().is_err());

        let mut negative_credits = new_account();
        negative_credits.credits = dec!(-1);
        assert!(negative_credits.validate().is_err());
    }

    #[test]
    fn test_account_update_validate() {
        assert!(AccountUpdate::default().validate().is_ok());

        let update = AccountUpdate {
            initial_balance: Some(dec!(-5)),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = AccountUpdate {
            credits: Some(dec!(0)),
            broker: Some("FXIFY".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_apply_update_only_touches_present_fields() {
        let original = account("acc-1", "FTMO");
        let update = AccountUpdate {
            broker: Some("The5ers".to_string()),
            credits: Some(dec!(50)),
            ..Default::default()
        };

        let updated = original.apply_update(&update);
        assert_eq!(updated.broker, "The5ers");
        assert_eq!(updated.credits, Some(dec!(50)));
        assert_eq!(updated.current_balance, original.current_balance);
        assert_eq!(updated.currency, original.currency);
        assert_eq!(updated.id, original.id);
    }

    // ==================== AccountSwitcher ====================

    #[test]
    fn test_switcher_starts_with_first_account() {
        let switcher = AccountSwitcher::new(vec![account("a", "FTMO"), account("b", "FXIFY")]);
        assert_eq!(switcher.active().map(|a| a.id.as_str()), Some("a"));
        assert!(!switcher.create_dialog().is_open());

        let empty = AccountSwitcher::new(Vec::new());
        assert!(empty.active().is_none());
    }

    #[test]
    fn test_switcher_select() {
        let mut switcher = AccountSwitcher::new(vec![account("a", "FTMO"), account("b", "FXIFY")]);

        let selected = switcher.select("b").unwrap();
        assert_eq!(selected.broker, "FXIFY");
        assert_eq!(switcher.active().map(|a| a.id.as_str()), Some("b"));

        assert!(matches!(switcher.select("zzz"), Err(Error::NotFound(_))));
        assert_eq!(switcher.active().map(|a| a.id.as_str()), Some("b"));
    }

    #[test]
    fn test_switcher_refetch_keeps_or_resets_active() {
        let mut switcher = AccountSwitcher::new(vec![account("a", "FTMO"), account("b", "FXIFY")]);
        switcher.select("b").unwrap();

        switcher.set_accounts(vec![account("c", "The5ers"), account("b", "FXIFY")]);
        assert_eq!(switcher.active().map(|a| a.id.as_str()), Some("b"));

        switcher.set_accounts(vec![account("c", "The5ers")]);
        assert_eq!(switcher.active().map(|a| a.id.as_str()), Some("c"));
    }

    #[test]
    fn test_switcher_create_dialog_and_shortcuts() {
        let mut switcher = AccountSwitcher::default();
        switcher.create_dialog_mut().open();
        assert!(switcher.create_dialog().is_open());

        assert_eq!(AccountSwitcher::shortcut(0), "⌘1");
        assert_eq!(AccountSwitcher::shortcut(2), "⌘3");
    }
}
