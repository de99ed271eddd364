//! Known brokers and whether they are proprietary trading firms.

use std::sync::OnceLock;

use crate::constants::OTHER_BROKER;

/// A selectable broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokerOption {
    pub name: &'static str,
    pub is_prop_firm: bool,
}

const KNOWN_BROKERS: [BrokerOption; 5] = [
    BrokerOption {
        name: "FTMO",
        is_prop_firm: true,
    },
    BrokerOption {
        name: "FundedNext",
        is_prop_firm: true,
    },
    BrokerOption {
        name: "FXIFY",
        is_prop_firm: true,
    },
    BrokerOption {
        name: "Hantec Trader",
        is_prop_firm: true,
    },
    BrokerOption {
        name: "The5ers",
        is_prop_firm: true,
    },
];

/// Broker options in display order: known brokers sorted by name (byte
/// order), then the "Other" entry.
pub fn broker_catalog() -> &'static [BrokerOption] {
    static CATALOG: OnceLock<Vec<BrokerOption>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut options = KNOWN_BROKERS.to_vec();
        options.sort_by(|a, b| a.name.cmp(b.name));
        options.push(BrokerOption {
            name: OTHER_BROKER,
            is_prop_firm: false,
        });
        options
    })
}

/// Looks a broker up by its exact catalog name.
pub fn find_broker(name: &str) -> Option<&'static BrokerOption> {
    broker_catalog().iter().find(|b| b.name == name)
}

pub fn is_other_broker(name: &str) -> bool {
    name == OTHER_BROKER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted_with_other_last() {
        let names: Vec<&str> = broker_catalog().iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec!["FTMO", "FXIFY", "FundedNext", "Hantec Trader", "The5ers", "Other"]
        );
    }

    #[test]
    fn test_find_broker() {
        assert!(find_broker("FTMO").unwrap().is_prop_firm);
        assert!(!find_broker("Other").unwrap().is_prop_firm);
        assert!(find_broker("ftmo").is_none());
        assert!(find_broker("MyBroker").is_none());
    }
}
