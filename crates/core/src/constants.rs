/// Query key of the cached account collection
pub const ACCOUNTS_QUERY_KEY: &str = "accounts";

/// Query key of the cached journal collection
pub const JOURNALS_QUERY_KEY: &str = "journals";

/// Query key of the cached strategy collection
pub const STRATEGIES_QUERY_KEY: &str = "strategies";

/// Amounts are typed as integer minor units (cents)
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Significant digits kept from a typed amount; extra keystrokes are ignored
pub const MAX_AMOUNT_DIGITS: usize = 18;

/// Broker catalog entry meaning "the name is typed in `brokerCustom`"
pub const OTHER_BROKER: &str = "Other";
