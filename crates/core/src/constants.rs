/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
