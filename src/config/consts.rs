/// Default for the touched gate: messages wait for the first blur
pub const DEFAULT_REQUIRE_TOUCHED: bool = true;
/// Default for the dirty gate: an unedited field may still show messages
pub const DEFAULT_REQUIRE_DIRTY: bool = false;
