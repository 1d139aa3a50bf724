pub const MAP_SERVICE_BASE_URL: &str = "https://www.google.com/maps";
pub const LINE_REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";
pub const LINE_SIGNATURE_HEADER: &str = "X-Line-Signature";

pub const REPLY_NO_VALID_DATA: &str = "No valid parking data available.";
pub const REPLY_LOOKUP_FAILURE: &str = "An error occurred while processing your location.";
pub const REPLY_ASK_FOR_LOCATION: &str = "請傳送位置訊息";
pub const DEFAULT_FACILITY_NAME: &str = "Unknown";
pub const DEFAULT_FACILITY_ADDRESS: &str = "No Address";
