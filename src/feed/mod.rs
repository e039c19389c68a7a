//! Alert feed model.
//!
//! The feed is a JSON document listing the active alerts for one location,
//! or an error payload. Only the VTEC fields and the error block matter;
//! everything else in the document is ignored.
//!
//! ```text
//!  {"alerts":[{"phenomena":"TO","significance":"W", ...}],
//!   "response":{"error":{"type":"...","description":"..."}}}
//! ```

mod model;
mod url;

pub use model::{Alert, AlertResponse, FeedSnapshot, ResponseMeta, UpstreamError, parse_response};
pub use url::alerts_url;
