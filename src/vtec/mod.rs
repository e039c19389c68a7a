//! P-VTEC code tables.
//!
//! Only the two fields the cloud cares about are modelled: the phenomenon
//! (`pp`) and the significance (`s`). Both lookups are total over arbitrary
//! strings and answer `None` for anything outside the table, so malformed
//! upstream data never aborts a decision cycle.
//!
//! ```text
//!  "TO" ──▶ Phenomenon::Tornado ──▶ Category::Tornado
//!  "W"  ──▶ Significance::Warning (rank 7)
//! ```

mod category;
mod phenomenon;
mod significance;

pub use category::Category;
pub use phenomenon::Phenomenon;
pub use significance::Significance;
