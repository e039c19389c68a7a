//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                   |
//! |-------------|--------------------|-------------------------------|
//! | `http_feed` | AlertSource        | Alert feed over HTTP(S)       |
//! | `sink`      | Transport          | stdout / device node / TCP    |
//! |             | TransportFactory   | (for `SinkSpec`)              |
//! | `log_sink`  | EventSink          | `log` facade                  |

pub mod http_feed;
pub mod log_sink;
pub mod sink;
