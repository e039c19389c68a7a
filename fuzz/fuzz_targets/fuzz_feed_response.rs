//! Fuzz target: `parse_response` → `DecisionPipeline::decide_snapshot`
//!
//! Drives arbitrary bytes through the feed parser and, when they parse,
//! through the decision pipeline. Neither may panic, and any command that
//! comes out must keep the reserved bits clear.
//!
//! cargo fuzz run fuzz_feed_response

#![no_main]

use libfuzzer_sys::fuzz_target;
use pufflux::app::pipeline::DecisionPipeline;
use pufflux::feed::parse_response;
use pufflux::protocol::command::RESERVED_MASK;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = parse_response(body) else {
        return;
    };

    let pipeline = DecisionPipeline::default();
    match pipeline.decide_snapshot(&snapshot) {
        Ok(decision) => {
            assert_eq!(decision.command.bits() & RESERVED_MASK, 0);
            // Same input, same answer.
            assert_eq!(pipeline.decide_snapshot(&snapshot), Ok(decision));
        }
        Err(upstream) => assert_eq!(snapshot.error.as_ref(), Some(&upstream)),
    }
});
