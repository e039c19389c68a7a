//! Integration tests for the feed → service → transport cycle.

use pufflux::Error;
use pufflux::app::events::AppEvent;
use pufflux::app::pipeline::{Decision, Outcome, Unrenderable};
use pufflux::app::service::QueryService;
use pufflux::feed::{Alert, FeedSnapshot, UpstreamError};
use pufflux::protocol::{Classification, Command, Palette, Profile};
use pufflux::vtec::{Category, Phenomenon, Significance};

use crate::mock_io::{Fault, RecordingEvents, RecordingTransport, ScriptedSource};

const TORNADO_WARNING: &str = r#"{
    "response": {"version": "0.1"},
    "alerts": [
        {"type": "WAT", "description": "Flood Watch", "phenomena": "FL", "significance": "A"},
        {"type": "TOR", "description": "Tornado Warning", "phenomena": "TO", "significance": "W"}
    ]
}"#;

const QUIET: &str = r#"{"response": {"version": "0.1"}, "alerts": []}"#;

const BAD_KEY: &str = r#"{
    "response": {
        "version": "0.1",
        "error": {"type": "keynotfound", "description": "this key does not exist"}
    }
}"#;

fn run(body: &str) -> (pufflux::Result<Decision>, RecordingTransport, RecordingEvents) {
    let mut svc = QueryService::new(Profile::default());
    let mut src = ScriptedSource::from_bodies(&[body]);
    let mut tx = RecordingTransport::new();
    let mut ev = RecordingEvents::new();
    let result = svc.run_cycle(&mut src, &mut tx, &mut ev);
    (result, tx, ev)
}

#[test]
fn tornado_warning_reaches_the_wire() {
    let (result, tx, ev) = run(TORNADO_WARNING);

    let decision = result.unwrap();
    assert_eq!(tx.written, [0x21, 0x0C]);
    assert_eq!(tx.flushes, 1);
    assert!(matches!(
        decision.outcome,
        Outcome::Selected {
            phenomenon: Phenomenon::Tornado,
            ..
        }
    ));

    assert_eq!(
        ev.events,
        vec![
            AppEvent::CycleStarted { cycle: 1 },
            AppEvent::AlertSelected {
                phenomenon: Phenomenon::Tornado,
                significance: Significance::Warning,
                category: Category::Tornado,
            },
            AppEvent::CommandWritten(Command::from_bits(0x210C)),
        ]
    );
}

#[test]
fn no_alerts_writes_the_default_command() {
    let (result, tx, ev) = run(QUIET);
    assert_eq!(result.unwrap().command, Command::DEFAULT);
    assert_eq!(tx.written, [0x00, 0x00]);
    assert_eq!(ev.count(|e| *e == AppEvent::NoActiveAlert), 1);
}

#[test]
fn upstream_error_writes_nothing() {
    let (result, tx, ev) = run(BAD_KEY);

    let err = result.unwrap_err();
    assert_eq!(
        err,
        Error::Upstream(UpstreamError::new("keynotfound", "this key does not exist"))
    );
    assert!(tx.written.is_empty());
    assert_eq!(tx.flushes, 0);
    assert_eq!(
        ev.count(|e| matches!(e, AppEvent::UpstreamError(u) if u.kind == "keynotfound")),
        1
    );
    assert_eq!(ev.count(|e| matches!(e, AppEvent::CycleFailed { .. })), 1);
}

#[test]
fn malformed_body_is_a_parse_failure() {
    let (result, tx, ev) = run("<html>503</html>");
    assert_eq!(result.unwrap_err().kind(), "parse");
    assert!(tx.written.is_empty());
    assert_eq!(ev.count(|e| matches!(e, AppEvent::CycleFailed { .. })), 1);
}

#[test]
fn fetch_failure_is_reported_and_counted() {
    let mut svc = QueryService::new(Profile::default());
    let mut src = ScriptedSource::new(vec![Err(Error::Fetch("connection refused".into()))]);
    let mut tx = RecordingTransport::new();
    let mut ev = RecordingEvents::new();

    let err = svc.run_cycle(&mut src, &mut tx, &mut ev).unwrap_err();
    assert_eq!(err, Error::Fetch("connection refused".into()));
    assert_eq!(svc.consecutive_failures(), 1);
    assert!(tx.written.is_empty());
}

#[test]
fn unknown_phenomenon_sends_default_without_falling_back() {
    let mut svc = QueryService::new(Profile::default());
    let mut src = ScriptedSource::new(vec![Ok(FeedSnapshot::with_alerts(vec![
        Alert::new("ZZ", "W"),
        Alert::new("TO", "A"),
    ]))]);
    let mut tx = RecordingTransport::new();
    let mut ev = RecordingEvents::new();

    svc.run_cycle(&mut src, &mut tx, &mut ev).unwrap();
    assert_eq!(tx.written, [0x00, 0x00]);
    assert_eq!(
        ev.count(|e| matches!(
            e,
            AppEvent::UnrenderableAlert {
                reason: Unrenderable::UnknownPhenomenon,
                ..
            }
        )),
        1
    );
}

#[test]
fn transport_faults_fail_the_cycle() {
    for fault in [Fault::ShortWrite, Fault::WriteError, Fault::FlushError] {
        let mut svc = QueryService::new(Profile::default());
        let mut src = ScriptedSource::from_bodies(&[TORNADO_WARNING]);
        let mut tx = RecordingTransport::with_fault(fault);
        let mut ev = RecordingEvents::new();

        let err = svc.run_cycle(&mut src, &mut tx, &mut ev).unwrap_err();
        assert_eq!(err.kind(), "transport", "{fault:?}");
        assert_eq!(svc.last_command(), None, "{fault:?}");
        assert_eq!(
            ev.count(|e| matches!(e, AppEvent::CommandWritten(_))),
            0,
            "{fault:?}"
        );
    }
}

#[test]
fn classic_profile_changes_colour_ids_only() {
    let mut svc = QueryService::new(Profile {
        palette: Palette::Classic,
        classification: Classification::Standard,
    });
    let mut src = ScriptedSource::from_bodies(&[TORNADO_WARNING]);
    let mut tx = RecordingTransport::new();
    let mut ev = RecordingEvents::new();

    svc.run_cycle(&mut src, &mut tx, &mut ev).unwrap();
    assert_eq!(tx.written, [0x81, 0x0C]);
}

#[test]
fn repeated_cycles_are_idempotent() {
    let mut svc = QueryService::new(Profile::default());
    let mut src = ScriptedSource::from_bodies(&[TORNADO_WARNING]);
    let mut tx = RecordingTransport::new();
    let mut ev = RecordingEvents::new();

    for _ in 0..3 {
        svc.run_cycle(&mut src, &mut tx, &mut ev).unwrap();
    }
    assert_eq!(tx.written, [0x21, 0x0C, 0x21, 0x0C, 0x21, 0x0C]);
    assert_eq!(svc.cycles(), 3);
    assert_eq!(src.fetches, 3);
}
