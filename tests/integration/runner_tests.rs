//! Scheduler → runner → service, driven tick by tick.

use pufflux::Error;
use pufflux::app::events::AppEvent;
use pufflux::app::ports::CycleOutcome;
use pufflux::app::runner::CycleRunner;
use pufflux::app::service::QueryService;
use pufflux::feed::{Alert, FeedSnapshot, UpstreamError};
use pufflux::protocol::Profile;
use pufflux::scheduler::{Schedule, ScheduleKind, Scheduler};

use crate::mock_io::{RecordingEvents, ScriptedSource, SharedSink};

fn runner(
    script: Vec<pufflux::Result<FeedSnapshot>>,
    sink: SharedSink,
) -> CycleRunner<ScriptedSource, SharedSink, RecordingEvents> {
    CycleRunner::new(
        QueryService::new(Profile::default()),
        ScriptedSource::new(script),
        sink,
        RecordingEvents::new(),
    )
}

fn periodic(interval_secs: u32, retry_secs: u32) -> Scheduler {
    Scheduler::new(Schedule {
        label: "test".into(),
        kind: ScheduleKind::Periodic {
            interval_secs,
            retry_secs,
        },
    })
}

#[test]
fn one_shot_runs_a_single_cycle() {
    let sink = SharedSink::default();
    let log = sink.log.clone();
    let mut r = runner(
        vec![Ok(FeedSnapshot::with_alerts(vec![Alert::new("TO", "W")]))],
        sink,
    );
    let mut sched = Scheduler::new(Schedule {
        label: "once".into(),
        kind: ScheduleKind::OneShot,
    });

    assert_eq!(sched.tick(0, &mut r), Some(CycleOutcome::Completed));
    assert!(sched.is_finished());
    assert_eq!(sched.tick(1, &mut r), None);

    assert_eq!(*log.borrow(), [0x21, 0x0C]);
    assert_eq!(r.service().cycles(), 1);
    assert!(r.last_error().is_none());
}

#[test]
fn failed_cycle_is_retried_after_retry_delay() {
    let sink = SharedSink::default();
    let log = sink.log.clone();
    let mut r = runner(
        vec![
            Err(Error::Fetch("timed out".into())),
            Ok(FeedSnapshot::default()),
        ],
        sink,
    );
    let mut sched = periodic(300, 10);

    assert_eq!(sched.tick(0, &mut r), Some(CycleOutcome::Failed));
    assert_eq!(r.last_error(), Some(&Error::Fetch("timed out".into())));

    // Nothing fires during the retry delay.
    for _ in 0..9 {
        assert_eq!(sched.tick(1, &mut r), None);
    }
    assert_eq!(sched.tick(1, &mut r), Some(CycleOutcome::Completed));
    assert!(r.last_error().is_none());
    assert_eq!(*log.borrow(), [0x00, 0x00]);

    // Back on the regular interval.
    assert_eq!(sched.secs_until_due(), 300);
}

#[test]
fn periodic_schedule_writes_every_interval() {
    let mut r = runner(vec![Ok(FeedSnapshot::default())], SharedSink::default());
    let mut sched = periodic(5, 5);

    for _ in 0..=10 {
        sched.tick(1, &mut r);
    }
    // Fires at t=1, 6, 11.
    assert_eq!(r.service().cycles(), 3);
    assert_eq!(
        r.events()
            .count(|e| matches!(e, AppEvent::CommandWritten(_))),
        3
    );
}

#[test]
fn sink_open_failure_fails_the_cycle_after_deciding() {
    let sink = SharedSink {
        fail_open: true,
        ..SharedSink::default()
    };
    let mut r = runner(vec![Ok(FeedSnapshot::default())], sink);

    let err = r.run_once().unwrap_err();
    assert_eq!(err, Error::Transport("device unplugged".into()));
    assert_eq!(r.last_error(), Some(&err));
    assert_eq!(r.transports().opens, 1);
    assert_eq!(r.service().cycles(), 1);
    assert_eq!(r.service().consecutive_failures(), 1);
    assert_eq!(
        r.events()
            .count(|e| matches!(e, AppEvent::CycleFailed { .. })),
        1
    );
}

#[test]
fn sink_is_not_opened_without_a_command() {
    let bad_key = FeedSnapshot::with_error(UpstreamError::new(
        "keynotfound",
        "this key does not exist",
    ));
    let mut r = runner(
        vec![
            Ok(bad_key),
            Err(Error::Fetch("timed out".into())),
            Err(Error::Parse("expected value at line 1 column 1".into())),
        ],
        SharedSink::default(),
    );

    for kind in ["upstream", "fetch", "parse"] {
        assert_eq!(r.run_once().unwrap_err().kind(), kind);
    }
    assert_eq!(r.transports().opens, 0);
    assert!(r.transports().log.borrow().is_empty());
}

#[test]
fn each_written_command_opens_the_sink_once() {
    let mut r = runner(vec![Ok(FeedSnapshot::default())], SharedSink::default());
    for _ in 0..3 {
        r.run_once().unwrap();
    }
    assert_eq!(r.transports().opens, 3);
    assert_eq!(r.transports().log.borrow().len(), 6);
}

// ── Giving up ─────────────────────────────────────────────────

#[test]
fn no_failure_limit_never_gives_up() {
    let mut r = runner(vec![Err(Error::Fetch("timed out".into()))], SharedSink::default());
    for _ in 0..20 {
        assert!(r.run_once().is_err());
    }
    assert_eq!(r.give_up(), None);
}

#[test]
fn gives_up_after_limit_consecutive_failures() {
    let mut r = runner(
        vec![
            Err(Error::Fetch("timed out".into())),
            Err(Error::Fetch("timed out".into())),
            Ok(FeedSnapshot::default()),
            Err(Error::Fetch("timed out".into())),
            Err(Error::Fetch("timed out".into())),
            Err(Error::Fetch("refused".into())),
        ],
        SharedSink::default(),
    )
    .with_failure_limit(3);

    for _ in 0..2 {
        assert!(r.run_once().is_err());
        assert_eq!(r.give_up(), None);
    }

    // A success resets the streak.
    r.run_once().unwrap();
    assert_eq!(r.give_up(), None);

    for _ in 0..2 {
        assert!(r.run_once().is_err());
        assert_eq!(r.give_up(), None);
    }
    assert!(r.run_once().is_err());
    assert_eq!(r.give_up(), Some(&Error::Fetch("refused".into())));
}

#[test]
fn sink_open_failures_count_toward_the_limit() {
    let sink = SharedSink {
        fail_open: true,
        ..SharedSink::default()
    };
    let mut r = runner(vec![Ok(FeedSnapshot::default())], sink).with_failure_limit(2);

    assert!(r.run_once().is_err());
    assert_eq!(r.give_up(), None);
    assert!(r.run_once().is_err());
    assert_eq!(
        r.give_up(),
        Some(&Error::Transport("device unplugged".into()))
    );
}

#[test]
fn one_shot_failure_gives_up_with_limit_one() {
    let mut r = runner(vec![Err(Error::Fetch("timed out".into()))], SharedSink::default())
        .with_failure_limit(1);
    let mut sched = Scheduler::new(Schedule {
        label: "once".into(),
        kind: ScheduleKind::OneShot,
    });

    assert_eq!(sched.tick(0, &mut r), Some(CycleOutcome::Failed));
    assert!(sched.is_finished());
    assert_eq!(r.give_up(), Some(&Error::Fetch("timed out".into())));
}
