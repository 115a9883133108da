//! Instrument value and tag semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::f64::consts::{E, LN_2, PI};
use std::sync::Arc;
use std::thread;

use tagmetrics_core::instrument::EVENT_PREFIX;
use tagmetrics_core::{Counter, Event, Gauge, Instrument, MetricKind, Tag, Tagged, Timer};

fn base_tags() -> Vec<Tag> {
    vec![Tag::new("foo", "bar"), Tag::new("foo2", "bar2")]
}

fn more_tags() -> Vec<Tag> {
    vec![Tag::new("moretag1", "value1"), Tag::new("moretag2", "value2")]
}

#[test]
fn tag_accepts_empty_strings() {
    let t = Tag::new("", "");
    assert_eq!(t.key(), "");
    assert_eq!(t.value(), "");
    assert_eq!(t, Tag::new(String::new(), String::new()));
    assert_ne!(Tag::new("a", "b"), Tag::new("b", "a"));
    assert_eq!(Tag::new("region", "eu").to_string(), "region:eu");
}

#[test]
fn counter_accumulates_signed_deltas() {
    let c = Counter::new(&[]);
    assert_eq!(c.value(), 0);

    c.inc();
    c.inc();
    c.add(10);
    assert_eq!(c.value(), 12);
    c.inc();
    assert_eq!(c.value(), 13);

    c.add(-20);
    assert_eq!(c.value(), -7);
    c.add(0);
    assert_eq!(c.value(), -7);
}

#[test]
fn gauge_keeps_last_write() {
    let g = Gauge::new(&[]);
    assert_eq!(g.value(), 0.0);

    g.update(PI);
    assert_eq!(g.value(), PI);
    g.update(E);
    g.update(LN_2);
    assert_eq!(g.value(), LN_2);

    g.update(-0.5);
    assert_eq!(g.value(), -0.5);
}

#[test]
fn event_representation_tracks_latest_send() {
    let e = Event::new(&[]);
    assert_eq!(e.last_sent(), "");

    e.send();
    assert_eq!(e.last_sent(), "event|");
    e.send_with_text("msg");
    assert_eq!(e.last_sent(), "event|msg");
    e.send_with_text("");
    assert_eq!(e.last_sent(), EVENT_PREFIX);
}

#[test]
fn timer_records_raw_timestamps() {
    let t = Timer::new(&[]);
    assert_eq!(t.times(), (None, None));

    t.start();
    t.stop();

    // wall-clock readings are for reporting; only presence is checked
    assert!(t.started_time().is_some());
    assert!(t.stopped_time().is_some());

    let (mono_start, mono_stop) = t.instants();
    assert_eq!(mono_start, t.started_instant());
    assert_eq!(mono_stop, t.stopped_instant());
    let (mono_start, mono_stop) = (mono_start.unwrap(), mono_stop.unwrap());
    assert!(mono_stop >= mono_start);
    let elapsed = mono_stop.duration_since(mono_start);
    assert!(elapsed.as_millis() < 50, "elapsed={elapsed:?}");
}

#[test]
fn timer_monotonic_readings_never_go_backwards() {
    let t = Timer::new(&[]);
    assert_eq!(t.instants(), (None, None));

    for _ in 0..100 {
        t.start();
        t.stop();
        let (start, stop) = t.instants();
        assert!(stop.unwrap() >= start.unwrap());
    }

    // a later start overwrites both clocks together
    let before = t.started_instant().unwrap();
    thread::sleep(std::time::Duration::from_millis(2));
    t.start();
    assert!(t.started_instant().unwrap() > before);
    assert!(t.started_instant().unwrap() > t.stopped_instant().unwrap());
}

#[test]
fn timer_allows_stop_before_start_and_overwrites() {
    let t = Timer::new(&[]);
    t.stop();
    assert!(t.started_time().is_none());
    let first_stop = t.stopped_time().expect("stopped");

    thread::sleep(std::time::Duration::from_millis(2));
    t.stop();
    let second_stop = t.stopped_time().expect("stopped");
    assert!(second_stop > first_stop);

    t.start();
    assert!(t.started_time().is_some());
}

#[test]
fn tags_append_in_call_order() {
    for initial in [vec![], vec![Tag::new("foo", "bar")], base_tags()] {
        let c = Counter::new(&initial);
        assert_eq!(c.tags(), initial);

        c.with_tags(&more_tags());
        let mut expected = initial.clone();
        expected.extend(more_tags());
        assert_eq!(c.tags(), expected);

        c.with_tag("lastTagKey", "lastTagValue");
        expected.push(Tag::new("lastTagKey", "lastTagValue"));
        assert_eq!(c.tags(), expected);

        // duplicates are kept, never merged
        c.with_tags(&initial);
        expected.extend(initial.clone());
        assert_eq!(c.tags(), expected);
    }
}

#[test]
fn tag_methods_chain() {
    let g = Gauge::new(&[]);
    g.with_tag("a", "1").with_tag("b", "2").update(1.5);
    assert_eq!(g.tags(), vec![Tag::new("a", "1"), Tag::new("b", "2")]);
    assert_eq!(g.value(), 1.5);

    let e = Event::new(&base_tags());
    e.with_tags(&[]).send_with_text("x");
    assert_eq!(e.tags(), base_tags());
}

#[test]
fn instrument_casts_by_kind() {
    let inst = Instrument::new(MetricKind::Gauge, &base_tags());
    assert_eq!(inst.kind(), MetricKind::Gauge);
    assert_eq!(inst.tags(), base_tags());

    let g = inst.as_gauge().unwrap();
    g.update(2.0);
    assert_eq!(inst.as_gauge().unwrap().value(), 2.0);

    let err = inst.as_counter().unwrap_err();
    assert_eq!(err.code().as_str(), "UNEXPECTED_KIND");
    assert_eq!(
        err.to_string(),
        "unexpected instrument kind: expected counter, found gauge"
    );
    assert!(inst.as_timer().is_err());
    assert!(inst.as_event().is_err());
}

#[test]
fn instrument_handles_share_state() {
    let c = Arc::new(Counter::new(&[]));
    let a = Instrument::from(Arc::clone(&c));
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&Instrument::new(MetricKind::Counter, &[])));

    b.with_tag("k", "v");
    c.inc();
    assert_eq!(a.as_counter().unwrap().value(), 1);
    assert_eq!(c.tags(), vec![Tag::new("k", "v")]);
}

#[test]
fn concurrent_incs_are_not_lost() {
    let c = Arc::new(Counter::new(&[]));
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let c = Arc::clone(&c);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    c.inc();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(c.value(), 16_000);
}

#[test]
fn concurrent_tag_batches_stay_contiguous() {
    let e = Arc::new(Event::new(&[]));
    let workers = 8;
    let batches = 50;

    let handles: Vec<_> = (0..workers)
        .map(|w| {
            let e = Arc::clone(&e);
            thread::spawn(move || {
                for b in 0..batches {
                    let batch = [
                        Tag::new(format!("w{w}"), format!("{b}:0")),
                        Tag::new(format!("w{w}"), format!("{b}:1")),
                        Tag::new(format!("w{w}"), format!("{b}:2")),
                    ];
                    e.with_tags(&batch);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let tags = e.tags();
    assert_eq!(tags.len(), workers * batches * 3);

    for chunk in tags.chunks(3) {
        let key = chunk[0].key();
        let (batch, _) = chunk[0].value().split_once(':').unwrap();
        for (i, t) in chunk.iter().enumerate() {
            assert_eq!(t.key(), key);
            assert_eq!(t.value(), format!("{batch}:{i}"));
        }
    }

    for w in 0..workers {
        let key = format!("w{w}");
        let order: Vec<usize> = tags
            .iter()
            .filter(|t| t.key() == key && t.value().ends_with(":0"))
            .map(|t| t.value().trim_end_matches(":0").parse().unwrap())
            .collect();
        assert_eq!(order, (0..batches).collect::<Vec<_>>());
    }
}
