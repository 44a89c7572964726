//! Ramp generation emits its trace and debug events when a subscriber is
//! listening at the most verbose level.

use std::io;
use std::sync::{Arc, Mutex};

use tint_color::Color;
use tint_palette::generate_palette;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DECOMPOSED: &str = "decomposed base color";
const DERIVED: &str = "derived ramp step";
const TUNING: &str = "tuning ramp for dark background";

// ── Helpers ─────────────────────────────────────────────────────────────

/// Writer that appends formatted events to a shared buffer.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a TRACE-level fmt subscriber and return everything it logged.
fn capture_events(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::TRACE.into())
        .parse_lossy("tint_palette=trace");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

const RED: Color = Color::rgb(0xf5, 0x22, 0x2d);

// ── Tests ───────────────────────────────────────────────────────────────

#[test]
fn light_ramp_traces_base_and_each_step() {
    let log = capture_events(|| {
        let palette = generate_palette(RED, None, false);
        assert_eq!(palette[5], RED);
    });

    assert_eq!(log.matches(DECOMPOSED).count(), 1, "{log}");
    assert_eq!(log.matches(DERIVED).count(), 9, "{log}");
    assert_eq!(log.matches(TUNING).count(), 0, "{log}");
    assert!(log.contains("TRACE"), "{log}");
}

#[test]
fn dark_ramp_also_logs_tuning() {
    let log = capture_events(|| {
        let palette = generate_palette(RED, None, true);
        assert!(palette.is_dark());
    });

    assert_eq!(log.matches(DECOMPOSED).count(), 1, "{log}");
    assert_eq!(log.matches(DERIVED).count(), 9, "{log}");
    assert_eq!(log.matches(TUNING).count(), 1, "{log}");
    assert!(log.contains("DEBUG"), "{log}");
}

#[test]
fn nothing_is_logged_above_debug() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = generate_palette(RED, Some(Color::BLACK), true);
    });
    assert_eq!(capture.contents(), "");
}
