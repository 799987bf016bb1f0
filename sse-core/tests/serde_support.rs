//! Serde support (enabled with the `serde` feature).

#![cfg(feature = "serde")]

use sse_core::{Event, ReaderSource, Stream, StreamConfig};

#[test]
fn config_from_toml() {
    let config: StreamConfig = toml::from_str("max_event_size = 4096").unwrap();
    assert_eq!(config.effective_max_event_size(), 4096);

    let config: StreamConfig = toml::from_str("").unwrap();
    assert_eq!(config, StreamConfig::default());
}

#[test]
fn config_from_json() {
    let config: StreamConfig = serde_json::from_str(r#"{"max_event_size": 16}"#).unwrap();
    let mut stream = Stream::with_config(ReaderSource::new(&b"data: 0123456789abcdef\n\n"[..]), config);
    assert!(stream.recv().unwrap_err().is_too_large());
}

#[test]
fn event_to_json() {
    let mut stream = Stream::new(ReaderSource::new(&b"id: 7\nevent: tick\ndata: {\"n\":1}\n\n"[..]));
    let event = stream.recv().unwrap().unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"last_event_id": "7", "type": "tick", "data": "{\"n\":1}"})
    );

    let back: Event = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
