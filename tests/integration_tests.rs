//! Integration tests for the wispfx codecs
//!
//! These tests verify end-to-end behavior across the public API: a registry
//! resolving type keys, and the same effect moving through the wire, command,
//! and schema formats.

use std::io::Cursor;

use bytes::BytesMut;
use wispfx::command::{parse_wisp_payload, StringReader};
use wispfx::key::ParticleKey;
use wispfx::models::{ParticleEffect, WispParams};
use wispfx::parser::{parse_stream, write_line};
use wispfx::registry::ParticleRegistry;
use wispfx::wire::{WireDecode, WireEncode, WISP_PAYLOAD_LEN};

#[test]
fn test_wire_roundtrip_through_registry() {
    let registry = ParticleRegistry::with_builtin();
    let params = WispParams::new(1.5, 0.2, 0.4, 0.9)
        .with_max_age_mul(4.0)
        .with_depth_test(false)
        .with_no_clip(true);

    let mut buf = BytesMut::new();
    ParticleEffect::Wisp(params).encode_wire(&mut buf);
    assert_eq!(buf.len(), WISP_PAYLOAD_LEN);

    let decoded = registry.decode_wire(&ParticleKey::wisp(), &mut buf.freeze()).unwrap();
    assert_eq!(decoded, ParticleEffect::Wisp(params));
}

#[test]
fn test_command_roundtrip_preserves_text_visible_fields() {
    let registry = ParticleRegistry::with_builtin();
    let params = WispParams::new(2.25, 0.75, 0.5, 0.25)
        .with_max_age_mul(1.5)
        .with_depth_test(false);

    let line = registry.format_command(&ParticleEffect::Wisp(params)).unwrap();
    assert_eq!(line, "wispfx:wisp 2.25 0.75 0.50 0.25 1.50 false");

    let parsed = registry.parse_command(&line).unwrap();
    assert_eq!(parsed, ParticleEffect::Wisp(params));
}

#[test]
fn test_command_does_not_carry_no_clip() {
    // The command format never writes no_clip, and the parser never sets it:
    // a no_clip effect survives the wire but not the command line.
    let registry = ParticleRegistry::with_builtin();
    let params = WispParams::new(1.0, 1.0, 1.0, 1.0).with_no_clip(true);

    let line = registry.format_command(&ParticleEffect::Wisp(params)).unwrap();
    let parsed = registry.parse_command(&line).unwrap();
    match parsed {
        ParticleEffect::Wisp(reparsed) => {
            assert!(!reparsed.no_clip);
            assert_eq!(reparsed.with_no_clip(true), params);
        }
    }
}

#[test]
fn test_schema_stream_to_wire() {
    // Data-driven definitions decode into the same records the wire layer
    // replicates.
    let input = r#"{"type": "wispfx:wisp", "size": 0.75, "r": 0.1, "g": 0.9, "b": 0.4, "maxAgeMul": 2.0, "depthTest": true, "noClip": true}"#;
    let result = parse_stream(Cursor::new(input));
    assert!(result.warnings.is_empty());
    assert_eq!(result.effects.len(), 1);

    let mut buf = BytesMut::new();
    result.effects[0].encode_wire(&mut buf);
    let decoded = WispParams::decode_wire(&mut buf.freeze());
    assert_eq!(ParticleEffect::Wisp(decoded), result.effects[0]);
}

#[test]
fn test_schema_line_roundtrip() {
    let effect = ParticleEffect::Wisp(WispParams::new(0.5, 0.0, 0.25, 1.0).with_max_age_mul(0.5));
    let line = write_line(&effect).unwrap();
    let result = parse_stream(Cursor::new(line));
    assert!(result.warnings.is_empty());
    assert_eq!(result.effects, vec![effect]);
}

#[test]
fn test_spec_example_command_payload() {
    // The canonical wisp command payload from the engine's command docs.
    let mut reader = StringReader::new(" 1.00 1.00 0.00 0.00 1.00 true");
    let params = parse_wisp_payload(&mut reader).unwrap();
    assert_eq!(params, WispParams::new(1.0, 1.0, 0.0, 0.0));
    assert!(!reader.can_read());
}

#[test]
fn test_registry_is_shareable_across_threads() {
    // Records and the registry are plain immutable values; lookups from
    // multiple threads need no synchronization.
    let registry = std::sync::Arc::new(ParticleRegistry::with_builtin());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                let line = format!("wispfx:wisp {i}.00 1.00 0.00 0.00 1.00");
                registry.parse_command(&line).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join().unwrap() {
            ParticleEffect::Wisp(params) => assert_eq!(params.size, i as f32),
        }
    }
}
