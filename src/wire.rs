//! Binary wire codec for particle effect payloads
//!
//! Payloads are fixed-width and fixed-order with no length prefixes and no
//! versioning; multi-byte values are big-endian, matching the engine's
//! network byte order. The type identifier travels outside the payload, in
//! the replication layer's own framing, so decoding always starts from a
//! known type.

use bytes::{Buf, BufMut};

use crate::models::{ParticleEffect, WispParams};

/// Encoded length of a wisp payload: five f32 fields and two bool bytes.
pub const WISP_PAYLOAD_LEN: usize = 22;

/// Types that write themselves to a wire buffer.
pub trait WireEncode {
    fn encode_wire(&self, buf: &mut dyn BufMut);
}

/// Types that read themselves from a wire buffer.
///
/// Decoding has no error path of its own: malformed input is a
/// transport-layer fault, and a short buffer panics in the buffer itself.
pub trait WireDecode: Sized {
    fn decode_wire(buf: &mut dyn Buf) -> Self;
}

/// Write a bool as a single byte.
pub fn put_bool(buf: &mut dyn BufMut, value: bool) {
    buf.put_u8(value as u8);
}

/// Read a single-byte bool; any non-zero byte is true.
pub fn get_bool(buf: &mut dyn Buf) -> bool {
    buf.get_u8() != 0
}

impl WireEncode for WispParams {
    fn encode_wire(&self, buf: &mut dyn BufMut) {
        buf.put_f32(self.size);
        buf.put_f32(self.r);
        buf.put_f32(self.g);
        buf.put_f32(self.b);
        buf.put_f32(self.max_age_mul);
        put_bool(buf, self.depth_test);
        put_bool(buf, self.no_clip);
    }
}

impl WireDecode for WispParams {
    fn decode_wire(buf: &mut dyn Buf) -> Self {
        Self {
            size: buf.get_f32(),
            r: buf.get_f32(),
            g: buf.get_f32(),
            b: buf.get_f32(),
            max_age_mul: buf.get_f32(),
            depth_test: get_bool(buf),
            no_clip: get_bool(buf),
        }
    }
}

impl WireEncode for ParticleEffect {
    fn encode_wire(&self, buf: &mut dyn BufMut) {
        match self {
            ParticleEffect::Wisp(params) => params.encode_wire(buf),
        }
    }
}
