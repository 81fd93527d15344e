//! Writer/Reader interplay over in-memory and chunked byte channels.

use std::io::{self, Read};

use ubf_buffers::{BufferError, Reader, Writer};

/// Source that hands out at most one byte per `read` call.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.0.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.0[0];
        self.0 = &self.0[1..];
        Ok(1)
    }
}

#[test]
fn mixed_width_stream() {
    let mut w = Writer::new(Vec::new());
    w.i8(i8::MIN).unwrap();
    w.i16(-1000).unwrap();
    w.i32(i32::MAX).unwrap();
    w.i64(-9_999_999_999).unwrap();
    w.f32(-0.5).unwrap();
    w.f64(f64::MAX).unwrap();
    w.buf("héllo".as_bytes()).unwrap();
    assert_eq!(w.position(), 1 + 2 + 4 + 8 + 4 + 8 + 6);
    let data = w.into_inner();

    let mut r = Reader::new(&data[..]);
    assert_eq!(r.i8().unwrap(), i8::MIN);
    assert_eq!(r.i16().unwrap(), -1000);
    assert_eq!(r.i32().unwrap(), i32::MAX);
    assert_eq!(r.i64().unwrap(), -9_999_999_999);
    assert_eq!(r.f32().unwrap(), -0.5);
    assert_eq!(r.f64().unwrap(), f64::MAX);
    assert_eq!(r.buf(6).unwrap(), "héllo".as_bytes());
    assert_eq!(r.position(), data.len());
    assert!(matches!(r.u8(), Err(BufferError::EndOfBuffer { .. })));
}

#[test]
fn float_bit_patterns_survive() {
    let mut w = Writer::new(Vec::new());
    w.f32(f32::NAN).unwrap();
    w.f64(-0.0).unwrap();
    let data = w.into_inner();

    let mut r = Reader::new(&data[..]);
    assert_eq!(r.f32().unwrap().to_bits(), f32::NAN.to_bits());
    assert_eq!(r.f64().unwrap().to_bits(), (-0.0f64).to_bits());
}

#[test]
fn chunked_source_reads_whole_values() {
    let data = [0x00, 0x00, 0x01, 0x00, 0x61, 0x62, 0x63];
    let mut r = Reader::new(Trickle(&data));
    assert_eq!(r.i32().unwrap(), 256);
    assert_eq!(r.buf(3).unwrap(), b"abc");
    assert_eq!(r.position(), 7);
}

#[test]
fn chunked_source_truncation() {
    let data = [0x61, 0x62];
    let mut r = Reader::new(Trickle(&data));
    match r.buf(5) {
        Err(BufferError::EndOfBuffer { position }) => assert_eq!(position, 2),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn io_errors_are_not_end_of_buffer() {
    let err = BufferError::from_io(io::Error::new(io::ErrorKind::ConnectionReset, "reset"), 3);
    assert!(matches!(err, BufferError::Io(_)));
    let eof = BufferError::from_io(io::ErrorKind::UnexpectedEof.into(), 3);
    assert!(matches!(eof, BufferError::EndOfBuffer { position: 3 }));
    assert_eq!(eof.to_string(), "end of buffer at position 3");
}
