use motio_io_core::{Origin, SpanStream, Stream, StreamError};

/// it should round-trip bytes written at position 0
#[test]
fn write_seek_read_round_trip() {
    let mut storage = [0u8; 16];
    let mut stream = SpanStream::new(&mut storage);
    assert!(stream.opened());
    assert_eq!(stream.size(), 0);

    assert_eq!(stream.write(b"motion"), 6);
    assert_eq!(stream.size(), 6);
    assert_eq!(stream.tell().unwrap(), 6);

    stream.seek(0, Origin::Set).unwrap();
    let mut out = [0u8; 6];
    assert_eq!(stream.read(&mut out), 6);
    assert_eq!(&out, b"motion");
    assert_eq!(stream.tell().unwrap(), 6);
}

/// it should report a short write once the fixed capacity is exhausted
#[test]
fn short_write_at_capacity() {
    let mut storage = [0u8; 5];
    let mut stream = SpanStream::new(&mut storage);
    assert_eq!(stream.write(b"abc"), 3);
    assert_eq!(stream.write(b"defg"), 2);
    assert_eq!(stream.tell().unwrap(), 5);
    assert_eq!(stream.size(), 5);
    assert_eq!(stream.write(b"h"), 0);
    assert_eq!(stream.tell().unwrap(), 5);
    assert_eq!(stream.as_bytes(), b"abcde");
}

/// it should stop reads at the logical end, not at capacity
#[test]
fn read_stops_at_end() {
    let mut storage = [0xAAu8; 32];
    let mut stream = SpanStream::new(&mut storage);
    stream.write(b"0123");
    stream.rewind().unwrap();

    let mut out = [0u8; 10];
    assert_eq!(stream.read(&mut out), 4);
    assert_eq!(&out[..4], b"0123");
    assert_eq!(stream.read(&mut out), 0);
    assert_eq!(stream.remaining(), 0);
}

/// it should honour all three seek origins
#[test]
fn seek_origins() {
    let mut storage = [0u8; 16];
    let mut stream = SpanStream::new(&mut storage);
    stream.write(b"0123456789");

    stream.seek(-3, Origin::End).unwrap();
    assert_eq!(stream.tell().unwrap(), 7);

    stream.seek(-2, Origin::Current).unwrap();
    assert_eq!(stream.tell().unwrap(), 5);

    stream.seek(1, Origin::Set).unwrap();
    let mut out = [0u8; 2];
    stream.read(&mut out);
    assert_eq!(&out, b"12");
}

/// it should reject seeks before 0 or past capacity and keep the cursor
#[test]
fn seek_out_of_range_keeps_position() {
    let mut storage = [0u8; 8];
    let mut stream = SpanStream::new(&mut storage);
    stream.write(b"abc");

    let err = stream.seek(-4, Origin::Current).unwrap_err();
    assert!(matches!(err, StreamError::OutOfRange { target: -1, limit: 8 }));
    assert_eq!(stream.tell().unwrap(), 3);

    assert!(stream.seek(9, Origin::Set).is_err());
    assert_eq!(stream.tell().unwrap(), 3);

    // Exactly at capacity is a valid position.
    stream.seek(8, Origin::Set).unwrap();
    assert_eq!(stream.write(b"z"), 0);
}

/// it should keep the logical size when overwriting existing content
#[test]
fn overwrite_does_not_shrink() {
    let mut storage = [0u8; 8];
    let mut stream = SpanStream::new(&mut storage);
    stream.write(b"abcdef");
    stream.seek(2, Origin::Set).unwrap();
    stream.write(b"ZZ");
    assert_eq!(stream.size(), 6);
    assert_eq!(stream.as_bytes(), b"abZZef");
}

/// it should zero-fill the gap left by seeking past the end before writing
#[test]
fn gap_after_seek_reads_as_zero() {
    let mut storage = [0xFFu8; 10];
    let mut stream = SpanStream::new(&mut storage);
    stream.write(b"ab");
    stream.seek(3, Origin::End).unwrap();
    assert_eq!(stream.size(), 2);
    stream.write(b"c");
    assert_eq!(stream.size(), 6);
    assert_eq!(stream.as_bytes(), &[b'a', b'b', 0, 0, 0, b'c']);
}

/// it should expose stale bytes neither after truncate nor after re-extending
#[test]
fn truncate_then_extend_hides_stale_tail() {
    let mut storage = [0u8; 12];
    let mut stream = SpanStream::new(&mut storage);
    stream.write(b"abcdefgh");
    stream.truncate(4);
    assert_eq!(stream.size(), 4);
    assert_eq!(stream.tell().unwrap(), 4);

    stream.seek(2, Origin::End).unwrap();
    stream.write(b"X");
    assert_eq!(stream.as_bytes(), &[b'a', b'b', b'c', b'd', 0, 0, b'X']);
}

#[test]
fn empty_span_is_opened_but_holds_nothing() {
    let mut storage: [u8; 0] = [];
    let mut stream = SpanStream::new(&mut storage);
    assert!(stream.opened());
    assert_eq!(stream.capacity(), 0);
    assert_eq!(stream.write(b"x"), 0);
    assert!(stream.seek(0, Origin::End).is_ok());
    assert!(stream.seek(1, Origin::Set).is_err());
}

#[test]
fn exact_helpers_report_short_transfers() {
    let mut storage = [0u8; 4];
    let mut stream = SpanStream::new(&mut storage);
    assert!(!stream.write_all_bytes(b"12345"));
    stream.rewind().unwrap();
    let mut out = [0u8; 4];
    assert!(stream.read_exact_bytes(&mut out));
    assert_eq!(&out, b"1234");
    assert!(!stream.read_exact_bytes(&mut out));
}
