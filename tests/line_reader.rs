use mysqldump_to_csv::{ConvertError, LineReader};
use std::io::{self, Read};

fn lines(input: &[u8], limit: usize) -> Vec<Result<Vec<u8>, ConvertError>> {
    LineReader::with_max_line_size(input, limit).collect()
}

#[test]
fn test_splits_on_newline_and_strips_crlf() {
    let got = lines(b"a\nb\r\nc", 1024);
    assert_eq!(
        got,
        vec![Ok(b"a".to_vec()), Ok(b"b".to_vec()), Ok(b"c".to_vec())]
    );
}

#[test]
fn test_empty_lines_are_kept() {
    let got = lines(b"\n\nx\n", 1024);
    assert_eq!(got, vec![Ok(vec![]), Ok(vec![]), Ok(b"x".to_vec())]);
}

#[test]
fn test_empty_input() {
    assert!(lines(b"", 1024).is_empty());
}

#[test]
fn test_line_fitting_exactly_with_terminator() {
    // 内容 3 字节 + 换行符，上限 4 字节
    let got = lines(b"abc\nd\n", 4);
    assert_eq!(got, vec![Ok(b"abc".to_vec()), Ok(b"d".to_vec())]);
}

#[test]
fn test_line_too_long_stops_iteration() {
    let got = lines(b"ok\nabcd\nnever\n", 4);
    assert_eq!(
        got,
        vec![
            Ok(b"ok".to_vec()),
            Err(ConvertError::LineTooLong { line: 2, limit: 4 })
        ]
    );
}

#[test]
fn test_short_final_line_without_newline() {
    assert_eq!(lines(b"abc", 4), vec![Ok(b"abc".to_vec())]);
}

#[test]
fn test_full_buffer_without_newline_is_too_long() {
    assert_eq!(
        lines(b"abcd", 4),
        vec![Err(ConvertError::LineTooLong { line: 1, limit: 4 })]
    );
}

#[test]
fn test_line_number_tracks_reads() {
    let mut reader = LineReader::new(&b"one\ntwo\n"[..]);
    assert_eq!(reader.line_number(), 0);
    reader.next();
    assert_eq!(reader.line_number(), 1);
    reader.next();
    assert_eq!(reader.line_number(), 2);
    assert!(reader.next().is_none());
    assert_eq!(reader.line_number(), 2);
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn test_read_error_is_reported_once() {
    let mut reader = LineReader::new(BrokenReader);
    match reader.next() {
        Some(Err(ConvertError::Read(msg))) => assert!(msg.contains("disk on fire")),
        other => panic!("unexpected: {:?}", other),
    }
    assert!(reader.next().is_none());
}
