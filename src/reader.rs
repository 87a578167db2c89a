use crate::{
    classify::{is_continuation_byte, REPLACEMENT_CHARACTER},
    error::Result,
    unit::Unit,
    Codepoint,
};
use std::{
    io::{ErrorKind, Read},
    iter::FusedIterator,
};

/// Decodes UTF-8 from a reader one codepoint at a time.
///
/// Reads byte by byte and never past the end of the current group, so it can be
/// wrapped around a stream that carries other data after the text. Wrap the reader
/// in a `BufReader` when it is expensive to read from. Malformed groups are yielded as
/// U+FFFD; I/O failures are yielded as [`Error::Io`](crate::Error::Io) and end the
/// iteration.
#[derive(Debug)]
pub struct Utf8Reader<R> {
    inner: R,
    pending: Option<u8>,
    offset: u64,
    done: bool,
}

impl<R: Read> Utf8Reader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Utf8Reader {
            inner,
            pending: None,
            offset: 0,
            done: false,
        }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the wrapped reader. A byte that was read but not yet decoded is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(buf[0]));
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn unread_byte(&mut self, byte: u8) {
        self.pending = Some(byte);
        self.offset -= 1;
    }

    fn read_codepoint(&mut self) -> Result<Option<Codepoint>> {
        let start = self.offset;
        let lead = match self.read_byte()? {
            Some(lead) => lead,
            None => return Ok(None),
        };
        let need = match lead {
            0x00..=0x7F => return Ok(Some(Codepoint::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 1,
        };
        let mut buf = [lead, 0, 0, 0];
        let mut len = 1;
        while len < need {
            match self.read_byte()? {
                Some(byte) if is_continuation_byte(byte) => {
                    buf[len] = byte;
                    len += 1;
                }
                Some(byte) => {
                    self.unread_byte(byte);
                    break;
                }
                None => break,
            }
        }
        let (value, used) = u8::decode(&buf[..len]);
        if let Some(cp) = value {
            if used == need {
                return Ok(Some(cp));
            }
        }
        // the malformed group swallows every continuation byte behind it
        if len == need {
            while let Some(byte) = self.read_byte()? {
                if !is_continuation_byte(byte) {
                    self.unread_byte(byte);
                    break;
                }
            }
        }
        log::trace!("malformed UTF-8 sequence at byte offset {}", start);
        Ok(Some(REPLACEMENT_CHARACTER))
    }
}

impl<R: Read> Iterator for Utf8Reader<R> {
    type Item = Result<Codepoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_codepoint() {
            Ok(Some(cp)) => Some(Ok(cp)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> FusedIterator for Utf8Reader<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, step::codepoints};
    use std::io;

    fn decode_all(input: &[u8]) -> Vec<Codepoint> {
        Utf8Reader::new(input).map(|cp| cp.unwrap()).collect()
    }

    #[test]
    fn test_reader_valid() {
        let text = "testäöü test日本語abc中文Русский 𐑅";
        let expected: Vec<_> = text.chars().map(u32::from).collect();
        assert_eq!(expected, decode_all(text.as_bytes()));
        let mut reader = Utf8Reader::new(text.as_bytes());
        reader.by_ref().for_each(drop);
        assert_eq!(text.len() as u64, reader.offset());
    }

    #[test]
    fn test_reader_agrees_with_slice_decode() {
        let inputs: [&[u8]; 6] = [
            &[0x61, 0xC0, 0xAF, 0x62],
            &[0xE0, 0x80, 0xAF, 0x80, 0x63],
            &[0x80, 0xBF, 0x41],
            &[0xE6, 0x97, 0x41, 0xFF],
            &[0xF0, 0x9F, 0x98],
            &[0xC3, 0xA4, 0x80, 0x80, 0xED, 0xA0, 0x80],
        ];
        for input in inputs {
            let expected: Vec<_> = codepoints(input).collect();
            assert_eq!(expected, decode_all(input), "{:x?}", input);
        }
    }

    #[test]
    fn test_reader_stops_at_group_end() {
        let input = "ä".as_bytes().iter().chain(b"rest").copied().collect::<Vec<_>>();
        let mut cursor = io::Cursor::new(input);
        let mut reader = Utf8Reader::new(&mut cursor);
        assert_eq!(0xE4, reader.next().unwrap().unwrap());
        drop(reader);
        let mut rest = String::new();
        cursor.read_to_string(&mut rest).unwrap();
        assert_eq!("rest", rest);
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_reader_io_error() {
        let mut reader = Utf8Reader::new(Failing);
        assert!(matches!(reader.next(), Some(Err(Error::Io(_)))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reader_fused() {
        fn assert_fused<I: FusedIterator>(_: &I) {}

        let mut reader = Utf8Reader::new(&b"a\xFF"[..]);
        assert_fused(&reader);
        assert_eq!(Some(0x61), reader.next().transpose().unwrap());
        assert_eq!(Some(REPLACEMENT_CHARACTER), reader.next().transpose().unwrap());
        for _ in 0..3 {
            assert!(reader.next().is_none());
        }

        let mut reader = Utf8Reader::new(Failing).fuse();
        assert!(matches!(reader.next(), Some(Err(Error::Io(_)))));
        for _ in 0..3 {
            assert!(reader.next().is_none());
        }
    }
}
