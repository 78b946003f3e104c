use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

/// Longest line accepted, terminator included.
pub const MAX_LINE_LEN: usize = 8 * 1024;

/// Reads newline-terminated lines from a byte stream, one at a time.
///
/// Each call to [`LineReader::next_line`] suspends until a full line has
/// arrived or the peer closes its side of the connection.
pub struct LineReader<R> {
    inner: BufReader<R>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            inner: BufReader::new(stream),
        }
    }

    /// Returns the next line including its `\n` terminator.
    ///
    /// `Ok(None)` means end of stream. A trailing fragment with no terminator
    /// before EOF is returned as a final line. A line longer than
    /// [`MAX_LINE_LEN`] is an `InvalidData` error.
    pub async fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let n = (&mut self.inner)
            .take(MAX_LINE_LEN as u64)
            .read_until(b'\n', &mut line)
            .await?;

        if n == 0 {
            return Ok(None);
        }

        if n == MAX_LINE_LEN && !line.ends_with(b"\n") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeds {} bytes", MAX_LINE_LEN),
            ));
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn yields_lines_then_eof() {
        let input: &[u8] = b"GET / HTTP/1.1\r\nHost: a\r\n\r\n";
        let mut reader = LineReader::new(input);

        assert_eq!(reader.next_line().await.unwrap().unwrap(), b"GET / HTTP/1.1\r\n");
        assert_eq!(reader.next_line().await.unwrap().unwrap(), b"Host: a\r\n");
        assert_eq!(reader.next_line().await.unwrap().unwrap(), b"\r\n");
        assert!(reader.next_line().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_overlong_line() {
        let input = vec![b'a'; MAX_LINE_LEN + 16];
        let mut reader = LineReader::new(&input[..]);

        let err = reader.next_line().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn accepts_line_at_limit() {
        let mut input = vec![b'a'; MAX_LINE_LEN - 2];
        input.extend_from_slice(b"\r\n");
        let mut reader = LineReader::new(&input[..]);

        let line = reader.next_line().await.unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }
}
