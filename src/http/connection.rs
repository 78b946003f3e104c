use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::http::line_reader::LineReader;
use crate::http::parser::read_request;
use crate::http::request::Request;
use crate::http::router;
use crate::http::writer::ResponseWriter;

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: S,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Routing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let request = {
                        let mut reader = LineReader::new(&mut self.stream);
                        read_request(&mut reader).await
                    };
                    debug!("Parsed request: {:?}", request);

                    if request.has_request_line() && !request.is_get() {
                        warn!("Unsupported method {:?}, routing as GET", request.method);
                    }

                    self.state = ConnectionState::Routing(request);
                }

                ConnectionState::Routing(req) => {
                    let response = router::route(req);
                    debug!("Generated response: {:?}", response);

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    let written = writer.write_to_stream(&mut self.stream).await;
                    self.state = ConnectionState::Closed;
                    written?;

                    if let Err(e) = self.stream.shutdown().await {
                        debug!("Error shutting down connection: {}", e);
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
