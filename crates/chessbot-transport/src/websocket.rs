//! WebSocket client connection using `tokio-tungstenite`.

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;

use crate::{Connection, TransportError};

type WsStream = tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
>;

/// An outbound WebSocket connection to the game server.
pub struct WebSocketConnection {
    url: String,
    ws: WsStream,
}

impl WebSocketConnection {
    /// Opens a WebSocket connection to `url` (e.g. `ws://localhost:6969`).
    ///
    /// The server completes the handshake; nothing is sent by this call.
    pub async fn connect(url: &str) -> Result<Self, TransportError> {
        let (ws, response) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| TransportError::ConnectFailed {
                url: url.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    e,
                ),
            })?;
        tracing::info!(url, status = %response.status(), "connected");
        Ok(Self {
            url: url.to_string(),
            ws,
        })
    }
}

impl Connection for WebSocketConnection {
    type Error = TransportError;

    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // The server reads binary frames; registration and moves both go
        // out this way.
        let msg = Message::Binary(data.to_vec().into());
        self.ws.send(msg).await.map_err(|e| {
            TransportError::SendFailed(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                e,
            ))
        })
    }

    async fn recv(&mut self) -> Result<Option<Vec<u8>>, Self::Error> {
        loop {
            match self.ws.next().await {
                Some(Ok(Message::Binary(data))) => {
                    return Ok(Some(data.into()));
                }
                Some(Ok(Message::Text(text))) => {
                    return Ok(Some(text.as_bytes().to_vec()));
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::debug!(url = %self.url, ?frame, "close frame");
                    return Ok(None);
                }
                None => return Ok(None),
                Some(Ok(_)) => continue, // skip ping/pong/frame
                Some(Err(e)) => {
                    return Err(TransportError::ReceiveFailed(
                        std::io::Error::new(
                            std::io::ErrorKind::ConnectionReset,
                            e,
                        ),
                    ));
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.ws.close(None).await.map_err(|e| {
            TransportError::ConnectionClosed(e.to_string())
        })
    }

    fn peer(&self) -> &str {
        &self.url
    }
}
