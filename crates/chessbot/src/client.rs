//! `BotClient` builder and run loop.
//!
//! This is the entry point for running a bot. It ties the layers together:
//! transport → protocol → dispatcher → bot.

use chessbot_protocol::{Codec, JsonCodec};
use chessbot_transport::{Connection, WebSocketConnection};

use crate::{BaseBot, Bot, ChessbotError, Dispatcher, Outbox};

/// Where to connect and what name to register under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server host name or IP address.
    pub address: String,
    /// Server port.
    pub port: u16,
    /// Display name sent in the registration message.
    pub name: String,
}

impl ClientConfig {
    pub const DEFAULT_ADDRESS: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 6969;
    pub const DEFAULT_NAME: &'static str = "base-bot";

    /// The WebSocket URL, `ws://<address>:<port>`.
    pub fn url(&self) -> String {
        format!("ws://{}:{}", self.address, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: Self::DEFAULT_ADDRESS.to_string(),
            port: Self::DEFAULT_PORT,
            name: Self::DEFAULT_NAME.to_string(),
        }
    }
}

/// Builder for configuring and connecting a [`BotClient`].
///
/// # Example
///
/// ```rust,ignore
/// use chessbot::prelude::*;
///
/// let client = BotClient::builder()
///     .port(6969)
///     .name("my-bot")
///     .connect(MyBot::default())
///     .await?;
/// client.run().await
/// ```
#[derive(Debug, Clone, Default)]
pub struct BotClientBuilder {
    config: ClientConfig,
}

impl BotClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server address.
    pub fn address(mut self, address: &str) -> Self {
        self.config.address = address.to_string();
        self
    }

    /// Sets the server port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the name to register under.
    pub fn name(mut self, name: &str) -> Self {
        self.config.name = name.to_string();
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the WebSocket connection and pairs it with `bot`.
    ///
    /// Nothing is sent yet; registration happens at the start of
    /// [`BotClient::run`].
    pub async fn connect<B: Bot>(
        self,
        bot: B,
    ) -> Result<BotClient<B>, ChessbotError> {
        let url = self.config.url();
        tracing::info!(%url, name = %self.config.name, "connecting");
        let conn = WebSocketConnection::connect(&url).await?;

        Ok(BotClient {
            conn,
            dispatcher: Dispatcher::new(self.config.name, bot),
        })
    }
}

/// A connected bot.
///
/// Call [`run()`](Self::run) to register and start playing.
pub struct BotClient<B: Bot = BaseBot> {
    conn: WebSocketConnection,
    dispatcher: Dispatcher<B, JsonCodec>,
}

impl BotClient {
    /// Creates a new builder. The bot type is picked later, by
    /// [`BotClientBuilder::connect`].
    pub fn builder() -> BotClientBuilder {
        BotClientBuilder::new()
    }
}

impl<B: Bot> BotClient<B> {
    /// Registers, then handles server messages until the connection closes.
    ///
    /// Each inbound frame is dispatched and the resulting messages are
    /// sent before the next frame is read. Returns `Ok(())` when the server
    /// closes the connection and an error when the transport fails. There
    /// is no reconnection.
    pub async fn run(mut self) -> Result<(), ChessbotError> {
        let mut out = Outbox::new();

        self.dispatcher.on_connected(&mut out);
        self.flush(&mut out).await?;

        loop {
            let data = match self.conn.recv().await {
                Ok(Some(data)) => data,
                Ok(None) => {
                    tracing::info!(
                        peer = self.conn.peer(),
                        "connection closed by server"
                    );
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!(
                        peer = self.conn.peer(),
                        error = %e,
                        "connection failed"
                    );
                    return Err(e.into());
                }
            };

            self.dispatcher.on_message(&data, &mut out);
            self.flush(&mut out).await?;
        }
    }

    /// Encodes and sends everything queued in `out`.
    async fn flush(&mut self, out: &mut Outbox) -> Result<(), ChessbotError> {
        for msg in out.drain() {
            let bytes = self.dispatcher.codec().encode(&msg)?;
            self.conn.send(&bytes).await?;
        }
        Ok(())
    }
}
