//! Receive/reply loop against the game server.

use std::{
    io::{ErrorKind, Read, Write},
    net::TcpStream,
    thread,
    time::Duration,
};

use log::{debug, info, trace};

use crate::{
    config::EngineConfig,
    engine::Engine,
    game::{Game, Outcome, Response},
    protocol::{self, Command, format_reply},
};

const READ_CHUNK: usize = 1024;

/// One game over a stream to the server.
///
/// Every non-empty read counts as one message for the depth schedule, however
/// many lines it carries. An empty read means nothing has arrived yet and is
/// retried after `idle_backoff`. Bytes are buffered raw and decoded one line
/// at a time.
#[derive(Debug)]
pub struct Session<S> {
    stream: S,
    game: Game,
    messages: usize,
    pending: Vec<u8>,
    idle_backoff: Duration,
}

impl Session<TcpStream> {
    /// Connect to the server named in `config`.
    pub fn connect(config: &EngineConfig) -> crate::Result<Self> {
        config.validate()?;
        if config.port == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "a server port is required".to_string(),
            });
        }

        let address = config.address();
        let stream = TcpStream::connect(&address).map_err(|source| crate::Error::Io {
            operation: format!("connect to {address}"),
            source,
        })?;
        info!("connected to {address}");
        Ok(Self::new(stream, config))
    }
}

impl<S: Read + Write> Session<S> {
    pub fn new(stream: S, config: &EngineConfig) -> Self {
        let game = Game::new(Engine::new(config.seed), config.schedule.clone());
        Self {
            stream,
            game,
            messages: 0,
            pending: Vec::new(),
            idle_backoff: config.idle_backoff(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn messages(&self) -> usize {
        self.messages
    }

    /// Play until the server reports the end of the game.
    pub fn run(&mut self) -> crate::Result<Outcome> {
        let mut buffer = [0u8; READ_CHUNK];
        loop {
            let read = match self.stream.read(&mut buffer) {
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(crate::Error::Io {
                        operation: "read from server".to_string(),
                        source,
                    });
                }
            };
            if read == 0 {
                trace!("empty read, waiting");
                thread::sleep(self.idle_backoff);
                continue;
            }

            self.messages += 1;
            self.pending.extend_from_slice(&buffer[..read]);
            if let Some(outcome) = self.drain_lines()? {
                return Ok(outcome);
            }
        }
    }

    /// Handle every complete line received so far, then the unterminated
    /// remainder if it already holds a whole command.
    fn drain_lines(&mut self) -> crate::Result<Option<Outcome>> {
        while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
            let bytes: Vec<u8> = self.pending.drain(..=end).collect();
            let line = String::from_utf8_lossy(&bytes);
            if let Some(outcome) = self.handle_line(&line)? {
                return Ok(Some(outcome));
            }
        }

        let complete = std::str::from_utf8(&self.pending).is_ok_and(protocol::is_complete);
        if complete {
            let bytes = std::mem::take(&mut self.pending);
            let line = String::from_utf8_lossy(&bytes);
            return self.handle_line(&line);
        }
        Ok(None)
    }

    fn handle_line(&mut self, line: &str) -> crate::Result<Option<Outcome>> {
        trace!("<- {}", line.trim_end());
        let Some(command) = Command::parse(line)? else {
            return Ok(None);
        };
        match self.game.handle(command, self.messages)? {
            Response::Reply(cell) => {
                self.send(&format_reply(cell))?;
                Ok(None)
            }
            Response::Finished(outcome) => Ok(Some(outcome)),
        }
    }

    fn send(&mut self, reply: &str) -> crate::Result<()> {
        debug!("-> {}", reply.trim_end());
        self.stream
            .write_all(reply.as_bytes())
            .and_then(|()| self.stream.flush())
            .map_err(|source| crate::Error::Io {
                operation: "send reply".to_string(),
                source,
            })
    }
}
