//! The TCP game server.
//!
//! Each connection carries one command line. The reply is the response
//! text, a newline, an end-of-transmission byte and another newline, after
//! which the server closes the connection. A line that is too long, or
//! that does not arrive in time, closes the connection without a reply.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use wf_engine::GameEngine;

use crate::config::ServeArgs;

const END_OF_TRANSMISSION: char = '\u{4}';
const MAX_LINE_BYTES: u64 = 4096;
const READ_TIMEOUT: Duration = Duration::from_secs(30);

pub fn run(args: &ServeArgs) -> Result<(), String> {
    let engine = GameEngine::new(super::load_world(&args.world)?);
    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    runtime.block_on(async {
        let listener = TcpListener::bind(args.addr())
            .await
            .map_err(|e| format!("cannot listen on {}: {e}", args.addr()))?;
        tracing::info!(addr = %args.addr(), "server listening");
        serve(listener, Arc::new(Mutex::new(engine)), READ_TIMEOUT).await
    })
}

/// Accept connections forever, handling each on its own task.
async fn serve(
    listener: TcpListener,
    engine: Arc<Mutex<GameEngine>>,
    read_timeout: Duration,
) -> Result<(), String> {
    loop {
        let (stream, peer) = listener.accept().await.map_err(|e| e.to_string())?;
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, engine, read_timeout).await {
                tracing::warn!(%peer, error = %e, "connection failed");
            }
        });
    }
}

async fn handle_connection(
    stream: TcpStream,
    engine: Arc<Mutex<GameEngine>>,
    read_timeout: Duration,
) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let line = tokio::time::timeout(read_timeout, read_command(reader))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "no command received"))??;
    let command = line.trim_end_matches(['\r', '\n']);

    let response = {
        let mut engine = engine.lock().await;
        engine.handle_command(command)
    };
    tracing::debug!(command, "handled");

    let reply = format!("{response}\n{END_OF_TRANSMISSION}\n");
    writer.write_all(reply.as_bytes()).await?;
    writer.shutdown().await
}

/// Read one line of at most [`MAX_LINE_BYTES`].
async fn read_command(reader: impl AsyncRead + Unpin) -> io::Result<String> {
    let mut line = String::new();
    let read = BufReader::new(reader.take(MAX_LINE_BYTES))
        .read_line(&mut line)
        .await?;
    if read as u64 == MAX_LINE_BYTES && !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "command line too long",
        ));
    }
    Ok(line)
}
