//! WebSocket speech channel.
//!
//! [`spawn`] runs the channel on a background task: it keeps a connection to
//! the transcription endpoint alive with exponential backoff, streams PCM
//! frames up, and forwards decoded server events to the returned receiver.
//! Dropping the handle (or calling [`SpeechHandle::stop`]) ends the task.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::error::{CompanionError, Result};

use super::events::{encode_pcm_frame, ClientSignal, ServerEvent};

const INITIAL_BACKOFF: Duration = Duration::from_secs(2);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Channel-level event delivered to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// Connection established (also after a reconnect)
    Connected,
    /// Connection lost; the channel is backing off before reconnecting
    Disconnected,
    /// Decoded server event
    Server(ServerEvent),
}

enum Outbound {
    Frame(Vec<i16>),
    Interrupt,
    Stop,
}

/// Client half of a running speech channel.
pub struct SpeechHandle {
    tx: mpsc::Sender<Outbound>,
}

impl SpeechHandle {
    /// Stream one frame of PCM samples to the server.
    pub async fn send_frame(&self, samples: Vec<i16>) -> Result<()> {
        self.send(Outbound::Frame(samples)).await
    }

    /// Tell the server the user spoke over playback.
    pub async fn interrupt(&self) -> Result<()> {
        self.send(Outbound::Interrupt).await
    }

    /// Stop the channel; no reconnect happens after this.
    pub async fn stop(&self) -> Result<()> {
        self.send(Outbound::Stop).await
    }

    async fn send(&self, outbound: Outbound) -> Result<()> {
        self.tx
            .send(outbound)
            .await
            .map_err(|_| CompanionError::speech("speech channel task has stopped"))
    }
}

/// Start the speech channel against the given WebSocket URL.
///
/// Returns the sending handle and the stream of channel events.
pub fn spawn(url: String) -> (SpeechHandle, mpsc::Receiver<SpeechEvent>) {
    let (outbound_tx, outbound_rx) = mpsc::channel(64);
    let (event_tx, event_rx) = mpsc::channel(64);

    tokio::spawn(run(url, outbound_rx, event_tx));

    (SpeechHandle { tx: outbound_tx }, event_rx)
}

async fn run(
    url: String,
    mut outbound: mpsc::Receiver<Outbound>,
    events: mpsc::Sender<SpeechEvent>,
) {
    let mut backoff = INITIAL_BACKOFF;

    loop {
        let stream = match connect_async(url.as_str()).await {
            Ok((stream, _)) => {
                info!("Speech channel connected to {url}");
                backoff = INITIAL_BACKOFF;
                stream
            }
            Err(e) => {
                warn!("Speech channel connect failed, retrying in {backoff:?}: {e}");
                if events.send(SpeechEvent::Disconnected).await.is_err() {
                    return;
                }
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(MAX_BACKOFF);
                continue;
            }
        };

        if events.send(SpeechEvent::Connected).await.is_err() {
            return;
        }

        let (mut sink, mut source) = stream.split();
        let stopped = loop {
            tokio::select! {
                command = outbound.recv() => match command {
                    Some(Outbound::Frame(samples)) => {
                        if let Err(e) = sink.send(Message::Binary(encode_pcm_frame(&samples))).await {
                            warn!("Speech frame send failed: {e}");
                            break false;
                        }
                    }
                    Some(Outbound::Interrupt) => {
                        match serde_json::to_string(&ClientSignal::Interrupt) {
                            Ok(signal) => {
                                if let Err(e) = sink.send(Message::Text(signal)).await {
                                    warn!("Speech interrupt send failed: {e}");
                                    break false;
                                }
                            }
                            Err(e) => warn!("Speech interrupt encode failed: {e}"),
                        }
                    }
                    Some(Outbound::Stop) | None => {
                        let _ = sink.send(Message::Close(None)).await;
                        break true;
                    }
                },
                message = source.next() => match message {
                    Some(Ok(Message::Text(text))) => match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => {
                            if events.send(SpeechEvent::Server(event)).await.is_err() {
                                break true;
                            }
                        }
                        Err(e) => debug!("Ignoring unrecognized speech event: {e}"),
                    },
                    Some(Ok(Message::Close(_))) | None => {
                        warn!("Speech channel closed by server");
                        break false;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Speech channel read failed: {e}");
                        break false;
                    }
                },
            }
        };

        if stopped {
            return;
        }
        if events.send(SpeechEvent::Disconnected).await.is_err() {
            return;
        }
        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}
