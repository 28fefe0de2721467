//! Wire codec for the speech channel.
//!
//! The server sends JSON-tagged events over the WebSocket; the client sends
//! binary PCM frames (i16 little-endian) plus the occasional JSON signal.

use serde::{Deserialize, Serialize};

/// Event received from the speech server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Transcribed user speech
    Transcript {
        #[serde(default)]
        text: String,
    },
    /// A synthesized audio clip is ready
    Audio {
        #[serde(default)]
        url: String,
    },
    /// The server has finished responding to the last utterance
    EndOfResponse,
    /// Server-side failure
    Error {
        #[serde(default)]
        message: String,
    },
}

/// Signal sent from the client as a JSON text frame.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientSignal {
    /// User spoke over playback; the server should stop the current response
    Interrupt,
}

/// Encode PCM samples as a binary frame.
pub fn encode_pcm_frame(samples: &[i16]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        frame.extend_from_slice(&sample.to_le_bytes());
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_events_decode_from_tagged_json() {
        let event: ServerEvent =
            serde_json::from_str(r#"{"type": "transcript", "text": "继续"}"#).unwrap();
        assert_eq!(
            event,
            ServerEvent::Transcript {
                text: "继续".into()
            }
        );

        let event: ServerEvent =
            serde_json::from_str(r#"{"type": "audio", "url": "/audio/reply_1.mp3"}"#).unwrap();
        assert_eq!(
            event,
            ServerEvent::Audio {
                url: "/audio/reply_1.mp3".into()
            }
        );

        let event: ServerEvent = serde_json::from_str(r#"{"type": "end_of_response"}"#).unwrap();
        assert_eq!(event, ServerEvent::EndOfResponse);
    }

    #[test]
    fn interrupt_signal_serializes_to_type_tag() {
        let json = serde_json::to_string(&ClientSignal::Interrupt).unwrap();
        assert_eq!(json, r#"{"type":"interrupt"}"#);
    }

    #[test]
    fn pcm_frames_are_little_endian() {
        let frame = encode_pcm_frame(&[1, -2, 256]);
        assert_eq!(frame, vec![1, 0, 254, 255, 0, 1]);
    }
}
