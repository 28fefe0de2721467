//! Speech channel and audio playback plumbing.

pub mod channel;
pub mod events;
pub mod playback;

pub use channel::{spawn, SpeechEvent, SpeechHandle};
pub use events::{encode_pcm_frame, ClientSignal, ServerEvent};
pub use playback::PlaybackQueue;
