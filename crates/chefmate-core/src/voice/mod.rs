//! Voice command handling: intent classification, assistant forwarding, and
//! the dispatcher tying both to a cooking session.

pub mod assistant;
pub mod dispatcher;
pub mod intent;

pub use assistant::{AssistantBackend, AssistantReply, HttpAssistant};
pub use dispatcher::{
    Feedback, VoiceDispatcher, ASSISTANT_UNAVAILABLE_MESSAGE, POLITE_MESSAGE,
};
pub use intent::Intent;
