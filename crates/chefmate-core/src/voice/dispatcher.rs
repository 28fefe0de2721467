//! Voice command dispatching.
//!
//! Turns a transcribed utterance into navigation calls or an assistant
//! round-trip, producing [`Feedback`] values for the caller to render. The
//! dispatcher never writes session indices itself, it only invokes the
//! session's own operations.

use log::warn;

use crate::models::CompletionRecord;
use crate::session::{CookingSession, NavOutcome};

use super::assistant::{AssistantBackend, AssistantReply};
use super::intent::{self, Intent};

/// Fixed reply for utterances hitting the profanity block-list.
pub const POLITE_MESSAGE: &str =
    "Let's keep the language polite in the kitchen. How can I help with this step?";

/// Fixed fallback shown when the assistant endpoint is unreachable.
pub const ASSISTANT_UNAVAILABLE_MESSAGE: &str =
    "Cannot reach the assistant service right now. Please try again in a moment.";

/// One item of user-visible feedback produced by a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Echo of the recognized utterance, always emitted first
    Heard(String),
    /// Short-lived notification (entered-step, polite reminder, fallback)
    Toast(String),
    /// Answer relayed from the assistant
    Assistant(AssistantReply),
    /// The session finished; carries the record to persist
    SessionFinished(CompletionRecord),
}

/// Dispatches utterances against a cooking session.
pub struct VoiceDispatcher<A> {
    assistant: A,
}

impl<A: AssistantBackend> VoiceDispatcher<A> {
    pub fn new(assistant: A) -> Self {
        Self { assistant }
    }

    /// Handle one transcribed utterance.
    ///
    /// Always emits the "You said" echo first. Blocked utterances get the
    /// polite reminder and go no further. Navigation intents move the
    /// session; everything else is forwarded to the assistant with a
    /// synthesized context, and a network failure there becomes a fixed
    /// fallback toast rather than an error.
    pub async fn dispatch(&self, session: &mut CookingSession, utterance: &str) -> Vec<Feedback> {
        let mut feedback = vec![Feedback::Heard(format!("You said: {utterance}"))];

        if intent::is_blocked(utterance) {
            feedback.push(Feedback::Toast(POLITE_MESSAGE.to_string()));
            return feedback;
        }

        match intent::classify(utterance) {
            Some(Intent::NextStep) => {
                feedback.extend(navigation_feedback(session.advance()));
            }
            Some(Intent::PrevStep) => {
                feedback.extend(navigation_feedback(session.retreat()));
            }
            Some(conversational) => {
                let context = intent_context(conversational, session);
                feedback.push(self.forward(utterance, &context).await);
            }
            None => {
                let context = step_context(session);
                feedback.push(self.forward(utterance, &context).await);
            }
        }

        feedback
    }

    async fn forward(&self, utterance: &str, context: &str) -> Feedback {
        match self.assistant.ask(utterance, context).await {
            Ok(reply) => Feedback::Assistant(reply),
            Err(e) => {
                warn!("Assistant forwarding failed: {e}");
                Feedback::Toast(ASSISTANT_UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }
}

fn navigation_feedback(outcome: NavOutcome) -> Option<Feedback> {
    match outcome {
        NavOutcome::EnteredStep { name, subtitle, .. } => {
            Some(Feedback::Toast(format!("Entered {name}: {subtitle}")))
        }
        NavOutcome::Finished(record) => Some(Feedback::SessionFinished(record)),
        NavOutcome::Moved { .. } | NavOutcome::Ignored => None,
    }
}

/// Context for an utterance with no local intent: embeds where the user is.
fn step_context(session: &CookingSession) -> String {
    let recipe = session.recipe();
    let mut context = format!(
        "You are a cooking assistant. The user is cooking \"{}\".",
        recipe.title
    );
    if let (Some(step), Some(sub_step)) = (session.current_step(), session.current_sub_step()) {
        context.push_str(&format!(
            " They are on {} ({}), {}: {}.",
            step.name,
            step.subtitle,
            sub_step.name,
            sub_step.instructions.join(" ")
        ));
    } else {
        context.push_str(" They have finished all steps.");
    }
    context.push_str(" Answer briefly and practically.");
    context
}

/// Context for a classified conversational intent.
fn intent_context(intent: Intent, session: &CookingSession) -> String {
    let base = step_context(session);
    let guidance = match intent {
        Intent::Confirmation => {
            "The user says the current action is done. Acknowledge and tell them what to do next."
        }
        Intent::Repeat => "The user wants the current instruction repeated. Restate it clearly.",
        Intent::Substitution => {
            "The user is missing an ingredient. Suggest a practical substitute for this recipe."
        }
        Intent::TimeQuestion => {
            "The user is asking about timing. Give a concrete duration or doneness cue."
        }
        Intent::Confusion => {
            "The user does not understand the current instruction. Explain it in simpler words."
        }
        Intent::NextStep | Intent::PrevStep => "",
    };
    format!("{base} {guidance}")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{CompanionError, Result};
    use crate::models::{CookingStep, Recipe, SubStep};

    /// Records ask calls; answers fixed text or fails on demand.
    struct FakeAssistant {
        fail: bool,
        asked: Mutex<Vec<(String, String)>>,
    }

    impl FakeAssistant {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                asked: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AssistantBackend for FakeAssistant {
        async fn ask(&self, user_text: &str, system_content: &str) -> Result<AssistantReply> {
            self.asked
                .lock()
                .unwrap()
                .push((user_text.to_string(), system_content.to_string()));
            if self.fail {
                return Err(CompanionError::assistant("connection refused"));
            }
            Ok(AssistantReply {
                answer: "Use medium heat.".to_string(),
                audio_url: None,
            })
        }

        async fn delete_audio(&self, _filename: &str) -> Result<()> {
            Ok(())
        }
    }

    fn session() -> CookingSession {
        CookingSession::new(Recipe {
            id: "tomato-egg".into(),
            name: "Tomato and Egg Stir-fry".into(),
            title: "Tomato and Egg Stir-fry".into(),
            image: None,
            steps: vec![
                CookingStep {
                    name: "Step 1".into(),
                    subtitle: "Preparation".into(),
                    sub_steps: vec![
                        SubStep {
                            name: "Action 1".into(),
                            instructions: vec!["Dice the tomatoes".into()],
                        },
                        SubStep {
                            name: "Action 2".into(),
                            instructions: vec!["Beat the eggs".into()],
                        },
                    ],
                },
                CookingStep {
                    name: "Step 2".into(),
                    subtitle: "Cooking process".into(),
                    sub_steps: vec![SubStep {
                        name: "Action 1".into(),
                        instructions: vec!["Fry everything together".into()],
                    }],
                },
            ],
        })
    }

    #[tokio::test]
    async fn every_dispatch_echoes_the_utterance_first() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        let feedback = dispatcher.dispatch(&mut session, "继续").await;
        assert_eq!(feedback[0], Feedback::Heard("You said: 继续".to_string()));
    }

    #[tokio::test]
    async fn continue_advances_instead_of_forwarding() {
        let assistant = FakeAssistant::new(false);
        let dispatcher = VoiceDispatcher::new(assistant);
        let mut session = session();
        dispatcher.dispatch(&mut session, "继续").await;
        assert_eq!(session.position(), Some((0, 1)));
        assert!(dispatcher.assistant.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cross_step_advance_emits_entered_step_toast() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        session.advance();
        let feedback = dispatcher.dispatch(&mut session, "next step").await;
        assert!(feedback.iter().any(|f| matches!(
            f,
            Feedback::Toast(t) if t == "Entered Step 2: Cooking process"
        )));
    }

    #[tokio::test]
    async fn unrelated_utterance_is_forwarded_with_step_context() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        let feedback = dispatcher.dispatch(&mut session, "今天天气怎么样").await;

        assert!(feedback
            .iter()
            .any(|f| matches!(f, Feedback::Assistant(r) if r.answer == "Use medium heat.")));
        let asked = dispatcher.assistant.asked.lock().unwrap();
        assert_eq!(asked.len(), 1);
        assert!(asked[0].1.contains("Tomato and Egg Stir-fry"));
        assert!(asked[0].1.contains("Dice the tomatoes"));
    }

    #[tokio::test]
    async fn conversational_intent_gets_dedicated_context() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        dispatcher.dispatch(&mut session, "要煮多久").await;
        let asked = dispatcher.assistant.asked.lock().unwrap();
        assert!(asked[0].1.contains("asking about timing"));
        // no navigation happened
        assert_eq!(session.position(), Some((0, 0)));
    }

    #[tokio::test]
    async fn blocked_utterance_gets_polite_reply_and_nothing_else() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        let feedback = dispatcher.dispatch(&mut session, "妈的").await;

        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback[1], Feedback::Toast(POLITE_MESSAGE.to_string()));
        assert_eq!(session.position(), Some((0, 0)));
        assert!(dispatcher.assistant.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blocked_words_beat_navigation_keywords() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        let feedback = dispatcher.dispatch(&mut session, "妈的，继续").await;

        assert_eq!(feedback[1], Feedback::Toast(POLITE_MESSAGE.to_string()));
        assert_eq!(session.position(), Some((0, 0)));
        assert!(dispatcher.assistant.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn assistant_failure_becomes_fallback_toast() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(true));
        let mut session = session();
        let feedback = dispatcher.dispatch(&mut session, "tell me a story").await;
        assert!(feedback
            .iter()
            .any(|f| matches!(f, Feedback::Toast(t) if t == ASSISTANT_UNAVAILABLE_MESSAGE)));
    }

    #[tokio::test]
    async fn final_advance_reports_session_finished() {
        let dispatcher = VoiceDispatcher::new(FakeAssistant::new(false));
        let mut session = session();
        session.advance();
        session.advance();
        let feedback = dispatcher.dispatch(&mut session, "继续").await;
        assert!(feedback
            .iter()
            .any(|f| matches!(f, Feedback::SessionFinished(r) if r.recipe_id == "tomato-egg")));
        assert!(session.is_completed());
    }
}
