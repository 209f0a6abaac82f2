use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::ChatMessage;

/// Checked in order; the first keyword found in the message wins.
pub const TOPIC_REPLIES: [(&str, &str); 6] = [
    (
        "kidney",
        "For kidney health, drink plenty of water, avoid excessive salt, and manage your blood pressure.",
    ),
    (
        "heart",
        "For heart health, maintain a healthy diet, exercise regularly, and monitor your cholesterol levels.",
    ),
    (
        "liver",
        "For liver health, avoid alcohol, eat a balanced diet, and stay hydrated.",
    ),
    (
        "diabetes",
        "For diabetes management, maintain a healthy diet, exercise daily, and check your blood sugar levels.",
    ),
    (
        "exercise",
        "Regular physical activity, like walking or yoga, can help improve overall health.",
    ),
    (
        "diet",
        "A balanced diet rich in vegetables, fruits, and whole grains is beneficial for overall health.",
    ),
];

pub const GENERIC_REPLIES: [&str; 4] = [
    "I'm here to help with your health concerns!",
    "Please provide details about your symptoms.",
    "I recommend consulting a doctor for further analysis.",
    "Stay hydrated and maintain a balanced diet!",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    pub fn new() -> Self {
        Self
    }

    /// Topic reply for the first matching keyword, otherwise a generic reply
    /// drawn from `rng`. Only the fallback path is non-deterministic.
    pub fn respond<R: Rng + ?Sized>(&self, message: &ChatMessage, rng: &mut R) -> &'static str {
        if let Some(reply) = self.match_topic(message) {
            return reply;
        }

        GENERIC_REPLIES
            .choose(rng)
            .copied()
            .unwrap_or(GENERIC_REPLIES[0])
    }

    pub fn match_topic(&self, message: &ChatMessage) -> Option<&'static str> {
        let lowered = message.text.to_lowercase();
        TOPIC_REPLIES
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, reply)| *reply)
    }
}
