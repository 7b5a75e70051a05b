use crate::models::{ChatRequest, ChatResponse};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Canned replies, picked uniformly per request.
pub const CHAT_RESPONSES: [&str; 5] = [
    "That's a great idea for your brand! Have you considered using blue tones?",
    "I can help you design a logo that matches that description.",
    "Would you like to try a minimalist style for this?",
    "Tell me more about your target audience.",
    "I've noted that preference. Let's refine your brand guidelines.",
];

pub const CHAT_SENTIMENT: &str = "neutral";

const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Mock chat backend. Waits a fixed delay, then returns one of the canned
/// replies. The RNG is seedable so callers can pin the reply in tests.
pub struct ChatClient {
    rng: Mutex<StdRng>,
    delay: Duration,
}

impl ChatClient {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn respond(&self, request: &ChatRequest) -> ChatResponse {
        log::info!("💬 Chat message: {}", request.message);

        tokio::time::sleep(self.delay).await;

        let index = {
            let mut rng = self.rng.lock().unwrap();
            rng.gen_range(0..CHAT_RESPONSES.len())
        };

        ChatResponse {
            response: CHAT_RESPONSES[index].to_string(),
            sentiment: Some(CHAT_SENTIMENT.to_string()),
        }
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: &str) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            context: None,
            history: None,
        }
    }

    #[tokio::test]
    async fn reply_is_a_member_of_the_canned_set() {
        let client = ChatClient::new().with_delay(Duration::ZERO);
        let response = client.respond(&request("hello")).await;
        assert!(CHAT_RESPONSES.contains(&response.response.as_str()));
        assert_eq!(response.sentiment.as_deref(), Some(CHAT_SENTIMENT));
    }

    #[tokio::test]
    async fn seeded_clients_reply_deterministically() {
        let a = ChatClient::with_seed(7).with_delay(Duration::ZERO);
        let b = ChatClient::with_seed(7).with_delay(Duration::ZERO);

        for _ in 0..10 {
            let ra = a.respond(&request("hi")).await;
            let rb = b.respond(&request("hi")).await;
            assert_eq!(ra.response, rb.response);
        }
    }
}
