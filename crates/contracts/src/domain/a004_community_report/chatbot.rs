use serde::{Deserialize, Serialize};

use crate::enums::Trend;

/// Weekly volume of a chatbot conversation intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotIntent {
    pub intent: String,
    pub count: u32,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopQuestion {
    pub question: String,
    pub count: u32,
}

/// Share of the largest intent, used to size the bar
pub fn intent_share(intent: &ChatbotIntent, intents: &[ChatbotIntent]) -> u8 {
    let max = intents.iter().map(|i| i.count).max().unwrap_or(0);
    if max == 0 {
        return 0;
    }
    ((u64::from(intent.count) * 100) / u64::from(max)).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(count: u32) -> ChatbotIntent {
        ChatbotIntent {
            intent: "Prevention Tips".into(),
            count,
            trend: Trend::Up,
        }
    }

    #[test]
    fn test_intent_share() {
        let intents = vec![intent(156), intent(78), intent(0)];
        assert_eq!(intent_share(&intents[0], &intents), 100);
        assert_eq!(intent_share(&intents[1], &intents), 50);
        assert_eq!(intent_share(&intents[2], &intents), 0);
        assert_eq!(intent_share(&intent(0), &[intent(0)]), 0);
    }
}
