pub mod aggregate;
pub mod chatbot;
pub mod draft;
pub mod seed;

pub use aggregate::{source_counts, CommunityReport};
pub use chatbot::{intent_share, ChatbotIntent, TopQuestion};
pub use draft::ReportDraft;
pub use seed::{chatbot_intents, community_reports, top_questions};
