//! Canned responder content for the simulated bot and the copilot panel.
//!
//! There is no inference anywhere in this crate: the bot cycles through a
//! fixed reply table, and the copilot answers from a small keyword-matched
//! knowledge table with a default fallback. Timing (the "typing" delay)
//! belongs to the host.

/// Replies the simulated bot cycles through, in order.
pub const BOT_REPLIES: [&str; 5] = [
    "I understand your situation. Let me help you with that.",
    "Could you please provide more details?",
    "I'll check that information for you right away.",
    "Thank you for your patience. I'm processing your request.",
    "Is there anything else you need help with?",
];

/// The bot reply for the given turn. Wraps around the table.
#[must_use]
pub fn bot_reply(turn: usize) -> &'static str {
    BOT_REPLIES[turn % BOT_REPLIES.len()]
}

/// A question the copilot panel offers proactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub category: &'static str,
}

const SUGGESTED_QUESTIONS: [SuggestedQuestion; 4] = [
    SuggestedQuestion {
        id: "refund",
        text: "How do I get a refund?",
        category: "billing",
    },
    SuggestedQuestion {
        id: "order-status",
        text: "Where is my order?",
        category: "orders",
    },
    SuggestedQuestion {
        id: "return-policy",
        text: "What is your return policy?",
        category: "billing",
    },
    SuggestedQuestion {
        id: "premium",
        text: "What does the premium package include?",
        category: "sales",
    },
];

/// Questions the copilot panel suggests before the operator types anything.
#[must_use]
pub fn suggested_questions() -> &'static [SuggestedQuestion] {
    &SUGGESTED_QUESTIONS
}

const COPILOT_FALLBACK: &str =
    "I couldn't find a playbook for that. Try rephrasing, or ask about refunds, \
     orders, returns, or the premium package.";

/// Canned copilot answer for a question: first keyword match wins, with a
/// fixed fallback for everything else.
#[must_use]
pub fn copilot_answer(question: &str) -> String {
    let question = question.trim().to_lowercase();
    let answer = if question.contains("refund") {
        "Refunds are issued to the original payment method within 5-7 business days \
         once the return is received. Offer to start the refund from the order page."
    } else if question.contains("order") || question.contains("track") {
        "Order status is available under Orders > Tracking using the order number. \
         If the parcel shows no movement for 48 hours, escalate to the carrier desk."
    } else if question.contains("return") {
        "Items can be returned within 30 days of delivery in their original \
         packaging. Share the prepaid return label from the order page."
    } else if question.contains("premium") {
        "The premium package includes priority support, a dedicated account \
         manager, and the extended analytics suite."
    } else {
        COPILOT_FALLBACK
    };
    answer.to_owned()
}
