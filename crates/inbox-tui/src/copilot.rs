//! Copilot side-panel model: open/close state, suggested questions, and the
//! canned question/answer exchange log.

use inbox_core::responder::{copilot_answer, suggested_questions, SuggestedQuestion};

/// One question/answer pair in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopilotExchange {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopilotModel {
    open: bool,
    input: String,
    exchanges: Vec<CopilotExchange>,
}

impl Default for CopilotModel {
    fn default() -> Self {
        Self {
            // The panel starts open, like the original app shell.
            open: true,
            input: String::new(),
            exchanges: Vec::new(),
        }
    }
}

impl CopilotModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_owned();
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Questions offered before the operator types anything.
    #[must_use]
    pub fn suggestions(&self) -> &'static [SuggestedQuestion] {
        suggested_questions()
    }

    #[must_use]
    pub fn exchanges(&self) -> &[CopilotExchange] {
        &self.exchanges
    }

    /// Ask whatever is in the input box. Empty input is a no-op; otherwise
    /// the exchange is recorded and the input cleared.
    pub fn ask(&mut self) -> Option<&CopilotExchange> {
        let question = self.input.trim().to_owned();
        if question.is_empty() {
            return None;
        }
        self.input.clear();
        self.push_exchange(question)
    }

    /// Ask one of the suggested questions by id (a click on its chip).
    pub fn ask_suggested(&mut self, id: &str) -> Option<&CopilotExchange> {
        let question = suggested_questions()
            .iter()
            .find(|suggestion| suggestion.id == id)?
            .text
            .to_owned();
        self.push_exchange(question)
    }

    fn push_exchange(&mut self, question: String) -> Option<&CopilotExchange> {
        let answer = copilot_answer(&question);
        self.exchanges.push(CopilotExchange { question, answer });
        self.exchanges.last()
    }
}

#[cfg(test)]
mod tests {
    use super::CopilotModel;

    #[test]
    fn panel_starts_open_and_toggles() {
        let mut panel = CopilotModel::new();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn ask_records_exchange_and_clears_input() {
        let mut panel = CopilotModel::new();
        panel.set_input("How do I get a refund?");
        let exchange = panel.ask().cloned();
        assert!(exchange.is_some());
        if let Some(exchange) = exchange {
            assert_eq!(exchange.question, "How do I get a refund?");
            assert!(exchange.answer.contains("5-7 business days"));
        }
        assert_eq!(panel.input(), "");
        assert_eq!(panel.exchanges().len(), 1);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut panel = CopilotModel::new();
        panel.set_input("   ");
        assert!(panel.ask().is_none());
        assert!(panel.exchanges().is_empty());
    }

    #[test]
    fn suggested_questions_are_askable_by_id() {
        let mut panel = CopilotModel::new();
        let first = panel.suggestions()[0];
        let exchange = panel.ask_suggested(first.id).cloned();
        assert!(exchange.is_some());
        if let Some(exchange) = exchange {
            assert_eq!(exchange.question, first.text);
        }
        assert!(panel.ask_suggested("no-such-id").is_none());
        assert_eq!(panel.exchanges().len(), 1);
    }
}
