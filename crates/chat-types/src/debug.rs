//! Best-effort digest of the debug payload produced by the multi-agent
//! backend (router decision, specialist drafts, QA report).
//!
//! The payload stays opaque: this view only picks out fields it recognises
//! and ignores everything else, so an unfamiliar backend simply yields no
//! summary.

use std::fmt;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugSummary {
    pub selected_agents: Vec<String>,
    pub clarifying_questions: Vec<String>,
    pub user_intent: Option<String>,
    pub draft_count: Option<usize>,
    pub qa_pass: Option<bool>,
    pub qa_issues: Vec<String>,
}

impl DebugSummary {
    /// Returns `None` when the payload carries none of the known sections.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let router = payload.get("router");
        let qa = payload.get("qa");
        let drafts = payload.get("drafts").and_then(Value::as_array);

        if router.is_none() && qa.is_none() && drafts.is_none() {
            return None;
        }

        Some(Self {
            selected_agents: string_list(router.and_then(|r| r.get("selected_agents"))),
            clarifying_questions: string_list(
                router.and_then(|r| r.get("clarifying_questions")),
            ),
            user_intent: router
                .and_then(|r| r.get("user_intent"))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from),
            draft_count: drafts.map(Vec::len),
            qa_pass: qa.and_then(|q| q.get("pass")).and_then(Value::as_bool),
            qa_issues: string_list(qa.and_then(|q| q.get("issues"))),
        })
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

impl fmt::Display for DebugSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if !self.clarifying_questions.is_empty() {
            parts.push(format!(
                "clarifying: {} question(s)",
                self.clarifying_questions.len()
            ));
        }
        if !self.selected_agents.is_empty() {
            parts.push(format!("agents: {}", self.selected_agents.join(", ")));
        }
        if let Some(n) = self.draft_count {
            parts.push(format!("drafts: {}", n));
        }
        match (self.qa_pass, self.qa_issues.len()) {
            (Some(true), 0) => parts.push("qa: pass".to_string()),
            (Some(true), n) => parts.push(format!("qa: pass ({} issue(s))", n)),
            (Some(false), n) => parts.push(format!("qa: fail ({} issue(s))", n)),
            (None, 0) => {}
            (None, n) => parts.push(format!("qa: {} issue(s)", n)),
        }
        if parts.is_empty() {
            if let Some(intent) = &self.user_intent {
                parts.push(format!("intent: {}", intent));
            }
        }

        write!(f, "{}", parts.join(" | "))
    }
}
