//! Two-step delete confirmation for one person row.
//!
//! The first click only arms the control; the second sends the delete. While
//! the request is in flight the control ignores input.
//!
//! The dashboard script does not hard-code these rules: it is rendered with
//! [`transition_table`], which is produced by running [`DeleteControl::handle`].

use serde::Serialize;

use pipechat_types::crm::PersonId;

/// Fallback when the server gave no error text.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Prefix of the alert shown when a delete fails.
pub const ALERT_PREFIX: &str = "Failed to delete person: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteState {
    Idle,
    Confirming,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteEvent {
    Click,
    Cancel,
    Succeeded,
    /// Delete request failed; carries the server's error text, if any.
    Failed(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteEffect {
    None,
    SendDelete(PersonId),
    RemoveFromList(PersonId),
    Alert(String),
}

impl DeleteEvent {
    fn kind(&self) -> &'static str {
        match self {
            DeleteEvent::Click => "click",
            DeleteEvent::Cancel => "cancel",
            DeleteEvent::Succeeded => "succeeded",
            DeleteEvent::Failed(_) => "failed",
        }
    }
}

impl DeleteEffect {
    fn kind(&self) -> &'static str {
        match self {
            DeleteEffect::None => "none",
            DeleteEffect::SendDelete(_) => "send_delete",
            DeleteEffect::RemoveFromList(_) => "remove_from_list",
            DeleteEffect::Alert(_) => "alert",
        }
    }
}

/// One row of [`transition_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: DeleteState,
    pub event: &'static str,
    pub to: DeleteState,
    pub effect: &'static str,
}

/// Delete control bound to a single person id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteControl {
    person_id: PersonId,
    state: DeleteState,
}

impl DeleteControl {
    pub fn new(person_id: PersonId) -> Self {
        Self {
            person_id,
            state: DeleteState::Idle,
        }
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    /// Whether the control accepts input.
    pub fn is_enabled(&self) -> bool {
        self.state != DeleteState::Deleting
    }

    /// Apply one event, returning the side effect the caller must perform.
    pub fn handle(&mut self, event: DeleteEvent) -> DeleteEffect {
        use DeleteEvent as E;
        use DeleteState as S;

        let (next, effect) = match (self.state, event) {
            (S::Idle, E::Click) => (S::Confirming, DeleteEffect::None),
            (S::Confirming, E::Click) => (S::Deleting, DeleteEffect::SendDelete(self.person_id)),
            (S::Confirming, E::Cancel) => (S::Idle, DeleteEffect::None),
            (S::Deleting, E::Succeeded) => (S::Idle, DeleteEffect::RemoveFromList(self.person_id)),
            (S::Deleting, E::Failed(message)) => (S::Idle, DeleteEffect::Alert(alert_text(message))),
            (state, _) => (state, DeleteEffect::None),
        };

        self.state = next;
        effect
    }
}

fn alert_text(message: Option<String>) -> String {
    let detail = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    format!("{ALERT_PREFIX}{detail}")
}

/// Every transition that changes state or has an effect. Pairs not listed
/// are ignored.
pub fn transition_table() -> Vec<Transition> {
    let states = [DeleteState::Idle, DeleteState::Confirming, DeleteState::Deleting];
    let events = [
        DeleteEvent::Click,
        DeleteEvent::Cancel,
        DeleteEvent::Succeeded,
        DeleteEvent::Failed(None),
    ];

    states
        .iter()
        .flat_map(|&from| events.iter().map(move |event| (from, event.clone())))
        .filter_map(|(from, event)| {
            let mut control = DeleteControl {
                person_id: 0,
                state: from,
            };
            let kind = event.kind();
            let effect = control.handle(event);
            (control.state != from || effect != DeleteEffect::None).then(|| Transition {
                from,
                event: kind,
                to: control.state,
                effect: effect.kind(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_only_arms() {
        let mut control = DeleteControl::new(5);
        assert_eq!(control.handle(DeleteEvent::Click), DeleteEffect::None);
        assert_eq!(control.state(), DeleteState::Confirming);
    }

    #[test]
    fn test_confirm_then_success_removes_row() {
        let mut control = DeleteControl::new(5);
        control.handle(DeleteEvent::Click);

        assert_eq!(control.handle(DeleteEvent::Click), DeleteEffect::SendDelete(5));
        assert_eq!(control.state(), DeleteState::Deleting);
        assert!(!control.is_enabled());

        assert_eq!(
            control.handle(DeleteEvent::Succeeded),
            DeleteEffect::RemoveFromList(5)
        );
        assert_eq!(control.state(), DeleteState::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle_without_request() {
        let mut control = DeleteControl::new(5);
        control.handle(DeleteEvent::Click);
        assert_eq!(control.handle(DeleteEvent::Cancel), DeleteEffect::None);
        assert_eq!(control.state(), DeleteState::Idle);
    }

    #[test]
    fn test_failure_alerts_with_message() {
        let mut control = DeleteControl::new(5);
        control.handle(DeleteEvent::Click);
        control.handle(DeleteEvent::Click);

        let effect = control.handle(DeleteEvent::Failed(Some("Failed to delete person".into())));
        assert_eq!(
            effect,
            DeleteEffect::Alert("Failed to delete person: Failed to delete person".into())
        );
        assert_eq!(control.state(), DeleteState::Idle);
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut control = DeleteControl::new(5);
        control.handle(DeleteEvent::Click);
        control.handle(DeleteEvent::Click);

        assert_eq!(
            control.handle(DeleteEvent::Failed(None)),
            DeleteEffect::Alert("Failed to delete person: Unknown error".into())
        );
    }

    #[test]
    fn test_input_ignored_while_deleting() {
        let mut control = DeleteControl::new(5);
        control.handle(DeleteEvent::Click);
        control.handle(DeleteEvent::Click);

        assert_eq!(control.handle(DeleteEvent::Click), DeleteEffect::None);
        assert_eq!(control.handle(DeleteEvent::Cancel), DeleteEffect::None);
        assert_eq!(control.state(), DeleteState::Deleting);
    }

    #[test]
    fn test_transition_table() {
        let rows: Vec<_> = transition_table()
            .into_iter()
            .map(|t| (t.from, t.event, t.to, t.effect))
            .collect();
        assert_eq!(
            rows,
            vec![
                (DeleteState::Idle, "click", DeleteState::Confirming, "none"),
                (DeleteState::Confirming, "click", DeleteState::Deleting, "send_delete"),
                (DeleteState::Confirming, "cancel", DeleteState::Idle, "none"),
                (DeleteState::Deleting, "succeeded", DeleteState::Idle, "remove_from_list"),
                (DeleteState::Deleting, "failed", DeleteState::Idle, "alert"),
            ]
        );
    }

    #[test]
    fn test_transition_serializes_for_the_browser() {
        let json = serde_json::to_value(&transition_table()[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "confirming",
                "event": "click",
                "to": "deleting",
                "effect": "send_delete",
            })
        );
    }

    #[test]
    fn test_stray_events_in_idle_are_ignored() {
        let mut control = DeleteControl::new(5);
        for event in [DeleteEvent::Cancel, DeleteEvent::Succeeded, DeleteEvent::Failed(None)] {
            assert_eq!(control.handle(event), DeleteEffect::None);
            assert_eq!(control.state(), DeleteState::Idle);
        }
    }
}
