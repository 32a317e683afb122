//! Navigation guard for the form generation flow.
//!
//! Leaving the flow with unsaved work requires confirmation. The guard is a
//! small state machine: a request to leave while the flow is dirty parks in
//! `PendingConfirmation` holding the target route; confirming wipes the flow
//! and performs the deferred navigation, cancelling discards it. Movement
//! between the flow's own steps never prompts.

use std::sync::{Arc, RwLock};

use crate::state::flow::FormFlowState;

/// Routes that make up the generation flow, in step order.
pub const FLOW_ROUTES: [&str; 3] = [
    "/generator/search",
    "/generator/forms",
    "/generator/preview",
];

/// Performs the actual route change.
///
/// Injected so the guard can be exercised without a real navigation stack.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The navigation happened.
    Proceeded,
    /// The navigation is parked until `confirm` or `cancel`.
    NeedsConfirmation,
}

#[derive(Default)]
enum GuardState {
    #[default]
    Idle,
    PendingConfirmation {
        target: String,
    },
}

#[derive(Clone, Default)]
pub struct NavigationGuard {
    state: Arc<RwLock<GuardState>>,
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_flow_route(route: &str) -> bool {
        FLOW_ROUTES.contains(&route)
    }

    /// Requests a navigation from `current` to `target`.
    ///
    /// Prompts only when leaving the flow with unsaved work; everything else
    /// navigates immediately.
    pub fn request(
        &self,
        current: &str,
        target: &str,
        flow: &FormFlowState,
        navigator: &dyn Navigator,
    ) -> NavigationOutcome {
        let leaving_flow = Self::is_flow_route(current) && !Self::is_flow_route(target);
        if leaving_flow && flow.is_dirty() {
            if let Ok(mut state) = self.state.write() {
                *state = GuardState::PendingConfirmation {
                    target: target.to_string(),
                };
            }
            return NavigationOutcome::NeedsConfirmation;
        }
        navigator.navigate(target);
        NavigationOutcome::Proceeded
    }

    /// Confirms a parked navigation: wipes the flow, then navigates.
    pub fn confirm(&self, flow: &FormFlowState, navigator: &dyn Navigator) {
        let target = {
            let Ok(mut state) = self.state.write() else {
                return;
            };
            match std::mem::take(&mut *state) {
                GuardState::PendingConfirmation { target } => target,
                GuardState::Idle => return,
            }
        };
        flow.clear();
        navigator.navigate(&target);
    }

    /// Discards a parked navigation; the user stays where they are.
    pub fn cancel(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = GuardState::Idle;
        }
    }

    /// The route a parked navigation would go to, if any.
    pub fn pending_target(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| match &*state {
            GuardState::PendingConfirmation { target } => Some(target.clone()),
            GuardState::Idle => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn visited(&self) -> Vec<String> {
            self.routes.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str) {
            self.routes.lock().unwrap().push(route.to_string());
        }
    }

    #[test]
    fn test_clean_flow_navigates_freely() {
        let guard = NavigationGuard::new();
        let flow = FormFlowState::new();
        let nav = RecordingNavigator::default();

        let outcome = guard.request("/generator/forms", "/batch", &flow, &nav);
        assert_eq!(outcome, NavigationOutcome::Proceeded);
        assert_eq!(nav.visited(), vec!["/batch".to_string()]);
    }

    #[test]
    fn test_steps_within_the_flow_never_prompt() {
        let guard = NavigationGuard::new();
        let flow = FormFlowState::new();
        flow.toggle_form("FORM-001");
        let nav = RecordingNavigator::default();

        let outcome = guard.request("/generator/forms", "/generator/preview", &flow, &nav);
        assert_eq!(outcome, NavigationOutcome::Proceeded);
        assert!(guard.pending_target().is_none());
    }

    #[test]
    fn test_dirty_exit_parks_until_confirmed() {
        let guard = NavigationGuard::new();
        let flow = FormFlowState::new();
        flow.toggle_form("FORM-001");
        let nav = RecordingNavigator::default();

        let outcome = guard.request("/generator/preview", "/users", &flow, &nav);
        assert_eq!(outcome, NavigationOutcome::NeedsConfirmation);
        assert_eq!(guard.pending_target().as_deref(), Some("/users"));
        assert!(nav.visited().is_empty());

        guard.confirm(&flow, &nav);
        assert_eq!(nav.visited(), vec!["/users".to_string()]);
        assert!(!flow.is_dirty());
        assert!(guard.pending_target().is_none());
    }

    #[test]
    fn test_cancel_keeps_work_and_stays_put() {
        let guard = NavigationGuard::new();
        let flow = FormFlowState::new();
        flow.edit_field("FORM-003", "ContractNo", "C-024099");
        let nav = RecordingNavigator::default();

        guard.request("/generator/preview", "/audit-logs", &flow, &nav);
        guard.cancel();

        assert!(guard.pending_target().is_none());
        assert!(nav.visited().is_empty());
        assert!(flow.is_dirty());
    }

    #[test]
    fn test_confirm_without_pending_is_a_no_op() {
        let guard = NavigationGuard::new();
        let flow = FormFlowState::new();
        flow.toggle_form("FORM-001");
        let nav = RecordingNavigator::default();

        guard.confirm(&flow, &nav);
        assert!(nav.visited().is_empty());
        assert!(flow.is_dirty());
    }

    #[test]
    fn test_entering_the_flow_from_outside_never_prompts() {
        let guard = NavigationGuard::new();
        let flow = FormFlowState::new();
        flow.toggle_form("FORM-001");
        let nav = RecordingNavigator::default();

        let outcome = guard.request("/batch", "/generator/search", &flow, &nav);
        assert_eq!(outcome, NavigationOutcome::Proceeded);
    }
}
