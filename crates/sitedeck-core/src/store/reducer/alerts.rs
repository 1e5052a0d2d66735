use crate::store::action::Action;
use crate::store::state::{Alert, AlertStatus};

/// The alert banner survives exactly one navigation: showing marks it
/// fresh, the first `RouteChanged` marks it stale, the second clears it.
pub fn reduce(state: Option<Alert>, action: &Action) -> Option<Alert> {
    match action {
        Action::AlertShown { message, status } => Some(Alert {
            message: message.clone(),
            status: *status,
            stale: false,
        }),
        Action::AlertDismissed => None,
        Action::RouteChanged => match state {
            Some(alert) if alert.stale => None,
            Some(alert) => Some(Alert { stale: true, ..alert }),
            None => None,
        },
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown() -> Action {
        Action::AlertShown {
            message: "saved".into(),
            status: AlertStatus::Success,
        }
    }

    #[test]
    fn alert_survives_one_route_change_then_clears() {
        let state = reduce(None, &shown());
        let state = reduce(state, &Action::RouteChanged);
        assert!(state.as_ref().is_some_and(|a| a.stale));

        let state = reduce(state, &Action::RouteChanged);
        assert_eq!(state, None);
    }

    #[test]
    fn dismiss_clears_immediately() {
        let state = reduce(None, &shown());
        assert_eq!(reduce(state, &Action::AlertDismissed), None);
    }

    #[test]
    fn http_error_alone_does_not_raise_an_alert() {
        // Inline error handling dispatches HttpError without a
        // matching AlertShown; the banner must stay untouched.
        let state = reduce(
            None,
            &Action::HttpError {
                message: "site name taken".into(),
                key: None,
            },
        );
        assert_eq!(state, None);
    }

    #[test]
    fn route_change_with_no_alert_is_identity() {
        assert_eq!(reduce(None, &Action::RouteChanged), None);
    }
}
