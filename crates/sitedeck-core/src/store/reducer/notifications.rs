use crate::store::action::Action;
use crate::store::state::Notification;

pub fn reduce(state: Vec<Notification>, action: &Action) -> Vec<Notification> {
    match action {
        Action::NotificationShown(notification) => {
            let mut next = state;
            next.push(notification.clone());
            next
        }
        Action::NotificationsCleared => Vec::new(),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::NotificationKind;

    fn toast(title: &str) -> Notification {
        Notification {
            kind: NotificationKind::Success,
            title: title.into(),
            message: String::new(),
        }
    }

    #[test]
    fn notifications_accumulate_until_cleared() {
        let state = reduce(Vec::new(), &Action::NotificationShown(toast("one")));
        let state = reduce(state, &Action::NotificationShown(toast("two")));
        assert_eq!(state.len(), 2);

        let state = reduce(state, &Action::NotificationsCleared);
        assert!(state.is_empty());
    }
}
