use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::config::NOTIFICATION_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub visible: bool,
}

pub enum NotificationAction {
    Show {
        id: u64,
        kind: NotificationKind,
        message: String,
    },
    /// Auto-hide for the notification with this id.
    Expire(u64),
    /// Explicit close by the user.
    Dismiss,
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show { id, kind, message } => Rc::new(Self {
                id,
                kind,
                message,
                visible: true,
            }),
            NotificationAction::Expire(id) if id == self.id && self.visible => Rc::new(Self {
                visible: false,
                ..(*self).clone()
            }),
            NotificationAction::Dismiss if self.visible => Rc::new(Self {
                visible: false,
                ..(*self).clone()
            }),
            _ => self,
        }
    }
}

/// Handle returned by [`use_notification`].
#[derive(Clone)]
pub struct UseNotificationHandle {
    state: UseReducerHandle<NotificationState>,
    next_id: Rc<Cell<u64>>,
    hide_timer: Rc<RefCell<Option<Timeout>>>,
}

impl UseNotificationHandle {
    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.state.dispatch(NotificationAction::Show {
            id,
            kind,
            message: message.into(),
        });

        let state = self.state.clone();
        let timer = Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
            state.dispatch(NotificationAction::Expire(id));
        });
        // Replacing the handle cancels whatever hide was still pending.
        self.hide_timer.replace(Some(timer));
    }

    pub fn dismiss(&self) {
        self.hide_timer.replace(None);
        self.state.dispatch(NotificationAction::Dismiss);
    }
}

impl PartialEq for UseNotificationHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

#[hook]
pub fn use_notification() -> UseNotificationHandle {
    let state = use_reducer(NotificationState::default);
    let next_id = use_memo(|_| Cell::new(0u64), ());
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    {
        let hide_timer = hide_timer.clone();
        use_unmount(move || {
            hide_timer.replace(None);
        });
    }

    UseNotificationHandle {
        state,
        next_id,
        hide_timer,
    }
}
