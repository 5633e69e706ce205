// ============================================================================
// NOTIFICATION STORE - Avisos no bloqueantes (reemplazan alert())
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationStore {
    pub notices: Vec<Notice>,
}

pub enum NotificationAction {
    Push(Notice),
    Dismiss(String),
}

/// Máximo de avisos visibles; los más antiguos se descartan
pub const MAX_VISIBLE_NOTICES: usize = 4;

impl Reducible for NotificationStore {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut notices = self.notices.clone();
        match action {
            NotificationAction::Push(notice) => {
                notices.push(notice);
                if notices.len() > MAX_VISIBLE_NOTICES {
                    let overflow = notices.len() - MAX_VISIBLE_NOTICES;
                    notices.drain(..overflow);
                }
            }
            NotificationAction::Dismiss(id) => {
                if !notices.iter().any(|n| n.id == id) {
                    return self;
                }
                notices.retain(|n| n.id != id);
            }
        }
        Rc::new(Self { notices })
    }
}
