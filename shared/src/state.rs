use std::future::Future;
use std::time::Duration;

use strum_macros::AsRefStr;

use crate::session::Session;
use crate::{ActivityCatalog, Teacher};

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Waits [`NOTICE_TTL`] on the front end's timer, then dismisses notice `id`.
///
/// A newer notice has a different id, so it survives this dismissal.
pub async fn dismiss_after<F, Fut, D>(id: u64, sleep: F, dispatch: &D)
where
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
    D: Fn(AppAction),
{
    sleep(NOTICE_TTL).await;
    dispatch(AppAction::NoticeDismissed(id));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActivityList {
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SessionOpened { token: String, teacher: Teacher },
    SessionCleared,
    ActivitiesLoaded(ActivityCatalog),
    ActivitiesFailed,
    NoticeShown { kind: NoticeKind, text: String },
    NoticeDismissed(u64),
    LoginModalOpened,
    LoginModalClosed,
    LoginFormEdited(LoginForm),
    LoginFormReset,
    SignupFormEdited(SignupForm),
    SignupFormReset,
}

impl AppAction {
    pub fn success(text: impl Into<String>) -> Self {
        Self::NoticeShown {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::NoticeShown {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the page shows. `apply` is the only way it changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub session: Session,
    pub activities: ActivityList,
    /// Options of the activity selector, rebuilt only by a successful fetch.
    pub activity_options: Vec<String>,
    pub notice: Option<Notice>,
    pub login_modal_open: bool,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    next_notice_id: u64,
}

impl AppState {
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SessionOpened { token, teacher } => {
                self.session = Session::Authenticated { token, teacher };
            }
            AppAction::SessionCleared => {
                self.session = Session::Anonymous;
            }
            AppAction::ActivitiesLoaded(catalog) => {
                self.activity_options = catalog.names();
                if !self.activity_options.contains(&self.signup_form.activity) {
                    self.signup_form.activity.clear();
                }
                self.activities = ActivityList::Loaded(catalog);
            }
            AppAction::ActivitiesFailed => {
                self.activities = ActivityList::Failed;
            }
            AppAction::NoticeShown { kind, text } => {
                self.next_notice_id += 1;
                self.notice = Some(Notice {
                    id: self.next_notice_id,
                    kind,
                    text,
                });
            }
            AppAction::NoticeDismissed(id) => {
                if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
                    self.notice = None;
                }
            }
            AppAction::LoginModalOpened => {
                if !self.session.is_authenticated() {
                    self.login_modal_open = true;
                }
            }
            AppAction::LoginModalClosed => {
                self.login_modal_open = false;
            }
            AppAction::LoginFormEdited(form) => {
                self.login_form = form;
            }
            AppAction::LoginFormReset => {
                self.login_form = LoginForm::default();
            }
            AppAction::SignupFormEdited(form) => {
                self.signup_form = form;
            }
            AppAction::SignupFormReset => {
                self.signup_form = SignupForm::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActivityDetails;

    fn catalog(names: &[&str]) -> ActivityCatalog {
        names
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    ActivityDetails {
                        description: String::new(),
                        schedule: String::new(),
                        max_participants: 10,
                        participants: vec![],
                    },
                )
            })
            .collect()
    }

    #[test]
    fn notice_dismissal_only_clears_matching_notice() {
        let mut state = AppState::default();
        state.apply(AppAction::success("first"));
        let first = state.notice.as_ref().unwrap().id;
        state.apply(AppAction::error("second"));
        let second = state.notice.as_ref().unwrap().id;
        assert_ne!(first, second);

        state.apply(AppAction::NoticeDismissed(first));
        assert_eq!(state.notice.as_ref().map(|n| n.text.as_str()), Some("second"));

        state.apply(AppAction::NoticeDismissed(second));
        assert_eq!(state.notice, None);
    }

    #[test]
    fn login_modal_stays_closed_while_authenticated() {
        let mut state = AppState::default();
        state.apply(AppAction::SessionOpened {
            token: "abc".to_owned(),
            teacher: Teacher::default(),
        });
        state.apply(AppAction::LoginModalOpened);
        assert!(!state.login_modal_open);

        state.apply(AppAction::SessionCleared);
        state.apply(AppAction::LoginModalOpened);
        assert!(state.login_modal_open);
    }

    #[test]
    fn failed_fetch_keeps_previous_selector_options() {
        let mut state = AppState::default();
        state.apply(AppAction::ActivitiesLoaded(catalog(&["Chess Club", "Art Club"])));
        state.apply(AppAction::ActivitiesFailed);
        assert_eq!(state.activities, ActivityList::Failed);
        assert_eq!(state.activity_options, vec!["Chess Club", "Art Club"]);
    }

    #[test]
    fn reload_drops_selection_of_vanished_activity() {
        let mut state = AppState::default();
        state.apply(AppAction::ActivitiesLoaded(catalog(&["Chess Club", "Art Club"])));
        state.apply(AppAction::SignupFormEdited(SignupForm {
            email: "a@b.com".to_owned(),
            activity: "Art Club".to_owned(),
        }));

        state.apply(AppAction::ActivitiesLoaded(catalog(&["Chess Club", "Art Club"])));
        assert_eq!(state.signup_form.activity, "Art Club");

        state.apply(AppAction::ActivitiesLoaded(catalog(&["Chess Club"])));
        assert_eq!(state.signup_form.activity, "");
        assert_eq!(state.signup_form.email, "a@b.com");
    }

    #[test]
    fn notice_kind_renders_as_css_class() {
        assert_eq!(NoticeKind::Success.as_ref(), "success");
        assert_eq!(NoticeKind::Error.as_ref(), "error");
    }
}
