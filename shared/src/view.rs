//! Pure mapping from [`AppState`] to a description of the page.
//!
//! Front ends draw a [`PageView`] as-is; they never consult the session
//! directly, so auth gating is decided here once.

use crate::state::{ActivityList, AppState, LoginForm, Notice, SignupForm};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_MESSAGE: &str = "No participants yet";
pub const ACTIVITY_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub authenticated: bool,
    /// Empty while anonymous.
    pub teacher_name: String,
    pub logout_visible: bool,
    pub signup_enabled: bool,
    pub login_modal_open: bool,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub activities: ActivitiesView,
    pub activity_options: Vec<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivitiesView {
    Loading,
    Failed { message: &'static str },
    Loaded(Vec<ActivityCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    /// Only rendered for an authenticated viewer.
    pub removal: Option<RemovalTarget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

pub fn render(state: &AppState) -> PageView {
    let authenticated = state.session.is_authenticated();
    let teacher_name = state
        .session
        .teacher()
        .map(|teacher| teacher.name.clone())
        .unwrap_or_default();

    let activities = match &state.activities {
        ActivityList::Loading => ActivitiesView::Loading,
        ActivityList::Failed => ActivitiesView::Failed {
            message: LOAD_FAILURE_MESSAGE,
        },
        ActivityList::Loaded(catalog) => ActivitiesView::Loaded(
            catalog
                .iter()
                .map(|activity| ActivityCard {
                    name: activity.name.clone(),
                    description: activity.details.description.clone(),
                    schedule: activity.details.schedule.clone(),
                    spots_left: activity.spots_left(),
                    participants: activity
                        .details
                        .participants
                        .iter()
                        .map(|email| ParticipantRow {
                            email: email.clone(),
                            removal: authenticated.then(|| RemovalTarget {
                                activity: activity.name.clone(),
                                email: email.clone(),
                            }),
                        })
                        .collect(),
                })
                .collect(),
        ),
    };

    PageView {
        authenticated,
        teacher_name,
        logout_visible: authenticated,
        signup_enabled: authenticated,
        login_modal_open: state.login_modal_open && !authenticated,
        login_form: state.login_form.clone(),
        signup_form: state.signup_form.clone(),
        activities,
        activity_options: state.activity_options.clone(),
        notice: state.notice.clone(),
    }
}
