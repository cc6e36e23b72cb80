#![allow(dead_code)]

use std::cell::RefCell;

use async_trait::async_trait;
use shared::api::{ActivitiesApi, ApiError};
use shared::session::{StorageError, TokenStore};
use shared::state::{AppAction, AppState};
use shared::{
    ActivityCatalog, ActivityDetails, LoginRequest, LoginResponse, MessageResponse, Teacher,
};

/// A request the fake service received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Check { token: String },
    Login { username: String, password: String },
    Logout { token: String },
    ListActivities,
    Signup { token: String, activity: String, email: String },
    Unregister { token: String, activity: String, email: String },
}

/// In-process stand-in for the activities service. Every response is
/// scripted up front; every request is recorded.
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub check: Result<Teacher, ApiError>,
    pub login: Result<LoginResponse, ApiError>,
    pub logout: Result<(), ApiError>,
    pub activities: RefCell<Result<ActivityCatalog, ApiError>>,
    pub signup: Result<MessageResponse, ApiError>,
    pub unregister: Result<MessageResponse, ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            check: Ok(teacher()),
            login: Ok(LoginResponse {
                token: "fresh-token".to_owned(),
                name: "Ms. Rodriguez".to_owned(),
                username: Some("mrodriguez".to_owned()),
            }),
            logout: Ok(()),
            activities: RefCell::new(Ok(sample_catalog())),
            signup: Ok(MessageResponse {
                message: "Signed up a@b.com for Chess Club".to_owned(),
            }),
            unregister: Ok(MessageResponse {
                message: "Unregistered michael@mergington.edu from Chess Club".to_owned(),
            }),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for FakeApi {
    async fn check_session(&self, token: &str) -> Result<Teacher, ApiError> {
        self.record(Call::Check {
            token: token.to_owned(),
        });
        self.check.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login {
            username: request.username.clone(),
            password: request.password.clone(),
        });
        self.login.clone()
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.record(Call::Logout {
            token: token.to_owned(),
        });
        self.logout.clone()
    }

    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.record(Call::ListActivities);
        self.activities.borrow().clone()
    }

    async fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record(Call::Signup {
            token: token.to_owned(),
            activity: activity.to_owned(),
            email: email.to_owned(),
        });
        self.signup.clone()
    }

    async fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record(Call::Unregister {
            token: token.to_owned(),
            activity: activity.to_owned(),
            email: email.to_owned(),
        });
        self.unregister.clone()
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    pub token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_owned())),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Applies dispatched actions to a state, the way a front end would.
#[derive(Default)]
pub struct Page {
    pub state: RefCell<AppState>,
    pub actions: RefCell<Vec<AppAction>>,
}

impl Page {
    pub fn dispatcher(&self) -> impl Fn(AppAction) + '_ {
        move |action: AppAction| {
            self.actions.borrow_mut().push(action.clone());
            self.state.borrow_mut().apply(action);
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }
}

pub fn teacher() -> Teacher {
    Teacher {
        name: "Ms. Rodriguez".to_owned(),
        username: Some("mrodriguez".to_owned()),
    }
}

pub fn details(max_participants: i64, participants: &[&str]) -> ActivityDetails {
    ActivityDetails {
        description: "Learn strategies and compete in chess tournaments".to_owned(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn sample_catalog() -> ActivityCatalog {
    ActivityCatalog::from_iter([
        (
            "Chess Club".to_owned(),
            details(12, &["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_owned(),
            details(20, &["emma@mergington.edu"]),
        ),
    ])
}

pub fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected {
        status,
        detail: Some(detail.to_owned()),
    }
}
