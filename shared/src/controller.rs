use crate::api::{ActivitiesApi, ApiError};
use crate::session::{Session, TokenStore};
use crate::state::{AppAction, LoginForm, SignupForm};
use crate::view::RemovalTarget;
use crate::{LoginRequest, Teacher};

pub const SIGNUP_LOGIN_REQUIRED: &str = "Please log in to register students";
pub const UNREGISTER_LOGIN_REQUIRED: &str = "Please log in to unregister students";
pub const GENERIC_FAILURE: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_FAILURE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_TRANSPORT_FAILURE: &str = "Failed to unregister. Please try again.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOGIN_TRANSPORT_FAILURE: &str = "Login failed. Please try again.";
pub const LOGIN_SUCCEEDED: &str = "Logged in successfully!";
pub const LOGOUT_SUCCEEDED: &str = "Logged out successfully";

/// Runs every user-facing operation against the service.
///
/// The controller holds no page state of its own. Each operation receives
/// the session it acts on and reports its outcome as [`AppAction`]s through
/// `dispatch`, in the order they should be applied. Session transitions are
/// mirrored into the [`TokenStore`] before the matching action is emitted.
pub struct Controller<A, S> {
    api: A,
    store: S,
}

impl<A, S> Controller<A, S>
where
    A: ActivitiesApi,
    S: TokenStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restores the persisted session, then loads the activity list.
    pub async fn bootstrap<D: Fn(AppAction)>(&self, dispatch: &D) {
        let stored = self.store.load().unwrap_or_else(|error| {
            log::warn!("Fail to read stored token, starting anonymous. Error={error}");
            None
        });

        match stored {
            Some(token) => match self.api.check_session(&token).await {
                Ok(teacher) => {
                    log::info!("Stored session is valid, teacher={}", teacher.name);
                    dispatch(AppAction::SessionOpened { token, teacher });
                }
                Err(error) => {
                    log::warn!("Stored session rejected, cleaning session. Error={error}");
                    self.close_session(dispatch);
                }
            },
            None => dispatch(AppAction::SessionCleared),
        }

        self.refresh_activities(dispatch).await;
    }

    pub async fn refresh_activities<D: Fn(AppAction)>(&self, dispatch: &D) {
        match self.api.list_activities().await {
            Ok(catalog) => {
                log::debug!("Activities loaded, count={}", catalog.len());
                dispatch(AppAction::ActivitiesLoaded(catalog));
            }
            Err(error) => {
                log::error!("Fail to fetch activities, error={error}");
                dispatch(AppAction::ActivitiesFailed);
            }
        }
    }

    pub async fn login<D: Fn(AppAction)>(&self, form: LoginForm, dispatch: &D) {
        let request = LoginRequest {
            username: form.username,
            password: form.password,
        };
        match self.api.login(&request).await {
            Ok(response) => {
                log::info!("Teacher login successful, username={}", request.username);
                let teacher = Teacher {
                    name: response.name,
                    username: response.username,
                };
                self.open_session(response.token, teacher, dispatch);
                dispatch(AppAction::LoginModalClosed);
                dispatch(AppAction::LoginFormReset);
                self.refresh_activities(dispatch).await;
                dispatch(AppAction::success(LOGIN_SUCCEEDED));
            }
            Err(error) => {
                log::warn!("Login failed, username={}, error={error}", request.username);
                dispatch(AppAction::error(failure_message(
                    &error,
                    INVALID_CREDENTIALS,
                    LOGIN_TRANSPORT_FAILURE,
                )));
            }
        }
    }

    /// Best effort: the server call may fail, the local session is cleared
    /// regardless.
    pub async fn logout<D: Fn(AppAction)>(&self, session: &Session, dispatch: &D) {
        if let Some(token) = session.token() {
            if let Err(error) = self.api.logout(token).await {
                log::error!("Logout request failed, clearing session anyway. Error={error}");
            }
        }
        self.close_session(dispatch);
        self.refresh_activities(dispatch).await;
        dispatch(AppAction::success(LOGOUT_SUCCEEDED));
    }

    pub async fn signup<D: Fn(AppAction)>(&self, session: &Session, form: SignupForm, dispatch: &D) {
        let Some(token) = session.token() else {
            dispatch(AppAction::error(SIGNUP_LOGIN_REQUIRED));
            return;
        };
        match self.api.signup(token, &form.activity, &form.email).await {
            Ok(response) => {
                log::info!(
                    "Student signed up, activity={}, email={}",
                    form.activity,
                    form.email
                );
                dispatch(AppAction::success(response.message));
                dispatch(AppAction::SignupFormReset);
                self.refresh_activities(dispatch).await;
            }
            Err(error) => {
                log::warn!(
                    "Signup failed, activity={}, email={}, error={error}",
                    form.activity,
                    form.email
                );
                dispatch(AppAction::error(failure_message(
                    &error,
                    GENERIC_FAILURE,
                    SIGNUP_TRANSPORT_FAILURE,
                )));
            }
        }
    }

    pub async fn unregister<D: Fn(AppAction)>(
        &self,
        session: &Session,
        target: RemovalTarget,
        dispatch: &D,
    ) {
        let Some(token) = session.token() else {
            dispatch(AppAction::error(UNREGISTER_LOGIN_REQUIRED));
            return;
        };
        match self
            .api
            .unregister(token, &target.activity, &target.email)
            .await
        {
            Ok(response) => {
                log::info!(
                    "Student unregistered, activity={}, email={}",
                    target.activity,
                    target.email
                );
                dispatch(AppAction::success(response.message));
                self.refresh_activities(dispatch).await;
            }
            Err(error) => {
                log::warn!(
                    "Unregister failed, activity={}, email={}, error={error}",
                    target.activity,
                    target.email
                );
                dispatch(AppAction::error(failure_message(
                    &error,
                    GENERIC_FAILURE,
                    UNREGISTER_TRANSPORT_FAILURE,
                )));
            }
        }
    }

    fn open_session<D: Fn(AppAction)>(&self, token: String, teacher: Teacher, dispatch: &D) {
        if let Err(error) = self.store.save(&token) {
            log::warn!("Fail to persist token, session lasts until reload. Error={error}");
        }
        dispatch(AppAction::SessionOpened { token, teacher });
    }

    fn close_session<D: Fn(AppAction)>(&self, dispatch: &D) {
        if let Err(error) = self.store.clear() {
            log::warn!("Fail to remove stored token. Error={error}");
        }
        dispatch(AppAction::SessionCleared);
    }
}

/// Rejections surface the server detail, or `rejected` when there is none;
/// transport and decoding failures surface `transport`.
fn failure_message(error: &ApiError, rejected: &str, transport: &str) -> String {
    match error {
        ApiError::Rejected { detail, .. } => detail.as_deref().unwrap_or(rejected).to_owned(),
        ApiError::Transport(_) | ApiError::Decode(_) => transport.to_owned(),
    }
}
