#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::endpoints::Endpoints;
use shared::{ActivityCatalog, ActivityDetails, LoginRequest, SignupRequest};

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

#[derive(Default)]
struct SchoolData {
    activities: Vec<(String, ActivityDetails)>,
    sessions: HashSet<String>,
    issued: u64,
}

/// Handle on an in-process activities service bound to a random local port.
#[derive(Clone)]
pub struct School {
    pub endpoints: Endpoints,
    data: Arc<Mutex<SchoolData>>,
}

impl School {
    pub fn roster(&self, activity: &str) -> Vec<String> {
        let data = self.data.lock().unwrap();
        data.activities
            .iter()
            .find(|(name, _)| name == activity)
            .map(|(_, details)| details.participants.clone())
            .unwrap_or_default()
    }

    pub fn set_capacity(&self, activity: &str, max_participants: i64) {
        let mut data = self.data.lock().unwrap();
        if let Some((_, details)) = data.activities.iter_mut().find(|(name, _)| name == activity) {
            details.max_participants = max_participants;
        }
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.data.lock().unwrap().sessions.contains(token)
    }
}

fn details(description: &str, max_participants: i64, participants: &[&str]) -> ActivityDetails {
    ActivityDetails {
        description: description.to_owned(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn fail(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": detail })))
}

fn authorize(data: &SchoolData, headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| fail(StatusCode::UNAUTHORIZED, "Authentication required"))?;
    if data.sessions.contains(token) {
        Ok(())
    } else {
        Err(fail(StatusCode::UNAUTHORIZED, "Invalid or expired token"))
    }
}

async fn login(State(data): State<Arc<Mutex<SchoolData>>>, Json(request): Json<LoginRequest>) -> Reply {
    if request.username != "mrodriguez" || request.password != "art123" {
        return Err(fail(StatusCode::UNAUTHORIZED, "Invalid credentials"));
    }
    let mut data = data.lock().unwrap();
    data.issued += 1;
    let token = format!("token-{}", data.issued);
    data.sessions.insert(token.clone());
    Ok(Json(json!({
        "token": token,
        "name": "Ms. Rodriguez",
        "username": "mrodriguez",
    })))
}

async fn check(State(data): State<Arc<Mutex<SchoolData>>>, headers: HeaderMap) -> Reply {
    let data = data.lock().unwrap();
    authorize(&data, &headers)?;
    Ok(Json(json!({
        "authenticated": true,
        "teacher": { "username": "mrodriguez", "name": "Ms. Rodriguez" },
    })))
}

async fn logout(State(data): State<Arc<Mutex<SchoolData>>>, headers: HeaderMap) -> Reply {
    let mut data = data.lock().unwrap();
    if let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        data.sessions.remove(token);
    }
    Ok(Json(json!({ "message": "Logged out successfully" })))
}

async fn list(State(data): State<Arc<Mutex<SchoolData>>>) -> Json<ActivityCatalog> {
    let data = data.lock().unwrap();
    Json(data.activities.iter().cloned().collect())
}

async fn signup(
    State(data): State<Arc<Mutex<SchoolData>>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(request): Json<SignupRequest>,
) -> Reply {
    let mut data = data.lock().unwrap();
    authorize(&data, &headers)?;
    let (_, details) = data
        .activities
        .iter_mut()
        .find(|(activity, _)| *activity == name)
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "Activity not found"))?;
    if details.participants.contains(&request.email) {
        return Err(fail(StatusCode::BAD_REQUEST, "Student is already signed up"));
    }
    if details.participants.len() as i64 >= details.max_participants {
        return Err(fail(StatusCode::BAD_REQUEST, "Activity full"));
    }
    details.participants.push(request.email.clone());
    Ok(Json(json!({
        "message": format!("Signed up {} for {name}", request.email)
    })))
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

async fn unregister(
    State(data): State<Arc<Mutex<SchoolData>>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
    headers: HeaderMap,
) -> Reply {
    let mut data = data.lock().unwrap();
    authorize(&data, &headers)?;
    let (_, details) = data
        .activities
        .iter_mut()
        .find(|(activity, _)| *activity == name)
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "Activity not found"))?;
    let Some(index) = details.participants.iter().position(|p| *p == query.email) else {
        return Err(fail(
            StatusCode::BAD_REQUEST,
            "Student is not signed up for this activity",
        ));
    };
    details.participants.remove(index);
    Ok(Json(json!({
        "message": format!("Unregistered {} from {name}", query.email)
    })))
}

/// Starts a fresh service seeded with two activities.
pub async fn spawn_school() -> anyhow::Result<School> {
    let data = Arc::new(Mutex::new(SchoolData {
        activities: vec![
            (
                "Chess Club".to_owned(),
                details(
                    "Learn strategies and compete in chess tournaments",
                    12,
                    &["michael@mergington.edu", "daniel@mergington.edu"],
                ),
            ),
            (
                "Programming Class".to_owned(),
                details(
                    "Learn programming fundamentals and build software projects",
                    20,
                    &["emma@mergington.edu", "sophia@mergington.edu"],
                ),
            ),
        ],
        ..Default::default()
    }));

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/check", get(check))
        .route("/auth/logout", post(logout))
        .route("/activities", get(list))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .with_state(data.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(School {
        endpoints: Endpoints::parse(&format!("http://{address}"))?,
        data,
    })
}

/// Endpoints pointing at a port nothing listens on.
pub async fn unreachable_endpoints() -> anyhow::Result<Endpoints> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    drop(listener);
    Ok(Endpoints::parse(&format!("http://{address}"))?)
}

/// Token file in its own temp directory, removed on drop.
pub struct ScratchTokenFile {
    dir: PathBuf,
}

impl ScratchTokenFile {
    pub fn path(&self) -> PathBuf {
        self.dir.join("token")
    }
}

impl Drop for ScratchTokenFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub fn scratch_token_file(name: &str) -> ScratchTokenFile {
    let dir = std::env::temp_dir().join(format!(
        "activities-cli-tests-{}-{name}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    ScratchTokenFile { dir }
}
