#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get as route_get;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use npo2xml_api::config::ServerConfig;
use npo2xml_api::router::build_app_router;
use npo2xml_api::state::AppState;
use npo2xml_core::channel::{Channel, ChannelCatalog};
use npo2xml_guide::{GuideApi, DEFAULT_USER_AGENT, GUIDE_CHANNEL_PATH};

/// Build a test `ServerConfig` pointing the guide client at `guide_base_url`.
pub fn test_config(guide_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        guide_base_url: guide_base_url.to_string(),
        guide_user_agent: DEFAULT_USER_AGENT.to_string(),
        channels_path: None,
    }
}

pub fn channel(external_id: &str, guid: &str) -> Channel {
    Channel {
        external_id: external_id.to_string(),
        title: external_id.to_uppercase(),
        logo: format!("https://logos.example/{external_id}.png"),
        guid: guid.to_string(),
    }
}

/// Two channels: `npo1.nl` (guid `g1`) then `npo2.nl` (guid `g2`).
pub fn test_catalog() -> ChannelCatalog {
    ChannelCatalog::new(vec![channel("npo1.nl", "g1"), channel("npo2.nl", "g2")])
}

/// Build the full application router against a running fake guide.
pub fn build_test_app(catalog: ChannelCatalog, guide: &FakeGuide) -> Router {
    let config = test_config(&guide.base_url);
    let state = AppState {
        catalog: Arc::new(catalog),
        guide: GuideApi::new(config.guide_base_url.clone(), config.guide_user_agent.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A guide program object in the upstream JSON shape.
pub fn program(guid: &str, title: Option<&str>) -> Value {
    json!({
        "guid": guid,
        "mainTitle": title,
        "synopsis": null,
        "programStart": 1_704_460_029,
        "programEnd": 1_704_461_400,
        "isFiller": false,
        "isLive": false,
        "isRepeat": false,
        "genres": [],
        "images": []
    })
}

/// What the fake guide answers for one request.
#[derive(Clone)]
pub enum FakeDay {
    Json(Value),
    Raw(&'static str),
    Status(StatusCode),
}

/// One request the fake guide received.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideRequest {
    pub date: String,
    pub guid: String,
    pub user_agent: String,
}

#[derive(Clone, Default)]
struct FakeGuideState {
    /// Per channel guid, the answers for successive requests. Once a queue
    /// runs dry the guide answers `[]`.
    days: Arc<Mutex<HashMap<String, VecDeque<FakeDay>>>>,
    requests: Arc<Mutex<Vec<GuideRequest>>>,
}

/// In-process stand-in for the NPO guide API, served on an ephemeral port.
pub struct FakeGuide {
    pub base_url: String,
    state: FakeGuideState,
}

impl FakeGuide {
    pub async fn start() -> Self {
        let state = FakeGuideState::default();
        let router = Router::new()
            .route(GUIDE_CHANNEL_PATH, route_get(guide_channel))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// A guide whose base URL points at a port nothing listens on.
    pub async fn unreachable() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        Self {
            base_url: format!("http://{addr}"),
            state: FakeGuideState::default(),
        }
    }

    /// Queue the answer for the next unanswered day of channel `guid`.
    pub fn push_day(&self, guid: &str, day: FakeDay) {
        self.state
            .days
            .lock()
            .unwrap()
            .entry(guid.to_string())
            .or_default()
            .push_back(day);
    }

    pub fn push_programs(&self, guid: &str, programs: Vec<Value>) {
        self.push_day(guid, FakeDay::Json(Value::Array(programs)));
    }

    pub fn requests(&self) -> Vec<GuideRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, guid: &str) -> usize {
        self.requests().iter().filter(|r| r.guid == guid).count()
    }
}

async fn guide_channel(
    State(state): State<FakeGuideState>,
    Query(params): Query<HashMap<String, String>>,
    headers: axum::http::HeaderMap,
) -> Response {
    let guid = params.get("guid").cloned().unwrap_or_default();
    state.requests.lock().unwrap().push(GuideRequest {
        date: params.get("date").cloned().unwrap_or_default(),
        guid: guid.clone(),
        user_agent: headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    });

    let day = state
        .days
        .lock()
        .unwrap()
        .get_mut(&guid)
        .and_then(VecDeque::pop_front);

    match day {
        Some(FakeDay::Json(value)) => axum::Json(value).into_response(),
        Some(FakeDay::Raw(body)) => body.into_response(),
        Some(FakeDay::Status(status)) => status.into_response(),
        None => axum::Json(json!([])).into_response(),
    }
}

/// Names of all `Start`/`Empty` elements in document order. Panics if the
/// document is not well-formed.
pub fn element_names(xml: &str) -> Vec<String> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    let mut names = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) => {
                names.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap())
            }
            Event::Eof => break,
            _ => {}
        }
    }
    names
}

/// Text of every `<name ...>text</name>` element, in document order.
pub fn element_texts(xml: &str, name: &str) -> Vec<String> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    let mut texts = Vec::new();
    let mut inside = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == name.as_bytes() => inside = true,
            Event::Text(t) if inside => texts.push(t.decode().unwrap().into_owned()),
            Event::End(e) if e.name().as_ref() == name.as_bytes() => inside = false,
            Event::Eof => break,
            _ => {}
        }
    }
    texts
}
