//! Server harness and shared world for order submission scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The order API is started lazily on the
//! first request so `Given` steps can still change how it is wired.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use order_backend::Trace;
use order_backend::domain::ports::{AdminNotifier, OrderRepository, UserDirectory};
use order_backend::domain::{EmailAddress, NotificationSettings, OrderSubmissionService};
use order_backend::inbound::http::orders::{json_config, submit_order};
use order_backend::inbound::http::state::HttpState;
use order_backend::outbound::mail::HttpAdminNotifier;
use order_backend::outbound::user_service::HttpUserDirectory;
use reqwest::Url;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use crate::doubles::SwitchableOrderRepository;
use crate::upstream::{UpstreamState, spawn_upstream};

pub(crate) const ADMIN_EMAIL: &str = "admin@example.com";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) struct OrderWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) upstream: Arc<UpstreamState>,
    pub(crate) upstream_url: String,
    pub(crate) upstream_server: ServerHandle,
    pub(crate) repository: SwitchableOrderRepository,
    pub(crate) notifications_enabled: bool,
    pub(crate) app: Option<(String, ServerHandle)>,
    pub(crate) responses: Vec<CapturedResponse>,
}

pub(crate) struct CapturedResponse {
    pub(crate) status: u16,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Value,
}

impl OrderWorld {
    pub(crate) fn last_response(&self) -> &CapturedResponse {
        self.responses.last().expect("a response was recorded")
    }
}

pub(crate) type SharedWorld = Rc<RefCell<OrderWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

fn shutdown(world: SharedWorld) {
    let ctx = world.borrow();
    let upstream = ctx.upstream_server.clone();
    let app = ctx.app.as_ref().map(|(_, handle)| handle.clone());
    ctx.local.block_on(&ctx.runtime, async move {
        if let Some(app) = app {
            app.stop(true).await;
        }
        upstream.stop(true).await;
    });
}

fn build_http_state(world: &OrderWorld) -> HttpState {
    let users: Arc<dyn UserDirectory> = Arc::new(
        HttpUserDirectory::new(
            Url::parse(&world.upstream_url).expect("upstream url"),
            UPSTREAM_TIMEOUT,
        )
        .expect("user service client"),
    );
    let notifier: Arc<dyn AdminNotifier> = Arc::new(
        HttpAdminNotifier::new(
            Url::parse(&format!("{}/mail", world.upstream_url)).expect("mail url"),
            UPSTREAM_TIMEOUT,
        )
        .expect("mail service client"),
    );
    let orders: Arc<dyn OrderRepository> = Arc::new(world.repository.clone());
    let notifications = if world.notifications_enabled {
        NotificationSettings::enabled(EmailAddress::new(ADMIN_EMAIL).expect("admin email"))
    } else {
        NotificationSettings::Disabled
    };

    HttpState::new(Arc::new(OrderSubmissionService::new(
        users,
        orders,
        notifier,
        notifications,
    )))
}

async fn spawn_order_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(json_config())
            .wrap(Trace)
            .service(submit_order)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

/// Base URL of the order API, starting it on first use.
fn ensure_app(world: &SharedWorld) -> String {
    if let Some((base_url, _)) = world.borrow().app.as_ref() {
        return base_url.clone();
    }
    let started = {
        let ctx = world.borrow();
        let http_state = build_http_state(&ctx);
        ctx.local
            .block_on(&ctx.runtime, spawn_order_server(http_state))
            .expect("order server should start")
    };
    let base_url = started.0.clone();
    world.borrow_mut().app = Some(started);
    base_url
}

/// POST `payload` to `/order` and record the response.
pub(crate) fn post_order(world: &SharedWorld, payload: Value) {
    let base_url = ensure_app(world);
    let captured = {
        let ctx = world.borrow();
        ctx.local.block_on(&ctx.runtime, async move {
            let mut response = awc::Client::default()
                .post(format!("{base_url}/order"))
                .send_json(&payload)
                .await
                .expect("order request");
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(order_backend::domain::TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned);
            let body = response.json::<Value>().await.expect("json body");
            CapturedResponse {
                status,
                trace_id,
                body,
            }
        })
    };
    world.borrow_mut().responses.push(captured);
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let upstream = Arc::new(UpstreamState::default());
    let (upstream_url, upstream_server) = local
        .block_on(&runtime, async { spawn_upstream(upstream.clone()) })
        .expect("upstream should start");

    let world = Rc::new(RefCell::new(OrderWorld {
        runtime,
        local,
        upstream,
        upstream_url,
        upstream_server,
        repository: SwitchableOrderRepository::new(),
        notifications_enabled: true,
        app: None,
        responses: Vec::new(),
    }));

    WorldFixture { world }
}
