//! In-process stand-ins for the user and mail services.
//!
//! Both services share one Actix server so a scenario can inspect every
//! outbound call through a single [`UpstreamState`].

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

#[derive(Default)]
pub(crate) struct UpstreamState {
    users: Mutex<HashMap<i64, String>>,
    user_service_status: Mutex<Option<u16>>,
    user_calls: Mutex<Vec<i64>>,
    mail: Mutex<Vec<Value>>,
}

impl UpstreamState {
    pub(crate) fn add_user(&self, id: i64, name: &str) {
        self.users
            .lock()
            .expect("users lock")
            .insert(id, name.to_owned());
    }

    /// Make every user lookup answer with `status`.
    pub(crate) fn fail_user_lookups(&self, status: u16) {
        *self.user_service_status.lock().expect("status lock") = Some(status);
    }

    pub(crate) fn user_calls(&self) -> Vec<i64> {
        self.user_calls.lock().expect("user calls lock").clone()
    }

    pub(crate) fn mail(&self) -> Vec<Value> {
        self.mail.lock().expect("mail lock").clone()
    }
}

async fn get_user(state: web::Data<UpstreamState>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    state.user_calls.lock().expect("user calls lock").push(id);

    if let Some(status) = *state.user_service_status.lock().expect("status lock") {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return HttpResponse::build(status).body("upstream exploded");
    }

    match state.users.lock().expect("users lock").get(&id) {
        Some(name) => HttpResponse::Ok().json(json!({ "id": id, "name": name })),
        None => HttpResponse::NotFound().json(json!({
            "message": format!("user {id} does not exist"),
            "code": "user_not_found",
        })),
    }
}

async fn send_mail(state: web::Data<UpstreamState>, payload: web::Json<Value>) -> HttpResponse {
    state
        .mail
        .lock()
        .expect("mail lock")
        .push(payload.into_inner());
    HttpResponse::Accepted().finish()
}

/// Bind the fake services to an ephemeral port and start serving.
pub(crate) fn spawn_upstream(
    state: Arc<UpstreamState>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let data = web::Data::from(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/users/{id}", web::get().to(get_user))
            .route("/mail", web::post().to(send_mail))
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
