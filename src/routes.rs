use crate::accesslog::{client_addr, AccessLog};
use crate::body::{empty, EmptyBody};
use crate::config;
use crate::err::Error;
use crate::mux::Router;
use crate::opt;
use hyper::header::{HeaderValue, LOCATION, SERVER};
use hyper::{Request, Response, StatusCode};
use std::net::SocketAddr;

/// Shared by every connection task; read-only after startup.
pub struct State {
    pub router: Router,
    pub log: Option<AccessLog>,
}

impl State {
    pub fn new(options: &opt::Options) -> Result<Self, Error> {
        let target = HeaderValue::from_str(&options.target)?;
        let status = StatusCode::from_u16(options.status)?;

        Ok(State {
            router: build_router(target, status)?,
            log: options.httplog.then(AccessLog::spawn),
        })
    }
}

pub fn build_router(target: HeaderValue, status: StatusCode) -> Result<Router, regex::Error> {
    let mut router = Router::default();
    router.add_route(
        "^/",
        None,
        Box::new(move |_parts, _groups| redirect(&target, status)),
    )?;
    Ok(router)
}

/// The redirect target is constant, never derived from the request.
fn redirect(target: &HeaderValue, status: StatusCode) -> Response<EmptyBody> {
    let mut resp = Response::new(empty());
    *resp.status_mut() = status;
    resp.headers_mut().insert(LOCATION, target.clone());
    resp
}

/// Dispatches one request, attaches the `Server` header, then submits the
/// access log line. A saturated log queue delays this future, and with it
/// transmission of the already-built response, until the consumer frees a
/// slot; no line is ever dropped.
pub async fn respond_to_request<B>(
    req: Request<B>,
    remote: SocketAddr,
    state: &State,
) -> Response<EmptyBody> {
    let (parts, _body) = req.into_parts();

    let mut resp = state.router.dispatch(&parts);

    // a routed handler that set its own Server header wins
    resp.headers_mut()
        .entry(SERVER)
        .or_insert_with(|| HeaderValue::from_static(config::SERVER_IDENT));

    // after the response is produced, before it is transmitted; waits only
    // when the access log queue is full
    if let Some(log) = &state.log {
        let line = format!(
            "{} {} {}",
            client_addr(&parts.headers, remote),
            parts.method,
            parts.uri
        );
        log.write(line).await;
    }

    resp
}
