use crate::body::{empty, EmptyBody};
use hyper::http::request::Parts;
use hyper::{Method, Response, StatusCode};
use regex::Regex;

/// Called with the request head and the pattern's capture groups, in index order.
pub type Handler = Box<dyn Fn(&Parts, &[&str]) -> Response<EmptyBody> + Send + Sync>;

struct Route {
    pattern: Regex,
    /// `None` matches any method.
    method: Option<Method>,
    handler: Handler,
}

/// Ordered route table; the first matching route wins.
///
/// Fully built before the server starts accepting connections,
/// never mutated afterwards.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn add_route(
        &mut self,
        pattern: &str,
        method: Option<Method>,
        handler: Handler,
    ) -> Result<(), regex::Error> {
        let pattern = Regex::new(pattern)?;
        self.routes.push(Route {
            pattern,
            method,
            handler,
        });
        Ok(())
    }

    /// Matching considers only the path, never the query string or host.
    pub fn dispatch(&self, parts: &Parts) -> Response<EmptyBody> {
        let path = parts.uri.path();
        for route in &self.routes {
            if let Some(method) = &route.method {
                if *method != parts.method {
                    continue;
                }
            }
            if let Some(captures) = route.pattern.captures(path) {
                let groups = captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map_or("", |m| m.as_str()))
                    .collect::<Vec<_>>();
                return (route.handler)(parts, &groups);
            }
        }

        log::warn!("{} {} -> [no match]", parts.method, parts.uri);
        let mut resp = Response::new(empty());
        *resp.status_mut() = StatusCode::NOT_FOUND;
        resp
    }
}
