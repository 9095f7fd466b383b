use http_body_util::Empty;
use hyper::body::Bytes;

// Every response this server produces has an empty body.
pub type EmptyBody = Empty<Bytes>;

pub fn empty() -> EmptyBody {
    Empty::new()
}
