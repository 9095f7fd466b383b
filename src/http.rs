use crate::err::Error;
use crate::opt;
use crate::routes::{respond_to_request, State};
use crate::tcp;
use crate::tls;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use std::convert::Infallible;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;

pub async fn run(options: &opt::Options) -> Result<(), Error> {
    let state = Arc::new(State::new(options)?);

    let acceptor = if options.usetls {
        Some(tls::acceptor(&options.tlscert, &options.tlskey)?)
    } else {
        None
    };

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, options.port));
    let mut listener = TcpListener::bind(addr).await?;

    log::info!(
        "redirected v{} listening at {} port {}",
        env!("CARGO_PKG_VERSION"),
        if options.usetls { "https" } else { "http" },
        options.port
    );

    loop {
        let (stream, remote) = tcp::accept(&mut listener).await?;

        let state = Arc::clone(&state);
        match acceptor.clone() {
            Some(acceptor) => {
                tokio::spawn(async move {
                    match acceptor.accept(stream).await {
                        Ok(stream) => serve_connection(stream, remote, state).await,
                        Err(e) => log::debug!("TLS handshake failed with {}: {}", remote, e),
                    }
                });
            }
            None => {
                tokio::spawn(serve_connection(stream, remote, state));
            }
        }
    }
}

async fn serve_connection<IO>(io: IO, remote: SocketAddr, state: Arc<State>)
where
    IO: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let serve = service_fn(move |req| {
        let state = Arc::clone(&state);
        async move { Ok::<_, Infallible>(respond_to_request(req, remote, &state).await) }
    });

    if let Err(e) = auto::Builder::new(TokioExecutor::new())
        .serve_connection(TokioIo::new(io), serve)
        .await
    {
        log::error!("Error serving connection: {}", e);
    }
}
