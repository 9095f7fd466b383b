mod accesslog;
mod body;
mod config;
mod err;
mod http;
mod mux;
mod opt;
mod routes;
mod tcp;
mod tls;

// The reference deployment runs with three execution contexts.
#[tokio::main(worker_threads = 3)]
async fn main() -> Result<(), err::DisplayError> {
    let options: opt::Options = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match options.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    if options.target.is_empty() {
        use clap::CommandFactory;
        eprintln!("target URL missing");
        eprintln!("{}", opt::Options::command().render_help());
        std::process::exit(1);
    }

    http::run(&options).await?;

    Ok(())
}
