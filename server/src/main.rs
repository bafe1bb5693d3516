use leptos::logging;
use server::{config, error::ServerError, router};

async fn run() -> Result<(), ServerError> {
    let leptos_options = config::load()?;
    let addr = leptos_options.site_addr;
    let app = router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    logging::log!("Listening on http://{}", &addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)?;
    logging::log!("Server shutdown gracefully");
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(config::tracing_level())
        .init();

    if let Err(err) = run().await {
        logging::error!("{err}");
        tracing::error!(error = ?err, "server stopped");
        std::process::exit(1);
    }
}
