#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::get_configuration;
    use leptos_axum::{LeptosRoutes, generate_route_list};

    use iclix::app::{App, shell};

    tracing_subscriber::fmt::init();

    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(err) => {
            tracing::error!(error = %err, "failed to load leptos configuration");
            return;
        }
    };
    let mut leptos_options = conf.leptos_options;
    // PORT from the environment wins over the baked-in site address.
    if let Ok(port) = std::env::var("PORT") {
        match port.parse::<u16>() {
            Ok(port) => leptos_options.site_addr.set_port(port),
            Err(_) => tracing::warn!(%port, "ignoring invalid PORT"),
        }
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind");
            return;
        }
    };
    tracing::info!(%addr, "iclix listening");
    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!(error = %err, "server failed");
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Binary only exists for the ssr server; the hydrate build is a cdylib.
}
