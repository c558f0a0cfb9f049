//! Web host for the compiled front end
//!
//! The pages themselves run in the browser; this router only hands out the
//! HTML shell for each page route and the files under `pkg/`.

use std::path::Path;

use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

/// Routes handled by the front end's router
pub const PAGE_ROUTES: [&str; 2] = ["/", "/dashboard"];

const PKG_NAME: &str = "smartcontrol-app";

/// Build the web host router
pub fn build_router(site_root: &Path) -> Router {
    let pkg_dir = site_root.join("pkg");
    tracing::debug!("Serving front end assets from {:?}", pkg_dir);

    let mut router = Router::new().route("/health", get(health_handler));
    for route in PAGE_ROUTES {
        router = router.route(route, get(shell_handler));
    }
    router.nest_service("/pkg", ServeDir::new(pkg_dir))
}

async fn shell_handler() -> impl IntoResponse {
    Html(shell_html())
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

fn shell_html() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="theme-color" content="#12121a">
    <title>SmartControl+</title>
    <link rel="stylesheet" href="/pkg/{pkg}.css">
    <script type="module">
        import init, {{ mount }} from '/pkg/{pkg}.js';
        init('/pkg/{pkg}.wasm').then(() => mount());
    </script>
</head>
<body>
    <noscript>SmartControl+ precisa de JavaScript habilitado.</noscript>
</body>
</html>"##,
        pkg = PKG_NAME
    )
}
