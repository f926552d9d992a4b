use dioxus::prelude::*;
use shared_ui::ToastProvider;

mod contact;

use contact::ContactMeSection;

const APP_CSS: Asset = asset!("/assets/contact.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router());

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Tag every server function call with the client platform
    use_hook(|| {
        use dioxus::fullstack::{set_request_headers, HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-client-platform",
            HeaderValue::from_static(client_platform()),
        );
        set_request_headers(headers);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        ToastProvider {
            main { class: "page",
                ContactMeSection {}
            }
        }
    }
}
