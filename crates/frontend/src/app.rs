use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::gateway::{AppGateway, BrowserTransport, Gateway};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("API base URL: {}", config.base_url);

    // Provide the gateway to every page via context.
    let gateway: AppGateway = Gateway::new(BrowserTransport::new(config.clone()));
    provide_context(config);
    provide_context(gateway);

    view! {
        <AppRoutes />
    }
}
