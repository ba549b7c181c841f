use volunteer_admin::components::{App, AppProps};
use volunteer_admin::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Volunteer Admin ({})", config.backend_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
