use adw::Application;
use dm_composer::{Config, DmClient};

pub fn build_ui(app: &Application) {
    let config = Config::load();
    let endpoint = config.endpoint_url();
    log::info!("Relay endpoint: {endpoint}");
    let client = DmClient::new(endpoint);
    crate::ui::main_window::show_main_window(app, client);
}
