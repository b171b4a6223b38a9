use portfolio::App;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }
    }

    dioxus::launch(App);
}
