#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    use kelvin::config::{BUNDLED_CONFIG, parse_env_lines};

    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

// Web builds have no process environment; `Config::load` reads the bundle.
#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn init_tracing() {
    // The renderer may already have installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

fn main() {
    load_dotenv();
    init_tracing();
    dioxus::launch(kelvin::ui::App);
}
