use best_login_ui::App;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(|| view! { <App/> });
}
