//! Draggable ball demo
//! Built with iced: a table of contents, a single ball and a playground

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging (honors RUST_LOG)
    tracing_subscriber::fmt::init();

    // Run as a daemon; the app exits itself when its window closes
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
