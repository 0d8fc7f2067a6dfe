//! Upkeep — browser entry point.
//!
//! Client-side-rendered Leptos app: everything runs in the browser, talking
//! to the maintenance API over HTTP and to `localStorage` for the checklist.

mod app;
mod components;
mod net;
mod pages;
mod state;
mod util;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
