#![allow(warnings)]
//! Bookstore Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod currency;
mod dates;
mod forms;
mod keys;
mod media;
mod models;
mod pages;
mod paging;
mod quantity;
mod review;
mod scroll_lock;
mod session;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
