//! Top navigation bar.

use leptos::prelude::*;

use crate::store::{store_navigate, use_app_store, Page};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();

    let link = move |page: Page, label: &'static str| {
        view! {
            <a
                href="#"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    store_navigate(&store, page);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <h2 class="navbar-title">"Community Connect"</h2>
            <div class="navbar-links">
                {link(Page::Login, "Login")}
                {link(Page::Register, "Register")}
            </div>
        </nav>
    }
}
