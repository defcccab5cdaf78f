use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod songlist;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#18181b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "StereoPod" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
