use crate::components::{view_label, AppView, Icon, SongsResource};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let mut current_view = use_context::<Signal<AppView>>();
    let songs = use_context::<SongsResource>();
    let view = current_view();

    let song_count = match songs() {
        Some(Ok(songs)) => songs.len(),
        _ => 0,
    };

    rsx! {
        aside { class: "w-56 bg-zinc-950/50 border-r border-zinc-800/50 flex flex-col h-full",
            // Logo
            div { class: "p-6 border-b border-zinc-800/50",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-xl bg-gradient-to-br from-sky-500 to-indigo-600 flex items-center justify-center text-white font-bold text-lg",
                        "S"
                    }
                    div {
                        h1 { class: "text-lg font-bold text-white", "StereoPod" }
                        p { class: "text-xs text-zinc-500", "{song_count} songs" }
                    }
                }
            }

            nav { class: "flex-1 overflow-y-auto p-4 space-y-1",
                p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider mb-3 px-3",
                    "Browse"
                }
                NavItem {
                    icon: "music",
                    label: view_label(&AppView::Library).to_string(),
                    active: matches!(view, AppView::Library),
                    onclick: move |_| current_view.set(AppView::Library),
                }
                NavItem {
                    icon: "ipod",
                    label: view_label(&AppView::Ipod).to_string(),
                    active: matches!(view, AppView::Ipod),
                    onclick: move |_| current_view.set(AppView::Ipod),
                }
                NavItem {
                    icon: "heart",
                    label: view_label(&AppView::Dashboard).to_string(),
                    active: matches!(view, AppView::Dashboard),
                    onclick: move |_| current_view.set(AppView::Dashboard),
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "flex items-center gap-3 px-3 py-2.5 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer";
    let active_class = if active {
        "bg-gradient-to-r from-sky-500/20 to-indigo-500/10 text-sky-400 shadow-sm"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-800/50"
    };

    rsx! {
        button {
            class: "{base_class} {active_class} w-full",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { "{label}" }
        }
    }
}
