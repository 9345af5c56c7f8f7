use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/study/:deck_id", StudyView)] Study { deck_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let identity = ctx.identity();

    rsx! {
        nav { class: "sidebar",
            h1 { "Flashdeck" }
            ul {
                li { Link { to: Route::Home {}, "Decks" } }
            }
            p { class: "sidebar-identity", "{identity.owner} · subject {identity.subject_id}" }
        }
    }
}
