use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::QuizFlowView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizFlowView)] Home {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                span { class: "topbar-logo", "🎓" }
                div { class: "topbar-titles",
                    h1 { "Bagdar" }
                    p { "Абай университеті · кәсіби бағдар" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "Жауаптарың жасанды интеллект арқылы талданады." }
            }
        }
    }
}
