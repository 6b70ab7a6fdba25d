use dioxus::prelude::*;

#[component]
pub fn SocialProof() -> Element {
    rsx! {
        div { class: "glass-card",
            div { class: "proof-header",
                div { class: "avatar-row",
                    for _ in 0..3 {
                        div { class: "avatar" }
                    }
                }
                span { class: "proof-count", "Join 500+ happy students" }
            }
            p { class: "proof-quote",
                "\"This masterclass transformed my approach to makeup. The techniques I learned are invaluable!\""
            }
        }
    }
}
