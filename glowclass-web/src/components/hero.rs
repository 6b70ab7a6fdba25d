use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        div { class: "text-center mb-16",
            span { class: "hero-badge", "Limited Time Offer" }
            h1 { class: "hero-title", "Master the Art of Makeup" }
            p { class: "hero-subtitle",
                "Join our exclusive masterclass and learn professional techniques from industry experts"
            }
        }
    }
}
