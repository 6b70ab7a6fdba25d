use dioxus::prelude::*;

const BENEFITS: [&str; 4] = [
    "Professional makeup techniques",
    "Personal guidance from experts",
    "Hands-on practice sessions",
    "Premium beauty kit included",
];

#[component]
pub fn Benefits() -> Element {
    rsx! {
        div { class: "glass-card",
            h3 { class: "card-title", "What You'll Get" }
            ul { class: "benefit-list",
                for benefit in BENEFITS {
                    li { class: "benefit-item",
                        span { class: "benefit-check", "✓" }
                        span { "{benefit}" }
                    }
                }
            }
        }
    }
}
