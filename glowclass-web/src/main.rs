use dioxus::prelude::*;

use components::{Benefits, Hero, RegistrationForm, SocialProof, Toast, ToastStack};

mod components;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    launch(App);
}

#[component]
fn App() -> Element {
    // One toast list for the whole page; any section can push into it.
    use_context_provider(|| Signal::new(Vec::<Toast>::new()));

    rsx! {
        link { rel: "stylesheet", href: TAILWIND_CSS }
        link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "min-h-screen py-12 px-4",
            div { class: "max-w-7xl mx-auto",
                Hero {}

                div { class: "grid md:grid-cols-2 gap-12 items-start",
                    RegistrationForm {}

                    div { class: "space-y-8",
                        Benefits {}
                        SocialProof {}
                    }
                }
            }
        }

        ToastStack {}
    }
}
