use dioxus::prelude::*;

pub const SECTIONS: [(&str, &str); 5] = [
    ("hero", "Home"),
    ("catalog", "Catalog"),
    ("reviews", "Reviews"),
    ("faq", "FAQ"),
    ("payment", "Payment"),
];

#[component]
pub fn Navigation(brand: String) -> Element {
    let mut mobile_open = use_signal(|| false);

    rsx! {
        header { class: "backdrop-blur-md bg-gray-900/80 border-b border-gray-700 sticky top-0 z-40",
            div { class: "container mx-auto px-6 py-4",
                div { class: "flex justify-between items-center",
                    div { class: "flex items-center space-x-3",
                        div { class: "w-10 h-10 bg-gradient-to-r from-purple-500 to-pink-600 rounded-xl flex items-center justify-center text-2xl",
                            "🎮"
                        }
                        span { class: "text-2xl font-bold text-gray-100", "{brand}" }
                    }

                    nav { class: "hidden md:flex items-center space-x-8",
                        for (id, label) in SECTIONS {
                            a {
                                href: "#{id}",
                                class: "text-gray-300 hover:text-purple-400 font-medium transition-colors",
                                "{label}"
                            }
                        }
                    }

                    button {
                        class: "md:hidden text-gray-300 hover:text-purple-400",
                        onclick: move |_| mobile_open.toggle(),
                        if mobile_open() { "✕" } else { "☰" }
                    }
                }

                if mobile_open() {
                    nav { class: "md:hidden flex flex-col space-y-3 pt-4",
                        for (id, label) in SECTIONS {
                            a {
                                href: "#{id}",
                                class: "text-gray-300 hover:text-purple-400 font-medium",
                                onclick: move |_| mobile_open.set(false),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
