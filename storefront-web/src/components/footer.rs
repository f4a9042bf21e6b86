use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn Footer(brand: String) -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "border-t border-gray-700 py-12",
            div { class: "container mx-auto px-6",
                div { class: "grid md:grid-cols-4 gap-8 mb-8",
                    div {
                        div { class: "flex items-center gap-2 mb-4",
                            div { class: "w-10 h-10 bg-gradient-to-r from-purple-500 to-pink-600 rounded-xl flex items-center justify-center text-2xl",
                                "🎮"
                            }
                            span { class: "text-xl font-bold text-gray-100", "{brand}" }
                        }
                        p { class: "text-sm text-gray-400", "Instant delivery of in-game currency" }
                    }
                    FooterLinks {
                        title: "Catalog",
                        links: vec![("catalog", "All packages"), ("catalog", "Popular"), ("catalog", "With bonus")],
                    }
                    FooterLinks {
                        title: "Help",
                        links: vec![("faq", "FAQ"), ("payment", "Payment methods"), ("reviews", "Reviews")],
                    }
                    div {
                        h4 { class: "font-bold text-gray-100 mb-3", "Contact" }
                        ul { class: "space-y-2 text-sm text-gray-400",
                            li { "✉ support@robux.ru" }
                            li { "💬 Telegram: @robuxru" }
                        }
                    }
                }
                div { class: "text-center pt-8 border-t border-gray-700 text-sm text-gray-500",
                    "© {year} {brand}. All rights reserved"
                }
            }
        }
    }
}

#[component]
fn FooterLinks(#[props(into)] title: String, links: Vec<(&'static str, &'static str)>) -> Element {
    rsx! {
        div {
            h4 { class: "font-bold text-gray-100 mb-3", "{title}" }
            ul { class: "space-y-2 text-sm text-gray-400",
                for (id, label) in links {
                    li {
                        a { href: "#{id}", class: "hover:text-purple-400 transition-colors", "{label}" }
                    }
                }
            }
        }
    }
}
