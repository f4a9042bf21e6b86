use crate::components::{Button, ButtonVariant, PackageCard, PromoForm};
use crate::hooks::{scroll_to_section, use_storefront};
use dioxus::prelude::*;
use storefront::Catalog;

struct Feature {
    icon: &'static str,
    label: &'static str,
    desc: String,
}

struct Review {
    name: &'static str,
    avatar: &'static str,
    rating: usize,
    text: &'static str,
}

static REVIEWS: [Review; 3] = [
    Review {
        name: "Alexey",
        avatar: "😎",
        rating: 5,
        text: "Got my currency instantly! Best service around",
    },
    Review {
        name: "Maria",
        avatar: "🎀",
        rating: 5,
        text: "The MEGA20 promo code works! Thanks for the discount",
    },
    Review {
        name: "Dmitry",
        avatar: "🎮",
        rating: 5,
        text: "Bought here three times already. Honest and fast",
    },
];

fn features(catalog: &Catalog) -> Vec<Feature> {
    let discount = match catalog.promo_codes().max_discount() {
        Some(max) => format!("Up to {} with a promo code", max),
        None => "Regular promotions".to_string(),
    };

    vec![
        Feature {
            icon: "⚡",
            label: "Instant",
            desc: "Delivery in 30 seconds".to_string(),
        },
        Feature {
            icon: "🛡️",
            label: "Safe",
            desc: "100% guarantee".to_string(),
        },
        Feature {
            icon: "%",
            label: "Discounts",
            desc: discount,
        },
        Feature {
            icon: "🎧",
            label: "Support",
            desc: "Online 24/7".to_string(),
        },
    ]
}

/// FAQ entries as (question, answer) pairs.
fn faq(catalog: &Catalog) -> Vec<(String, String)> {
    let currency = &catalog.labels().currency_name;
    let mut entries = vec![
        (
            format!("How fast does {} arrive?", currency),
            "It is credited to your account within 30-60 seconds of payment. In rare cases delivery can take up to 5 minutes.".to_string(),
        ),
        (
            "Which payment methods are accepted?".to_string(),
            "Bank cards (Visa, MasterCard, MIR), e-wallets and the fast payment system.".to_string(),
        ),
        (
            "Is it safe?".to_string(),
            "Yes. Delivery uses official methods and only verified payment providers. Full refund guarantee.".to_string(),
        ),
        (
            "How do I use a promo code?".to_string(),
            "Enter it in the promo field above the packages. The discount applies to every package automatically. Only one code is active at a time; entering a new one replaces it.".to_string(),
        ),
    ];

    let bonus_example = catalog
        .packages()
        .iter()
        .find(|p| p.popular && p.has_bonus())
        .or_else(|| catalog.packages().iter().find(|p| p.has_bonus()));
    if let Some(package) = bonus_example {
        entries.push((
            format!("What is bonus {}?", currency),
            format!(
                "Some packages include free bonus {currency}. For example, the {} + {} bonus package gives you {} {currency} for the price of {}.",
                package.amount,
                package.bonus,
                package.total_amount(),
                package.amount,
            ),
        ));
    }

    entries
}

#[component]
pub fn Store() -> Element {
    let store = use_storefront();
    let (features, faq, currency, packages) = store.with_catalog(|catalog| {
        (
            features(catalog),
            faq(catalog),
            catalog.labels().currency_name.clone(),
            catalog.packages().to_vec(),
        )
    });

    rsx! {
        main { class: "relative",
            // Hero
            section { id: "hero", class: "py-20 relative overflow-hidden",
                div { class: "absolute inset-0 bg-gradient-to-b from-purple-500/10 to-transparent pointer-events-none" }
                div { class: "container mx-auto px-6 text-center relative z-10",
                    span { class: "inline-block mb-6 px-4 py-2 bg-yellow-400 text-gray-900 rounded-full text-lg font-medium",
                        "🔥 Instant delivery"
                    }
                    h1 { class: "text-6xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-purple-400 via-yellow-300 to-pink-400 bg-clip-text text-transparent",
                        "Buy {currency}"
                    }
                    p { class: "text-xl md:text-2xl text-gray-400 mb-8 max-w-2xl mx-auto",
                        "The best prices on {currency} with bonuses and instant delivery"
                    }
                    div { class: "flex gap-4 justify-center flex-wrap",
                        Button {
                            variant: ButtonVariant::Primary,
                            large: true,
                            class: "hover-scale glow-effect",
                            onclick: move |_| scroll_to_section("catalog"),
                            "🛒 Choose a package"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            large: true,
                            class: "hover-scale",
                            onclick: move |_| scroll_to_section("catalog"),
                            "🎁 Promo codes"
                        }
                    }
                }
            }

            // Features
            section { class: "py-16 bg-gray-800/50",
                div { class: "container mx-auto px-6",
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto",
                        for feature in features {
                            div { class: "p-6 text-center hover-scale bg-gray-800/80 backdrop-blur rounded-xl border border-gray-700",
                                div { class: "text-3xl mb-3 text-purple-400", "{feature.icon}" }
                                h3 { class: "font-bold text-gray-100 mb-1", "{feature.label}" }
                                p { class: "text-sm text-gray-400", "{feature.desc}" }
                            }
                        }
                    }
                }
            }

            // Catalog
            section { id: "catalog", class: "py-20",
                div { class: "container mx-auto px-6",
                    div { class: "text-center mb-12",
                        h2 { class: "text-4xl md:text-5xl font-bold text-gray-100 mb-4", "Choose your package" }
                        p { class: "text-gray-400 text-lg", "Every package comes with bonus {currency}" }
                    }

                    PromoForm {}

                    div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for package in packages {
                            PackageCard { key: "{package.id}", package }
                        }
                    }
                }
            }

            // Reviews
            section { id: "reviews", class: "py-20 bg-gray-800/30",
                div { class: "container mx-auto px-6",
                    h2 { class: "text-4xl md:text-5xl font-bold text-gray-100 text-center mb-12", "Player reviews" }
                    div { class: "grid md:grid-cols-3 gap-6 max-w-5xl mx-auto",
                        for review in REVIEWS.iter() {
                            div { class: "p-6 hover-scale bg-gray-800/80 backdrop-blur rounded-xl border border-gray-700",
                                div { class: "flex items-center gap-3 mb-4",
                                    div { class: "text-4xl", "{review.avatar}" }
                                    div {
                                        h4 { class: "font-bold text-gray-100", "{review.name}" }
                                        div { class: "flex gap-1 text-yellow-400", {"⭐".repeat(review.rating)} }
                                    }
                                }
                                p { class: "text-gray-400", "{review.text}" }
                            }
                        }
                    }
                }
            }

            // FAQ
            section { id: "faq", class: "py-20",
                div { class: "container mx-auto px-6",
                    h2 { class: "text-4xl md:text-5xl font-bold text-gray-100 text-center mb-12", "Frequently asked questions" }
                    div { class: "max-w-3xl mx-auto divide-y divide-gray-700",
                        for (question, answer) in faq {
                            details { class: "py-4 group",
                                summary { class: "text-lg text-gray-100 cursor-pointer list-none flex justify-between",
                                    "{question}"
                                    span { class: "text-purple-400 group-open:rotate-180 transition-transform", "▾" }
                                }
                                p { class: "mt-3 text-gray-400", "{answer}" }
                            }
                        }
                    }
                }
            }

            // Payment
            section { id: "payment", class: "py-20 bg-gradient-to-b from-purple-500/5 to-transparent",
                div { class: "container mx-auto px-6",
                    div { class: "max-w-2xl mx-auto text-center",
                        h2 { class: "text-4xl md:text-5xl font-bold text-gray-100 mb-6", "Ready to buy {currency}?" }
                        p { class: "text-xl text-gray-400 mb-8",
                            "Pick a package above and get {currency} on your account instantly"
                        }
                        div { class: "flex gap-4 justify-center flex-wrap mb-8 text-2xl opacity-70",
                            span { "💳 Visa" }
                            span { "💳 MasterCard" }
                            span { "💳 MIR" }
                            span { "💰 QIWI" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            large: true,
                            class: "px-12 glow-effect hover-scale",
                            onclick: move |_| scroll_to_section("catalog"),
                            "✨ Start shopping"
                        }
                    }
                }
            }
        }
    }
}
