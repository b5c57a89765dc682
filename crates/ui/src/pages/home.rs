//! Home Page Component
//!
//! Hero carousel, product showcase, the latest reviews and a sliding strip
//! of sample cards.

use dioxus::prelude::*;

use crate::components::product_card::image_src;
use crate::hooks::use_hero_autoplay;
use crate::state::{APP_STATE, Page};
use champa_catalog::{TrustReview, visible_for_width};
use champa_core::{Product, showcase_category};

/// One hero slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "ເສື້ອທີມ ອອກແບບເອງໄດ້",
        subtitle: "ເລືອກແບບ ເລືອກສີ ໃສ່ຊື່ ແລະ ເບີ",
    },
    HeroSlide {
        title: "ເສື້ອບໍລິສັດ ແລະ ອົງກອນ",
        subtitle: "ຜ້າໃສ່ສະບາຍ ພິມຄົມຊັດ ສົ່ງໄວ",
    },
    HeroSlide {
        title: "ເສື້ອງານແລ່ນ ແລະ ອີເວັ້ນ",
        subtitle: "ສັ່ງຈຳນວນຫຼາຍ ລາຄາພິເສດ",
    },
];

/// Sizes printed on every showcase card
pub const SIZES: &str = "XS S M L XL 2XL 3XL";

#[component]
pub fn HomePage() -> Element {
    use_hero_autoplay();
    use_effect(|| {
        let desktop = dioxus::desktop::window();
        let size = desktop
            .window
            .inner_size()
            .to_logical::<f64>(desktop.window.scale_factor());
        APP_STATE.write().samples.set_visible(visible_for_width(size.width));
    });

    let (products, reviews, window) = {
        let state = APP_STATE.read();
        (
            state.catalog.all_products(),
            state.trust_reviews.clone(),
            state.samples.window(),
        )
    };
    let samples: Vec<Product> = products.get(window).map(<[Product]>::to_vec).unwrap_or_default();

    rsx! {
        div {
            class: "page home-page",

            HeroCarousel {}

            if !products.is_empty() {
                section {
                    class: "section showcase",
                    h2 { class: "section-title", "ຜົນງານຂອງພວກເຮົາ" }
                    div {
                        class: "showcase-grid",
                        for product in products.iter().cloned() {
                            ShowcaseCard { key: "{product.id}", product }
                        }
                    }
                }
            }

            TrustReviews { reviews }

            section {
                class: "section samples",
                div {
                    class: "section-head",
                    h2 { class: "section-title", "ຕົວຢ່າງສິນຄ້າ" }
                    div {
                        class: "carousel-controls",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| APP_STATE.write().samples.step(-1),
                            "‹"
                        }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| APP_STATE.write().samples.step(1),
                            "›"
                        }
                    }
                }
                div {
                    class: "sample-strip",
                    for product in samples {
                        div {
                            key: "{product.id}",
                            class: "sample-card",
                            onclick: move |_| APP_STATE.write().open_product(product.id),
                            span { class: "sample-title", "{product.title}" }
                            if let Some(badge) = &product.badge {
                                span { class: "badge", "{badge}" }
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| APP_STATE.write().navigate(Page::Products),
                    "ເບິ່ງສິນຄ້າທັງໝົດ"
                }
            }
        }
    }
}

#[component]
fn HeroCarousel() -> Element {
    let index = APP_STATE.read().hero.index();
    let Some(slide) = HERO_SLIDES.get(index).or(HERO_SLIDES.first()).copied() else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-slide active",
                h1 { class: "hero-title", "{slide.title}" }
                p { class: "hero-subtitle", "{slide.subtitle}" }
            }
            button {
                class: "hero-prev",
                onclick: move |_| APP_STATE.write().hero.prev(),
                "‹"
            }
            button {
                class: "hero-next",
                onclick: move |_| APP_STATE.write().hero.next(),
                "›"
            }
            div {
                class: "hero-dots",
                for i in 0..HERO_SLIDES.len() {
                    span {
                        key: "{i}",
                        class: if i == index { "carousel-dot active" } else { "carousel-dot" },
                        onclick: move |_| APP_STATE.write().hero.go_to(i as isize),
                    }
                }
            }
        }
    }
}

#[component]
fn ShowcaseCard(product: Product) -> Element {
    let base_url = APP_STATE.read().config.base_url.clone();
    let category = showcase_category(&product.category.clone().unwrap_or_default());

    rsx! {
        div {
            class: "showcase-card",
            div {
                class: "showcase-image",
                if let Some(image) = product.image.as_deref() {
                    img { src: "{image_src(image, &base_url)}", alt: "{product.title}" }
                }
            }
            div {
                class: "showcase-body",
                if !category.is_empty() {
                    div { class: "showcase-category", "{category}" }
                }
                if !product.desc.is_empty() {
                    div { class: "showcase-desc", "{product.desc}" }
                }
                div { class: "showcase-sizes", "{SIZES}" }
            }
        }
    }
}

/// The latest reviews, or a notice when there are none
#[component]
pub fn TrustReviews(reviews: Vec<TrustReview>) -> Element {
    rsx! {
        section {
            class: "section trust-reviews",
            div {
                class: "section-head",
                h2 { class: "section-title", "ລູກຄ້າເວົ້າແນວໃດ" }
                if !reviews.is_empty() {
                    button {
                        class: "btn btn-link",
                        onclick: move |_| APP_STATE.write().navigate(Page::Reviews),
                        "ເບິ່ງທັງໝົດ"
                    }
                }
            }
            if reviews.is_empty() {
                p { class: "muted", "ຍັງບໍ່ມີລີວິວ" }
            }
            div {
                class: "review-list",
                for (i, review) in reviews.into_iter().enumerate() {
                    ReviewItem { key: "{i}", review }
                }
            }
        }
    }
}

#[component]
pub fn ReviewItem(review: TrustReview) -> Element {
    let base_url = APP_STATE.read().config.base_url.clone();

    rsx! {
        div {
            class: "review-item",
            if let Some(image) = review.image.as_deref() {
                img { class: "review-image", src: "{image_src(image, &base_url)}" }
            }
            div {
                class: "review-body",
                if let Some(name) = &review.product_name {
                    div { class: "review-product", "{name}" }
                }
                div { class: "review-stars", "{review.star_string()}" }
                if !review.text.is_empty() {
                    p { class: "review-text", "{review.text}" }
                }
                span { class: "review-customer", "{review.customer}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_slides_present() {
        assert!(!HERO_SLIDES.is_empty());
        assert!(HERO_SLIDES.iter().all(|s| !s.title.is_empty()));
    }
}
