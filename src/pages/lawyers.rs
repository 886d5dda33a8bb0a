use log::warn;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::carousel::Carousel;
use crate::config::{FEATURE_ROTATE_MS, LAWYERS_PER_PAGE};
use crate::data::{lawyers, Lawyer};
use crate::theme::palette;

/// Splits the directory into equally sized pages; the last page keeps
/// the remainder.
fn chunk_pages<T: Clone>(items: &[T], per_page: usize) -> Vec<Vec<T>> {
    items
        .chunks(per_page.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct LawyersProps {
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(Lawyers)]
pub fn lawyers_page(props: &LawyersProps) -> Html {
    let pager = use_state(|| {
        let mut pager = Carousel::new(
            chunk_pages(&lawyers(), LAWYERS_PER_PAGE),
            FEATURE_ROTATE_MS,
        )
        .expect("lawyer directory has entries");
        // Paging is manual only; the deck never rotates on its own.
        pager.pause();
        pager
    });

    let colors = palette(props.dark);
    let current = pager.current_index();
    let page: Vec<Lawyer> = pager.current_slide().clone();

    let on_prev = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| {
            let mut engine = (*pager).clone();
            engine.prev();
            pager.set(engine);
        })
    };

    let on_next = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| {
            let mut engine = (*pager).clone();
            engine.next();
            pager.set(engine);
        })
    };

    let go_to_page = {
        let pager = pager.clone();
        Callback::from(move |index: usize| {
            let mut engine = (*pager).clone();
            match engine.go_to(index) {
                Ok(()) => pager.set(engine),
                Err(err) => warn!("ignoring pager dot click: {err}"),
            }
        })
    };

    let card_shadow = if props.dark {
        "0 4px 12px rgba(255, 255, 255, 0.05)"
    } else {
        "0 4px 12px rgba(0, 0, 0, 0.1)"
    };

    html! {
        <>
            <style>
                {r#"
                    @keyframes dropIn {
                        from {
                            opacity: 0;
                            transform: translateY(-30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    .lawyers-page {
                        min-height: 100vh;
                        padding: 60px 20px;
                        font-family: 'Segoe UI', sans-serif;
                    }
                    .lawyers-header {
                        text-align: center;
                        margin-bottom: 40px;
                        animation: dropIn 0.7s ease-out;
                    }
                    .lawyers-header h1 {
                        font-size: 36px;
                        font-weight: bold;
                    }
                    .lawyers-header p {
                        font-size: 18px;
                        max-width: 600px;
                        margin: 10px auto 0;
                    }
                    .lawyer-deck {
                        position: relative;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .lawyer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 30px;
                        padding: 20px 60px;
                    }
                    .lawyer-card {
                        padding: 20px;
                        border-radius: 20px;
                        margin-bottom: 20px;
                        text-align: center;
                        transition: transform 0.3s ease;
                    }
                    .lawyer-card:hover {
                        transform: scale(1.05);
                    }
                    .lawyer-card img {
                        width: 100px;
                        height: 100px;
                        border-radius: 50%;
                        object-fit: cover;
                        margin-bottom: 15px;
                    }
                    .lawyer-card h3 {
                        font-size: 20px;
                        font-weight: 600;
                        margin: 0;
                    }
                    .lawyer-card .domain {
                        margin: 5px 0;
                        font-weight: 500;
                    }
                    .lawyer-card .meta {
                        margin: 5px 0;
                        font-size: 14px;
                    }
                    .lawyer-card .rating {
                        color: #f39c12;
                    }
                    .pager-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        border: none;
                        border-radius: 50%;
                        width: 40px;
                        height: 40px;
                        cursor: pointer;
                        font-size: 18px;
                        box-shadow: 0 4px 12px rgba(0,0,0,0.15);
                        z-index: 2;
                    }
                    .pager-nav.left { left: 0; }
                    .pager-nav.right { right: 0; }
                    .pager-dots {
                        display: flex;
                        gap: 10px;
                        justify-content: center;
                        margin-top: 10px;
                    }
                    .pager-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                "#}
            </style>
            <div
                class="lawyers-page"
                style={format!(
                    "background: {}; color: {};",
                    if props.dark { "#121212" } else { "#f5f5f5" },
                    if props.dark { "#f0f0f0" } else { "#1d1d1d" },
                )}
            >
                <div class="lawyers-header">
                    <h1>{"Meet Our Expert Lawyers"}</h1>
                    <p>
                        {"Browse a curated list of top-rated lawyers across criminal, civil, \
                          corporate, family law, and more."}
                    </p>
                </div>

                <div class="lawyer-deck">
                    <div class="lawyer-grid">
                        { for page.iter().map(|lawyer| html! {
                            <div
                                key={lawyer.name}
                                class="lawyer-card"
                                style={format!(
                                    "background: {}; box-shadow: {};",
                                    if props.dark { "#1e1e1e" } else { "#fff" },
                                    card_shadow,
                                )}
                            >
                                <img src={lawyer.portrait} alt={lawyer.name} />
                                <h3>{ lawyer.name }</h3>
                                <p class="domain">{ lawyer.domain }</p>
                                <p class="meta">
                                    {"Experience: "}<strong>{ lawyer.experience }</strong>
                                </p>
                                <p class="meta">
                                    {"Rating: "}<span class="rating">{ lawyer.rating }</span>
                                </p>
                            </div>
                        }) }
                    </div>

                    <button class="pager-nav left" onclick={on_prev}>{"‹"}</button>
                    <button class="pager-nav right" onclick={on_next}>{"›"}</button>
                </div>

                <div class="pager-dots">
                    { for (0..pager.len()).map(|index| {
                        let active = index == current;
                        let onclick = {
                            let go_to_page = go_to_page.clone();
                            Callback::from(move |_: MouseEvent| go_to_page.emit(index))
                        };
                        html! {
                            <div
                                key={index}
                                class="pager-dot"
                                style={format!(
                                    "background: {}; opacity: {};",
                                    if active { colors.primary } else { colors.muted_text },
                                    if active { "1" } else { "0.5" },
                                )}
                                {onclick}
                            ></div>
                        }
                    }) }
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_lawyers_fill_two_pages_with_the_remainder_last() {
        let pages = chunk_pages(&lawyers(), LAWYERS_PER_PAGE);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 3);
        assert_eq!(pages[1].len(), 1);
        assert_eq!(pages[1][0].name, "Adv. Ankit Desai");
    }

    #[test]
    fn empty_directory_yields_no_pages() {
        let pages = chunk_pages::<Lawyer>(&[], LAWYERS_PER_PAGE);
        assert!(pages.is_empty());
    }
}
