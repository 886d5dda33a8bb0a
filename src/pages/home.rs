use gloo_timers::callback::Interval;
use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::carousel::{Carousel, Direction};
use crate::config::FEATURE_ROTATE_MS;
use crate::data::{feature_cards, FeatureCard};
use crate::theme::palette;

#[function_component(Home)]
pub fn home() -> Html {
    let slideshow = use_state(|| {
        Carousel::new(feature_cards(), FEATURE_ROTATE_MS)
            .expect("feature carousel has slides")
    });
    let dark_mode = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let colors = palette(*dark_mode);
    let current = slideshow.current_index();
    let autoplay_on = slideshow.autoplay_enabled();
    let card: FeatureCard = slideshow.current_slide().clone();

    // One live interval while autoplay is enabled, none otherwise. The
    // interval is rebuilt whenever the index moves so a manual jump
    // restarts the countdown.
    {
        let slideshow = slideshow.clone();
        use_effect_with_deps(
            move |&(_, autoplay_on)| {
                let interval_ms = slideshow.interval_ms();
                let interval = autoplay_on.then(|| {
                    Interval::new(interval_ms, move || {
                        let mut engine = (*slideshow).clone();
                        if engine.advance(interval_ms) > 0 {
                            slideshow.set(engine);
                        }
                    })
                });
                move || drop(interval)
            },
            (current, autoplay_on),
        );
    }

    let on_prev = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut engine = (*slideshow).clone();
            engine.prev();
            slideshow.set(engine);
        })
    };

    let on_next = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut engine = (*slideshow).clone();
            engine.next();
            slideshow.set(engine);
        })
    };

    // Hovering anywhere over the slider suspends autoplay until the
    // pointer leaves, not just for one tick.
    let on_slider_enter = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut engine = (*slideshow).clone();
            engine.pause();
            slideshow.set(engine);
        })
    };

    let on_slider_leave = {
        let slideshow = slideshow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut engine = (*slideshow).clone();
            engine.resume();
            slideshow.set(engine);
        })
    };

    let go_to_slide = {
        let slideshow = slideshow.clone();
        Callback::from(move |index: usize| {
            let mut engine = (*slideshow).clone();
            match engine.go_to(index) {
                Ok(()) => slideshow.set(engine),
                Err(err) => warn!("ignoring indicator click: {err}"),
            }
        })
    };

    let on_card_click = {
        let navigator = navigator.clone();
        let destination = card.destination.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&destination))
    };

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| dark_mode.set(!*dark_mode))
    };

    let travel_class = match slideshow.direction() {
        Direction::Forward => "enter-forward",
        Direction::Backward => "enter-backward",
    };

    let card_style = format!(
        "background-image: url('{}'), linear-gradient(to bottom right, {}44, #00000088); \
         border: 1px solid {}88;",
        card.image, card.accent, card.accent
    );

    html! {
        <>
            <style>
                {r#"
                    @keyframes enterForward {
                        from {
                            transform: translateX(100%) scale(0.95);
                            opacity: 0;
                        }
                        to {
                            transform: translateX(0) scale(1);
                            opacity: 1;
                        }
                    }
                    @keyframes enterBackward {
                        from {
                            transform: translateX(-100%) scale(0.95);
                            opacity: 0;
                        }
                        to {
                            transform: translateX(0) scale(1);
                            opacity: 1;
                        }
                    }
                    .home-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 40px 24px;
                        font-family: 'Inter', sans-serif;
                        position: relative;
                        overflow: hidden;
                        background-image: url('https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&w=1050&q=80');
                        background-size: cover;
                        background-position: center;
                        background-attachment: fixed;
                    }
                    .home-content {
                        position: relative;
                        z-index: 2;
                        text-align: center;
                    }
                    .home-heading {
                        font-size: clamp(2rem, 6vw, 3.5rem);
                        font-weight: 800;
                        margin-bottom: 16px;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        line-height: 1.2;
                        letter-spacing: -0.05em;
                    }
                    .home-subtitle {
                        font-size: clamp(1rem, 2vw, 1.25rem);
                        font-weight: 500;
                        margin-bottom: 48px;
                        max-width: 600px;
                        margin-left: auto;
                        margin-right: auto;
                        line-height: 1.6;
                    }
                    .theme-toggle {
                        position: absolute;
                        top: 24px;
                        right: 24px;
                        z-index: 10;
                        border: none;
                        border-radius: 50%;
                        width: 44px;
                        height: 44px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        font-size: 20px;
                        box-shadow: 0 4px 12px rgba(0,0,0,0.1);
                        backdrop-filter: blur(8px);
                    }
                    .slider-region {
                        position: relative;
                        width: 100%;
                        max-width: 500px;
                        height: 360px;
                        margin: 0 auto;
                    }
                    .feature-card {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        border-radius: 24px;
                        text-align: center;
                        box-shadow: 0 20px 50px -10px rgba(0,0,0,0.3);
                        overflow: hidden;
                        cursor: pointer;
                        background-size: cover;
                        background-position: center;
                        background-blend-mode: overlay;
                        will-change: transform;
                    }
                    .feature-card.enter-forward {
                        animation: enterForward 0.5s ease-out;
                    }
                    .feature-card.enter-backward {
                        animation: enterBackward 0.5s ease-out;
                    }
                    .feature-card-overlay {
                        background-color: rgba(0, 0, 0, 0.5);
                        width: 100%;
                        height: 100%;
                        padding: 32px;
                        border-radius: 24px;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        backdrop-filter: blur(2px);
                        box-sizing: border-box;
                    }
                    .feature-card h3 {
                        font-size: clamp(1.5rem, 4vw, 2rem);
                        font-weight: 700;
                        margin-bottom: 16px;
                        color: #fff;
                    }
                    .feature-card p {
                        font-size: clamp(0.9rem, 2vw, 1rem);
                        max-width: 90%;
                        line-height: 1.6;
                        margin-bottom: 24px;
                        color: #eee;
                        text-shadow: 0 1px 2px rgba(0,0,0,0.3);
                    }
                    .learn-more {
                        margin-top: 20px;
                        padding: 8px 16px;
                        color: white;
                        border-radius: 12px;
                        display: inline-block;
                        font-weight: 600;
                        font-size: 14px;
                    }
                    .slider-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        border: none;
                        border-radius: 50%;
                        width: 44px;
                        height: 44px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        font-size: 20px;
                        box-shadow: 0 4px 12px rgba(0,0,0,0.15);
                        z-index: 3;
                        backdrop-filter: blur(8px);
                        transition: all 0.2s ease;
                    }
                    .slider-nav.left { left: 16px; }
                    .slider-nav.right { right: 16px; }
                    .indicator-row {
                        display: flex;
                        gap: 12px;
                        margin-top: 24px;
                        justify-content: center;
                    }
                    .indicator-dot {
                        height: 10px;
                        border-radius: 8px;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                "#}
            </style>
            <div
                class="home-page"
                style={format!("background-color: {};", if *dark_mode { "#0f172a" } else { "#f8fafc" })}
            >
                <button
                    class="theme-toggle"
                    style={format!("background: {}; color: {};", colors.nav_btn_bg, colors.text)}
                    onclick={toggle_theme}
                >
                    { if *dark_mode { "☀️" } else { "🌙" } }
                </button>

                <div class="home-content">
                    <h1
                        class="home-heading"
                        style={format!("background: linear-gradient(90deg, {}, {});", colors.primary, colors.secondary)}
                    >
                        {"Welcome to LegalConnect ⚖️"}
                    </h1>
                    <p class="home-subtitle" style={format!("color: {};", colors.muted_text)}>
                        {"Your trusted platform for legal solutions and professional connections"}
                    </p>

                    <div
                        class="slider-region"
                        onmouseenter={on_slider_enter}
                        onmouseleave={on_slider_leave}
                    >
                        <div
                            key={current}
                            class={classes!("feature-card", travel_class)}
                            style={card_style}
                            onclick={on_card_click}
                        >
                            <div class="feature-card-overlay">
                                <h3 style={format!("text-shadow: 0 2px 8px {};", card.accent)}>
                                    { card.title }
                                </h3>
                                <p>{ card.desc }</p>
                                <div class="learn-more" style={format!("background: {};", card.accent)}>
                                    {"Learn More"}
                                </div>
                            </div>
                        </div>

                        <button
                            class="slider-nav left"
                            style={format!("background: {}; color: {};", colors.nav_btn_bg, colors.text)}
                            onclick={on_prev}
                        >
                            {"‹"}
                        </button>
                        <button
                            class="slider-nav right"
                            style={format!("background: {}; color: {};", colors.nav_btn_bg, colors.text)}
                            onclick={on_next}
                        >
                            {"›"}
                        </button>
                    </div>

                    <div class="indicator-row">
                        { for slideshow.slides().iter().enumerate().map(|(index, slide)| {
                            let active = index == current;
                            let onclick = {
                                let go_to_slide = go_to_slide.clone();
                                Callback::from(move |_: MouseEvent| go_to_slide.emit(index))
                            };
                            html! {
                                <div
                                    key={index}
                                    class="indicator-dot"
                                    style={format!(
                                        "width: {}px; background: {}; opacity: {};",
                                        if active { 24 } else { 10 },
                                        if active { slide.accent } else { colors.muted_text },
                                        if active { "1" } else { "0.6" },
                                    )}
                                    {onclick}
                                ></div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </>
    }
}
