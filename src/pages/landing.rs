use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::carousel::Carousel;
use crate::config::HERO_ROTATE_MS;
use crate::data::HERO_SLIDES;
use crate::theme::{slide_layer_style, splash_button_style};
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let slideshow = use_state(|| {
        Carousel::new(HERO_SLIDES.to_vec(), HERO_ROTATE_MS)
            .expect("hero slideshow has slides")
    });
    let is_hovered = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let current = slideshow.current_index();

    // Background rotation. This slideshow is deliberately the stripped
    // variant: autoplay only, no hover pause, no manual navigation.
    {
        let slideshow = slideshow.clone();
        use_effect_with_deps(
            move |_| {
                let interval_ms = slideshow.interval_ms();
                let interval = Interval::new(interval_ms, move || {
                    let mut engine = (*slideshow).clone();
                    engine.advance(interval_ms);
                    slideshow.set(engine);
                });
                move || drop(interval)
            },
            current,
        );
    }

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };

    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    let onclick = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Home))
    };

    html! {
        <>
            <style>
                {r#"
                    @keyframes fadeInUp {
                        0% {
                            opacity: 0;
                            transform: translateY(40px);
                        }
                        100% {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    .splash-page {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        font-family: 'Segoe UI', sans-serif;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background-color: #000;
                    }
                    .splash-overlay {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        width: 100%;
                        background: rgba(0, 0, 0, 0.5);
                        z-index: 1;
                        backdrop-filter: blur(4px);
                    }
                    .splash-card {
                        position: relative;
                        z-index: 2;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                        padding: 60px;
                        border-radius: 24px;
                        box-shadow: 0 10px 30px rgba(0,0,0,0.3);
                        max-width: 850px;
                        animation: fadeInUp 1.8s ease-out forwards;
                        opacity: 0;
                        transform: translateY(40px);
                    }
                    .splash-card h1 {
                        font-size: clamp(40px, 6vw, 72px);
                        color: #fff;
                        font-weight: 700;
                        margin-bottom: 24px;
                        text-shadow: 2px 2px 4px rgba(0,0,0,0.5);
                    }
                    .splash-card p {
                        font-size: clamp(18px, 2.5vw, 26px);
                        color: #eaeaea;
                        margin-bottom: 36px;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="splash-page">
                { for HERO_SLIDES.iter().enumerate().map(|(index, url)| html! {
                    <div key={index} style={slide_layer_style(url, index == current)}></div>
                }) }
                <div class="splash-overlay"></div>
                <div class="splash-card">
                    <h1>{"Empower Your Legal Journey ⚖️"}</h1>
                    <p>
                        {"Explore trusted legal resources, connect with professionals, and \
                          take control of your future — all at your fingertips."}
                    </p>
                    <button
                        style={splash_button_style(*is_hovered)}
                        {onmouseenter}
                        {onmouseleave}
                        {onclick}
                    >
                        {"Start Exploring 🌍"}
                    </button>
                </div>
            </div>
        </>
    }
}
