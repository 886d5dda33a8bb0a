use yew::prelude::*;

use crate::data::services;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(Services)]
pub fn services_page(props: &ServicesProps) -> Html {
    let card_shadow = if props.dark {
        "0 4px 12px rgba(255,255,255,0.05)"
    } else {
        "0 4px 12px rgba(0,0,0,0.1)"
    };

    html! {
        <>
            <style>
                {r#"
                    @keyframes dropIn {
                        from {
                            opacity: 0;
                            transform: translateY(-40px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    @keyframes riseIn {
                        from {
                            opacity: 0;
                            transform: translateY(30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    .services-page {
                        min-height: 100vh;
                        padding: 60px 20px;
                        font-family: 'Segoe UI', sans-serif;
                    }
                    .services-header {
                        text-align: center;
                        margin-bottom: 40px;
                        animation: dropIn 0.7s ease-out;
                    }
                    .services-header h1 {
                        font-size: 38px;
                        font-weight: bold;
                    }
                    .services-header p {
                        font-size: 18px;
                        max-width: 600px;
                        margin: 10px auto 0;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 30px;
                        padding: 20px;
                    }
                    .service-card {
                        border-radius: 20px;
                        padding: 30px;
                        text-align: center;
                        transition: all 0.3s ease;
                        cursor: pointer;
                        animation: riseIn 0.5s ease-out both;
                    }
                    .service-card:hover {
                        transform: scale(1.05);
                    }
                    .service-card .emoji {
                        font-size: 50px;
                        margin-bottom: 15px;
                    }
                    .service-card h3 {
                        font-size: 22px;
                        font-weight: 600;
                        margin-bottom: 10px;
                    }
                    .service-card p {
                        font-size: 16px;
                        opacity: 0.85;
                    }
                "#}
            </style>
            <div
                class="services-page"
                style={format!(
                    "background: {}; color: {};",
                    if props.dark { "#1e1e1e" } else { "#f9f9f9" },
                    if props.dark { "#f0f0f0" } else { "#1d1d1d" },
                )}
            >
                <div class="services-header">
                    <h1>{"Legal Services We Offer"}</h1>
                    <p>
                        {"Access legal consultations, contract reviews, case filings, \
                          documentation, and more — all in one place."}
                    </p>
                </div>

                <div class="services-grid">
                    { for services().iter().enumerate().map(|(index, service)| html! {
                        <div
                            key={service.title}
                            class="service-card"
                            style={format!(
                                "background: {}; box-shadow: {}; animation-delay: {}ms;",
                                if props.dark { "#2c2c2c" } else { "#fff" },
                                card_shadow,
                                index * 100,
                            )}
                        >
                            <div class="emoji">{ service.emoji }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </>
    }
}
