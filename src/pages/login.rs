use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::theme::{bubble_style, login_button_style};
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let is_hovered = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };

    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    // No credential check behind this form; the button walks straight
    // through to the landing splash.
    let onclick = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push(&Route::Landing);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    @keyframes gradientFlow {
                        0% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                        100% { background-position: 0% 50%; }
                    }
                    @keyframes slideIn {
                        to {
                            transform: translateY(0);
                            opacity: 1;
                        }
                    }
                    @keyframes fadeText {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes pulse {
                        0% { box-shadow: 0 0 0px #7f56d9aa; }
                        50% { box-shadow: 0 0 15px #7f56d9aa; }
                        100% { box-shadow: 0 0 0px #7f56d9aa; }
                    }
                    @keyframes floatBubble {
                        0% { transform: translateY(0px) scale(1); }
                        50% { transform: translateY(-80px) scale(1.05); }
                        100% { transform: translateY(0px) scale(1); }
                    }
                    .login-page {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100vh;
                        font-family: 'Segoe UI', sans-serif;
                        overflow: hidden;
                        z-index: 1;
                    }
                    .login-backdrop {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        width: 100%;
                        background: linear-gradient(-45deg, #667eea, #764ba2, #6b73ff, #a87dfa);
                        background-size: 400% 400%;
                        animation: gradientFlow 20s ease infinite;
                        z-index: -3;
                    }
                    .login-card {
                        background-color: rgba(255, 255, 255, 0.95);
                        padding: 40px;
                        border-radius: 20px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                        width: 350px;
                        animation: slideIn 1s ease forwards;
                        transform: translateY(50px);
                        opacity: 0;
                        z-index: 10;
                    }
                    .login-card h2 {
                        text-align: center;
                        margin-bottom: 20px;
                        font-size: 30px;
                        font-weight: bold;
                        color: #333;
                        animation: fadeText 1.5s ease-in-out;
                    }
                    .login-input {
                        width: 100%;
                        padding: 12px;
                        margin: 12px 0;
                        border: 1px solid #ccc;
                        border-radius: 8px;
                        font-size: 16px;
                        transition: 0.4s ease all;
                        outline: none;
                        box-sizing: border-box;
                    }
                    .login-input:focus {
                        border-color: #7f56d9;
                        box-shadow: 0 0 8px #7f56d955;
                    }
                "#}
            </style>
            <div class="login-page">
                <div class="login-backdrop"></div>
                // Floating blurred circles
                <div style={bubble_style("10%", "20%", "120px", "0s")}></div>
                <div style={bubble_style("40%", "70%", "180px", "2s")}></div>
                <div style={bubble_style("70%", "10%", "100px", "4s")}></div>
                <div style={bubble_style("60%", "50%", "150px", "6s")}></div>

                <form class="login-card">
                    <h2>{"🌟 Welcome Back"}</h2>
                    <input type="text" placeholder="Username" class="login-input" />
                    <input type="password" placeholder="Password" class="login-input" />
                    <button
                        style={login_button_style(*is_hovered)}
                        {onmouseenter}
                        {onmouseleave}
                        {onclick}
                    >
                        {"Login"}
                    </button>
                </form>
            </div>
        </>
    }
}
