use yew::prelude::*;

use crate::content::{Brand, Link};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub links: Vec<Link>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, links } = props;

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-leaf">{"🍃"}</span>
                    {&brand.name}{" "}<span class="accent">{&brand.accent}</span>
                </a>

                <div class="nav-links">
                    { for links.iter().map(|link| html! {
                        <a href={link.href.clone()} class="nav-link">{&link.label}</a>
                    }) }
                </div>

                <a href="#fresh" class="nav-order">
                    <span>{"🛍️"}</span>
                    <span class="nav-order-label">{"Order Fresh"}</span>
                </a>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    background: rgba(5, 46, 22, 0.7);
                    border-bottom: 1px solid rgba(22, 101, 52, 0.3);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                    text-decoration: none;
                    letter-spacing: -0.025em;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .nav-link {
                    color: #dcfce7;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .nav-link:hover {
                    color: #a3e635;
                }

                .nav-order {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #a3e635;
                    color: #052e16;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: background 0.2s;
                }

                .nav-order:hover {
                    background: #bef264;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                    }
                }

                @media (max-width: 640px) {
                    .nav-order-label {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
