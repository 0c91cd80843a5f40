use yew::prelude::*;

use crate::content::HeroContent;
use crate::motion::hooks::use_scroll_transform;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let section = use_node_ref();
    let background = use_node_ref();

    // The background drifts down and fades while the hero scrolls away
    use_scroll_transform(section.clone(), background.clone());

    html! {
        <section ref={section} class="hero">
            <div ref={background} class="hero-background">
                <div class="hero-overlay"></div>
                <img src={hero.image.clone()} alt={hero.image_alt.clone()} />
            </div>

            <div class="hero-content">
                <div class="hero-badge enter" style="animation-delay: 0s;">
                    {&hero.badge}
                </div>
                <h1 class="enter" style="animation-delay: 0.2s;">
                    {&hero.headline}<br />
                    <span class="accent">{&hero.headline_accent}</span>
                </h1>
                <p class="hero-lead enter" style="animation-delay: 0.4s;">
                    {&hero.lead}
                </p>
                <a href="#fresh" class="hero-cta enter-pop" style="animation-delay: 0.6s;">
                    {&hero.cta}{" →"}
                </a>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(
                        to bottom,
                        rgba(5, 46, 22, 0.6),
                        rgba(20, 83, 45, 0.4),
                        #052e16
                    );
                }

                .hero-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                    padding: 0 1rem;
                    max-width: 64rem;
                    margin: 2.5rem auto 0;
                }

                .hero-badge {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.25rem 1rem;
                    border: 1px solid rgba(163, 230, 53, 0.3);
                    border-radius: 9999px;
                    background: rgba(20, 83, 45, 0.5);
                    backdrop-filter: blur(4px);
                    color: #bef264;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.025em;
                }

                .hero h1 {
                    font-size: 6rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0 0 1.5rem;
                    line-height: 1.1;
                }

                .hero-lead {
                    font-size: 1.25rem;
                    color: #dcfce7;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }

                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #84cc16;
                    color: #052e16;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 0 20px rgba(132, 204, 22, 0.4);
                    transition: background 0.2s;
                }

                .hero-cta:hover {
                    background: #a3e635;
                }

                .enter {
                    opacity: 0;
                    animation: heroRise 0.8s ease-out forwards;
                }

                .enter-pop {
                    opacity: 0;
                    animation: heroPop 0.5s ease-out forwards;
                }

                @keyframes heroRise {
                    from {
                        opacity: 0;
                        transform: translateY(30px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                @keyframes heroPop {
                    from {
                        opacity: 0;
                        transform: scale(0.9);
                    }
                    to {
                        opacity: 1;
                        transform: scale(1);
                    }
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .hero-lead {
                        font-size: 1.125rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
