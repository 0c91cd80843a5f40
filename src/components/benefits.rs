use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Benefits as BenefitsContent;
use crate::motion::reveal::RevealFrom;

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub benefits: BenefitsContent,
}

#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    let b = &props.benefits;

    html! {
        <section id="process" class="benefits">
            <div class="benefits-grid">
                <Reveal from={RevealFrom::Left(50.0)}>
                    <h2>{&b.title}{" "}<span class="accent">{&b.title_accent}</span></h2>
                    <p class="benefits-intro">{&b.intro}</p>
                    <ul class="benefit-list">
                        { for b.items.iter().map(|item| html! {
                            <li>
                                <div class="benefit-icon">{&item.icon}</div>
                                <div>
                                    <h4>{&item.title}</h4>
                                    <p>{&item.text}</p>
                                </div>
                            </li>
                        }) }
                    </ul>
                </Reveal>

                <Reveal from={RevealFrom::Scale(0.9)} class="benefits-photo">
                    <img src={b.image.clone()} alt={b.image_alt.clone()} loading="lazy" />
                    <div class="testimonial">
                        <div class="testimonial-card">
                            <p class="testimonial-quote">{format!("\"{}\"", b.quote)}</p>
                            <p class="testimonial-author">{format!("- {}", b.quote_author)}</p>
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .benefits {
                    padding: 6rem 0;
                    background: #052e16;
                    position: relative;
                }

                .benefits-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .benefits h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0 0 1.5rem;
                }

                .benefits-intro {
                    color: #bbf7d0;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    margin-bottom: 2rem;
                }

                .benefit-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .benefit-list li {
                    display: flex;
                    gap: 1rem;
                }

                .benefit-icon {
                    background: rgba(132, 204, 22, 0.2);
                    padding: 0.75rem;
                    border-radius: 9999px;
                    height: fit-content;
                    font-size: 1.25rem;
                    line-height: 1;
                }

                .benefit-list h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0;
                }

                .benefit-list p {
                    color: #4ade80;
                    margin: 0;
                }

                .benefits-photo {
                    position: relative;
                    height: 600px;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    border: 1px solid #166534;
                }

                .benefits-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .testimonial {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 2rem;
                    background: linear-gradient(to top, #052e16, transparent);
                }

                .testimonial-card {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .testimonial-quote {
                    color: #ffffff;
                    font-style: italic;
                    margin: 0;
                }

                .testimonial-author {
                    color: #a3e635;
                    margin: 0.5rem 0 0;
                    font-weight: 700;
                }

                @media (max-width: 768px) {
                    .benefits-grid {
                        grid-template-columns: 1fr;
                    }
                    .benefits h2 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
