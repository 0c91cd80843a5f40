use yew::prelude::*;

use crate::content::Banner as BannerContent;

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub banner: BannerContent,
    pub order_link: String,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let BannerProps { banner, order_link } = props;
    let texture = format!("background-image: url('{}');", banner.texture);

    html! {
        <section class="promo-banner">
            <div class="promo-texture" style={texture}></div>
            <div class="promo-content">
                <h2>{&banner.title}</h2>
                <p>{&banner.text}</p>
                <a href={order_link.clone()} target="_blank" rel="noopener noreferrer" class="promo-cta">
                    {&banner.cta}
                </a>
            </div>
            <style>
                {r#"
                .promo-banner {
                    padding: 5rem 0;
                    background: #a3e635;
                    color: #052e16;
                    position: relative;
                    overflow: hidden;
                }

                .promo-texture {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }

                .promo-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                    position: relative;
                    z-index: 10;
                }

                .promo-content h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .promo-content p {
                    font-size: 1.25rem;
                    font-weight: 500;
                    margin: 0 0 2rem;
                    opacity: 0.8;
                }

                .promo-cta {
                    display: inline-block;
                    background: #052e16;
                    color: #ffffff;
                    padding: 1rem 2.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: all 0.2s;
                }

                .promo-cta:hover {
                    background: #ffffff;
                    color: #052e16;
                }

                @media (max-width: 768px) {
                    .promo-content h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
