use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Product;
use crate::motion::reveal::RevealFrom;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub order_link: String,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <Reveal from={RevealFrom::Below(50.0)} delay_ms={product.delay_ms} class="product-card">
            <div class="product-image">
                <div class="product-shade"></div>
                <img src={product.image.clone()} alt={product.title.clone()} loading="lazy" />
                <h3 class="product-title">{&product.title}</h3>
            </div>
            <div class="product-body">
                <p class="product-description">{&product.description}</p>
                <div class="product-footer">
                    <span class="product-price">{&product.price}</span>
                    <a
                        href={props.order_link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="product-add"
                    >
                        {"Add"}
                    </a>
                </div>
            </div>
        </Reveal>
    }
}

/// Card styles, rendered once by the grid rather than per card.
pub fn product_card_styles() -> Html {
    html! {
        <style>
            {r#"
            .product-card {
                background: rgba(20, 83, 45, 0.4);
                border-radius: 1.5rem;
                overflow: hidden;
                border: 1px solid rgba(22, 101, 52, 0.5);
            }

            .product-card:hover {
                border-color: rgba(132, 204, 22, 0.5);
                background: rgba(20, 83, 45, 0.6);
            }

            .product-image {
                height: 18rem;
                overflow: hidden;
                position: relative;
            }

            .product-shade {
                position: absolute;
                inset: 0;
                z-index: 10;
                background: linear-gradient(to top, rgba(5, 46, 22, 0.8), transparent);
            }

            .product-image img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.7s;
            }

            .product-card:hover .product-image img {
                transform: scale(1.1);
            }

            .product-title {
                position: absolute;
                bottom: 1rem;
                left: 1rem;
                z-index: 20;
                margin: 0;
                font-size: 1.5rem;
                font-weight: 700;
                color: #ffffff;
            }

            .product-body {
                padding: 1.5rem;
            }

            .product-description {
                color: #bbf7d0;
                margin: 0 0 1.5rem;
                min-height: 48px;
            }

            .product-footer {
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .product-price {
                font-size: 1.5rem;
                font-weight: 700;
                color: #a3e635;
            }

            .product-add {
                background: #ffffff;
                color: #052e16;
                padding: 0.5rem 1.5rem;
                border-radius: 0.75rem;
                font-weight: 700;
                text-decoration: none;
                transition: background 0.2s;
            }

            .product-add:hover {
                background: #a3e635;
            }
            "#}
        </style>
    }
}
