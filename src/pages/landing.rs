use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    banner::Banner,
    benefits::Benefits,
    footer::Footer,
    hero::Hero,
    product_card::{product_card_styles, ProductCard},
    reveal::Reveal,
    stats::Stats,
};
use crate::content::SiteContent;

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = use_context::<Rc<SiteContent>>();
    let Some(site) = site else {
        return html! {};
    };

    html! {
        <main class="landing-page">
            <Hero hero={site.hero.clone()} />
            <Stats stats={site.stats.clone()} />

            <section id="fresh" class="harvest">
                <Reveal class="harvest-heading">
                    <span class="eyebrow">{&site.harvest.eyebrow}</span>
                    <h2>{&site.harvest.title}</h2>
                </Reveal>

                <div class="product-grid">
                    { for site.products.iter().map(|product| html! {
                        <ProductCard
                            key={product.title.clone()}
                            product={product.clone()}
                            order_link={site.contact.order_link(Some(&product.title))}
                        />
                    }) }
                </div>
                { product_card_styles() }
            </section>

            <Benefits benefits={site.benefits.clone()} />
            <Banner banner={site.banner.clone()} order_link={site.contact.order_link(None)} />
            <Footer
                contact={site.contact.clone()}
                quick_links={site.quick_links.clone()}
                copyright={site.copyright.clone()}
            />

            <style>
                {r#"
                .harvest {
                    padding: 8rem 1.5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .harvest-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .eyebrow {
                    display: block;
                    color: #a3e635;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }

                .harvest h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin: 0;
                }

                .product-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                @media (max-width: 768px) {
                    .product-grid {
                        grid-template-columns: 1fr;
                    }
                    .harvest h2 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_component<C: BaseComponent>() {}

    #[test]
    fn landing_is_a_mountable_component() {
        assert_component::<Landing>();
    }
}
