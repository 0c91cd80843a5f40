use yew::prelude::*;

use crate::content::{Contact, Link};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact: Contact,
    pub quick_links: Vec<Link>,
    pub copyright: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { contact, quick_links, copyright } = props;

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"🍃 "}{&contact.farm_name}</div>
                    <p class="footer-about">{&contact.about}</p>
                </div>

                <div>
                    <h4>{"Visit Us"}</h4>
                    <ul class="footer-contact">
                        <li>
                            <span class="footer-icon">{"📍"}</span>
                            <span>
                                { for contact.address.iter().enumerate().map(|(i, line)| html! {
                                    <>
                                        if i > 0 { <br /> }
                                        {line}
                                    </>
                                }) }
                            </span>
                        </li>
                        <li>
                            <span class="footer-icon">{"📞"}</span>
                            <span>{&contact.phone}</span>
                        </li>
                    </ul>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <div class="footer-links">
                        { for quick_links.iter().map(|link| html! {
                            <a href={link.href.clone()}>{&link.label}</a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">{copyright}</div>
            <style>
                {r#"
                .site-footer {
                    background: #14532d;
                    border-top: 1px solid #166534;
                    padding: 5rem 0 2.5rem;
                }

                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }

                .footer-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }

                .footer-about {
                    color: #bbf7d0;
                    max-width: 24rem;
                }

                .site-footer h4 {
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin: 0 0 1.5rem;
                }

                .footer-contact {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: #bbf7d0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .footer-contact li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }

                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-links a {
                    color: #bbf7d0;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #a3e635;
                }

                .footer-bottom {
                    text-align: center;
                    color: rgba(74, 222, 128, 0.6);
                    font-size: 0.875rem;
                    border-top: 1px solid #166534;
                    padding-top: 2rem;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
