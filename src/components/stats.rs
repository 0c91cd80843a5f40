use yew::prelude::*;

use crate::content::Stat;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: Vec<Stat>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    html! {
        <div class="stats-strip">
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">{&stat.value}</div>
                        <div class="stat-label">{&stat.label}</div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .stats-strip {
                    position: relative;
                    z-index: 20;
                    background: #052e16;
                    border-top: 1px solid rgba(22, 101, 52, 0.3);
                    border-bottom: 1px solid rgba(22, 101, 52, 0.3);
                }

                .stats-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 0.25rem;
                }

                .stat-label {
                    color: #4ade80;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .stat-value {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
