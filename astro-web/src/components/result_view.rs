//! Result cards: planets, major periods, narrative and calls to action.

use super::{CARD_STYLE, TILE_STYLE};
use astro_session::render::{
    RenderedResult, HOUSE_LABEL, NAKSHATRA_LABEL, PLANETS_TITLE, PREDICTION_TITLE, SIGN_LABEL,
};
use dioxus::prelude::*;

const CARD_TITLE_STYLE: &str = "margin: 0 0 16px 0; font-size: 22px; color: #f1f5f9;";

#[derive(Props, Clone, PartialEq)]
pub struct ResultViewProps {
    pub rendered: RenderedResult,
}

#[component]
pub fn ResultView(props: ResultViewProps) -> Element {
    let rendered = props.rendered;
    let promo = rendered.promotions;

    rsx! {
        div {
            div {
                style: "{CARD_STYLE}",
                h2 { style: "{CARD_TITLE_STYLE}", "{PLANETS_TITLE}" }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px;",
                    for (index, planet) in rendered.planets.iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "{TILE_STYLE}",
                            h3 { style: "margin: 0 0 8px 0; color: #a78bfa;", "{planet.name}" }
                            p { style: "margin: 2px 0; color: #cbd5e1;", "{SIGN_LABEL}: {planet.sign}" }
                            p { style: "margin: 2px 0; color: #cbd5e1;", "{NAKSHATRA_LABEL}: {planet.nakshatra}" }
                            p { style: "margin: 2px 0; color: #cbd5e1;", "{HOUSE_LABEL}: {planet.house}" }
                        }
                    }
                }
            }

            if let Some(timeline) = rendered.periods.as_ref() {
                div {
                    style: "{CARD_STYLE}",
                    h2 { style: "{CARD_TITLE_STYLE}", "{timeline.title}" }
                    p { style: "margin: -8px 0 16px 0; font-size: 13px; color: #94a3b8;", "{timeline.note}" }
                    for (index, period) in timeline.periods.iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "{TILE_STYLE} margin-bottom: 10px;",
                            h3 { style: "margin: 0 0 6px 0; color: #818cf8;", "{period.planet}" }
                            p { style: "margin: 0; color: #cbd5e1; font-size: 14px;", "{period.span}" }
                        }
                    }
                }
            }

            div {
                style: "{CARD_STYLE}",
                h2 { style: "{CARD_TITLE_STYLE}", "{PREDICTION_TITLE}" }
                p {
                    style: "margin: 0; color: #e2e8f0; font-size: 18px; line-height: 1.6; white-space: pre-wrap;",
                    "{rendered.narrative}"
                }
            }

            div {
                style: "{CARD_STYLE} text-align: center;",
                h2 { style: "margin: 0 0 20px 0; font-size: 26px; color: #f1f5f9;", "{promo.headline}" }
                a {
                    href: promo.order_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    style: "display: inline-block; padding: 14px 28px; font-weight: 600; color: white; background: linear-gradient(to right, #7c3aed, #4f46e5); border-radius: 6px; text-decoration: none;",
                    "{promo.order_label}"
                }
                div {
                    style: "margin-top: 20px; color: #cbd5e1;",
                    for line in promo.highlights.iter() {
                        p { style: "margin: 6px 0;", "{line}" }
                    }
                }
            }

            div {
                style: "{CARD_STYLE}",
                h2 { style: "{CARD_TITLE_STYLE} text-align: center;", "{promo.examples_title}" }
                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap;",
                    for example in promo.examples.iter() {
                        a {
                            key: "{example.id}",
                            href: example.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            style: "{TILE_STYLE} flex: 1; display: flex; flex-direction: column; align-items: center; gap: 6px; text-decoration: none;",
                            span { style: "font-size: 18px; font-weight: 600; color: #f1f5f9;", "{example.title}" }
                            span { style: "font-size: 13px; color: #94a3b8;", "{example.format}" }
                        }
                    }
                }
            }
        }
    }
}
