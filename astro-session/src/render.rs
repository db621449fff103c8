//! Mapping of session state and results into display sections.
//!
//! Pure functions only. The web front end turns these into markup; the CLI
//! prints them through their `Display` impls.

use crate::session::Session;
use crate::submission::Outcome;
use astro_core::city::CityCandidate;
use astro_core::prediction::PredictionResult;
use std::fmt;

pub const PLANETS_TITLE: &str = "Положение планет";
pub const SIGN_LABEL: &str = "Знак";
pub const NAKSHATRA_LABEL: &str = "Накшатра";
pub const HOUSE_LABEL: &str = "Дом";
pub const PERIODS_TITLE: &str = "Периоды (Махадаша) на 2026 год";
pub const PERIODS_NOTE: &str =
    "Расчет по системе Вимшоттари Даша с использованием Саваны года (360 дней)";
pub const PREDICTION_TITLE: &str = "Астрологический прогноз на 2026 год";
pub const COORDINATES_LABEL: &str = "Координаты";

/// Calls to action shown under every result.
pub static PROMOTIONS: Promotions = Promotions {
    headline: "Получите полный астрологический прогноз на 2026 год от Берта Маковера",
    order_label: "Заказать полный прогноз",
    order_url: "https://get.vedicastrologyonline.ru/2026",
    highlights: &[
        "С учётом главного периода, подпериода и подподпериода.",
        "По всем основным сферам жизни.",
        "Анализ каждого месяца и его влияние на ваше состояние.",
        "А также рекомендации и практики для гармонизации неблагоприятного влияния.",
    ],
    examples_title: "Примеры прогнозов",
    examples: &[
        ExampleLink {
            id: "example-brief",
            title: "Краткий прогноз",
            format: "(текст)",
            url: "https://docs.google.com/document/d/1pUxAPeaNXqFBuXpUkZ7RRxZGg_l6E3oBePHUdQ5aKpE/edit?usp=sharing",
        },
        ExampleLink {
            id: "example-basic",
            title: "Базовый прогноз",
            format: "(текст)",
            url: "https://docs.google.com/document/d/1oTqJcEghZgFHY7BqDsk6VC1PqROCJ7W3tbpVgV42RF0/edit?usp=sharing",
        },
        ExampleLink {
            id: "example-full",
            title: "Полный прогноз",
            format: "(видео)",
            url: "https://kinescope.io/iU3a8qJcruYue4j2GcMvQF",
        },
    ],
};

#[derive(Debug, PartialEq)]
pub struct Promotions {
    pub headline: &'static str,
    pub order_label: &'static str,
    pub order_url: &'static str,
    pub highlights: &'static [&'static str],
    pub examples_title: &'static str,
    pub examples: &'static [ExampleLink],
}

#[derive(Debug, PartialEq)]
pub struct ExampleLink {
    pub id: &'static str,
    pub title: &'static str,
    /// "(текст)" or "(видео)"
    pub format: &'static str,
    pub url: &'static str,
}

/// One planet card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetEntry {
    pub name: String,
    pub sign: String,
    pub nakshatra: String,
    pub house: String,
}

/// One row of the major-period timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodEntry {
    pub planet: String,
    /// "start — end", both exactly as received
    pub span: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTimeline {
    pub title: &'static str,
    pub note: &'static str,
    pub periods: Vec<PeriodEntry>,
}

/// A result laid out into its display sections.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub planets: Vec<PlanetEntry>,
    /// `None` when there are no periods: the section is left out entirely
    pub periods: Option<PeriodTimeline>,
    pub narrative: String,
    pub promotions: &'static Promotions,
}

/// One row of the city suggestion list.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub index: usize,
    pub title: String,
    /// Country and coordinates, to tell same-named places apart
    pub detail: String,
}

/// Everything the result area can show; exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Empty,
    Loading,
    Error(String),
    Result(RenderedResult),
}

pub fn render_result(result: &PredictionResult) -> RenderedResult {
    let planets = result
        .planets
        .iter()
        .map(|p| PlanetEntry {
            name: p.name.clone(),
            sign: p.sign.clone(),
            nakshatra: p.nakshatra.clone(),
            house: p.house.clone(),
        })
        .collect();

    let periods = (!result.major_periods.is_empty()).then(|| PeriodTimeline {
        title: PERIODS_TITLE,
        note: PERIODS_NOTE,
        periods: result
            .major_periods
            .iter()
            .map(|p| PeriodEntry {
                planet: p.planet.clone(),
                span: format!("{} — {}", p.start, p.end),
            })
            .collect(),
    });

    RenderedResult {
        planets,
        periods,
        narrative: result.narrative.clone(),
        promotions: &PROMOTIONS,
    }
}

pub fn render_candidates(candidates: &[CityCandidate]) -> Vec<CandidateRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, c)| CandidateRow {
            index,
            title: c.name.clone(),
            detail: format!(
                "{} · {}: {:.2}, {:.2}",
                c.country, COORDINATES_LABEL, c.latitude, c.longitude
            ),
        })
        .collect()
}

pub fn display_state(session: &Session) -> DisplayState {
    if session.is_loading() {
        return DisplayState::Loading;
    }
    match session.outcome() {
        Outcome::Empty => DisplayState::Empty,
        Outcome::Failed(message) => DisplayState::Error(message.clone()),
        Outcome::Ready(result) => DisplayState::Result(render_result(result)),
    }
}

impl fmt::Display for PlanetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}: {}", SIGN_LABEL, self.sign)?;
        writeln!(f, "  {}: {}", NAKSHATRA_LABEL, self.nakshatra)?;
        write!(f, "  {}: {}", HOUSE_LABEL, self.house)
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", PLANETS_TITLE)?;
        for planet in &self.planets {
            writeln!(f, "{}", planet)?;
        }

        if let Some(timeline) = &self.periods {
            writeln!(f)?;
            writeln!(f, "== {} ==", timeline.title)?;
            writeln!(f, "{}", timeline.note)?;
            for period in &timeline.periods {
                writeln!(f, "{}: {}", period.planet, period.span)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "== {} ==", PREDICTION_TITLE)?;
        writeln!(f, "{}", self.narrative)?;

        let promo = self.promotions;
        writeln!(f)?;
        writeln!(f, "== {} ==", promo.headline)?;
        writeln!(f, "{}: {}", promo.order_label, promo.order_url)?;
        for line in promo.highlights {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "== {} ==", promo.examples_title)?;
        for example in promo.examples {
            writeln!(f, "{} {}: {}", example.title, example.format, example.url)?;
        }
        Ok(())
    }
}

impl fmt::Display for CandidateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}\n    {}", self.index, self.title, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_core::birth::FormField;
    use astro_core::error::ComputeError;
    use astro_core::prediction::{MajorPeriod, PlanetPosition};

    fn planet(name: &str, sign: &str, nakshatra: &str, house: &str) -> PlanetPosition {
        PlanetPosition {
            name: name.to_string(),
            sign: sign.to_string(),
            nakshatra: nakshatra.to_string(),
            house: house.to_string(),
        }
    }

    fn result_with_periods(major_periods: Vec<MajorPeriod>) -> PredictionResult {
        PredictionResult {
            planets: vec![
                planet("Сатурн", "Козерог", "Шравана", "5"),
                planet("Солнце", "Телец", "Криттика", "9"),
                planet("Сатурн", "Козерог", "Шравана", "5"),
            ],
            major_periods,
            narrative: "Первый абзац.\n\n  Второй абзац с отступом.  ".to_string(),
        }
    }

    #[test]
    fn planets_keep_order_and_duplicates() {
        let rendered = render_result(&result_with_periods(Vec::new()));
        let names: Vec<&str> = rendered.planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Сатурн", "Солнце", "Сатурн"]);
        assert_eq!(rendered.planets[1].nakshatra, "Криттика");
        assert_eq!(rendered.planets[1].house, "9");
    }

    #[test]
    fn empty_periods_omit_the_section() {
        let rendered = render_result(&result_with_periods(Vec::new()));
        assert_eq!(rendered.periods, None);
        assert!(!rendered.to_string().contains(PERIODS_TITLE));
    }

    #[test]
    fn periods_render_in_order_with_raw_dates() {
        let rendered = render_result(&result_with_periods(vec![
            MajorPeriod {
                planet: "Раху".to_string(),
                start: "12-02-2019 10:00".to_string(),
                end: "12-02-2037 10:00".to_string(),
            },
            MajorPeriod {
                planet: "Юпитер".to_string(),
                start: "12-02-2037 10:00".to_string(),
                end: "12-02-2053 10:00".to_string(),
            },
        ]));
        let timeline = rendered.periods.as_ref().unwrap();
        assert_eq!(timeline.title, PERIODS_TITLE);
        assert_eq!(timeline.periods[0].planet, "Раху");
        assert_eq!(timeline.periods[0].span, "12-02-2019 10:00 — 12-02-2037 10:00");
        assert_eq!(timeline.periods[1].planet, "Юпитер");
        assert!(rendered.to_string().contains(PERIODS_NOTE));
    }

    #[test]
    fn narrative_is_verbatim() {
        let result = result_with_periods(Vec::new());
        let rendered = render_result(&result);
        assert_eq!(rendered.narrative, result.narrative);
        assert!(rendered.to_string().contains(&result.narrative));
    }

    #[test]
    fn promotions_do_not_depend_on_result() {
        let a = render_result(&result_with_periods(Vec::new()));
        let b = render_result(&PredictionResult::default());
        assert!(std::ptr::eq(a.promotions, b.promotions));
        assert_eq!(a.promotions.examples.len(), 3);
        assert!(b.to_string().contains(PROMOTIONS.order_url));
    }

    #[test]
    fn candidate_rows_show_country_and_rounded_coordinates() {
        let rows = render_candidates(&[CityCandidate {
            name: "Москва".to_string(),
            country: "Россия".to_string(),
            latitude: 55.7558,
            longitude: 37.6173,
            timezone: 3.0,
        }]);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].title, "Москва");
        assert_eq!(rows[0].detail, "Россия · Координаты: 55.76, 37.62");
    }

    #[test]
    fn display_state_is_exclusive() {
        let mut session = Session::new();
        assert_eq!(display_state(&session), DisplayState::Empty);

        session.set_field(FormField::BirthDate, "1990-05-15");
        session.set_field(FormField::BirthTime, "14:30");
        session.set_field(FormField::Latitude, "55.7558");
        session.set_field(FormField::Longitude, "37.6173");
        session.set_field(FormField::Timezone, "3");

        let ticket = session.begin_submit().unwrap();
        assert_eq!(display_state(&session), DisplayState::Loading);
        session.complete_submit(
            ticket,
            Err(ComputeError::Rejected {
                status: 500,
                detail: Some("Prediction error: boom".to_string()),
            }),
        );
        assert_eq!(
            display_state(&session),
            DisplayState::Error("Prediction error: boom".to_string())
        );

        let ticket = session.begin_submit().unwrap();
        assert_eq!(display_state(&session), DisplayState::Loading);
        let result = result_with_periods(Vec::new());
        session.complete_submit(ticket, Ok(result.clone()));
        assert_eq!(display_state(&session), DisplayState::Result(render_result(&result)));
    }

    #[test]
    fn moscow_1990_renders_response_verbatim() {
        let mut session = Session::new();
        session.set_field(FormField::BirthDate, "1990-05-15");
        session.set_field(FormField::BirthTime, "14:30");
        session.set_field(FormField::Latitude, "55.7558");
        session.set_field(FormField::Longitude, "37.6173");
        session.set_field(FormField::Timezone, "3");

        let ticket = session.begin_submit().unwrap();
        let payload = *ticket.payload();
        assert_eq!(payload.birth_date.to_string(), "1990-05-15");
        assert_eq!(payload.latitude, 55.7558);

        let response = astro_core::wire::parse_prediction(
            r#"{"planets":[{"name":"Солнце","sign":"Телец","nakshatra":"Криттика","house":9}],
                "vdasha":[],
                "prediction":"В 2026 году фокус сместится на карьеру."}"#,
        )
        .unwrap();
        session.complete_submit(ticket, Ok(response));

        let DisplayState::Result(rendered) = display_state(&session) else {
            panic!("expected a result");
        };
        assert_eq!(
            rendered.planets[0],
            PlanetEntry {
                name: "Солнце".to_string(),
                sign: "Телец".to_string(),
                nakshatra: "Криттика".to_string(),
                house: "9".to_string(),
            }
        );
        assert_eq!(rendered.narrative, "В 2026 году фокус сместится на карьеру.");
        assert!(rendered.periods.is_none());
    }
}
