/// Reusable UI components

use crate::bias::{BiasIndicator, score_label, slider_position};
use crate::history::HistoryRecord;
use crate::i18n::{BiasSliderLabels, Language, Translations};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    pub language: Language,
    pub english_label: &'static str,
    pub chinese_label: &'static str,
    pub on_toggle: Callback<()>,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let is_chinese = props.language == Language::Chinese;
    let label_class = |active: bool| {
        if active { "lang-label lang-label-active" } else { "lang-label" }
    };

    html! {
        <div class="language-toggle">
            <span class={label_class(!is_chinese)}>{props.english_label}</span>
            <label class="lang-switch">
                <input
                    type="checkbox"
                    id="language-toggle"
                    class="sr-only"
                    checked={is_chinese}
                    onchange={props.on_toggle.reform(|_: Event| ())}
                />
                <span class={if is_chinese { "lang-switch-dot lang-switch-dot-on" } else { "lang-switch-dot" }}></span>
            </label>
            <span class={label_class(is_chinese)}>{props.chinese_label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BiasSliderProps {
    pub score: f64,
    pub labels: &'static BiasSliderLabels,
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(BiasSlider)]
pub fn bias_slider(props: &BiasSliderProps) -> Html {
    let indicator = BiasIndicator::from_score(props.score);
    let (fill, border) = indicator.colors();
    let knob_size = if props.compact { 16 } else { 24 };

    let knob_style = format!(
        "left: calc({}% - {}px); width: {}px; height: {}px; background-color: {}; border: 2px solid {};",
        slider_position(props.score),
        knob_size / 2,
        knob_size,
        knob_size,
        fill,
        border
    );

    html! {
        <div class={if props.compact { "bias-slider bias-slider-compact" } else { "bias-slider" }}>
            <div class="bias-track">
                <div class={indicator.css_class()} style={knob_style} title={score_label(props.score)}>
                    if !props.compact {
                        <span class="bias-tooltip">{score_label(props.score)}</span>
                    }
                </div>
            </div>
            if !props.compact {
                <div class="bias-labels">
                    <span>{props.labels.left}</span>
                    <span>{props.labels.center}</span>
                    <span>{props.labels.right}</span>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleSummaryProps {
    pub heading: &'static str,
    pub summary: String,
    pub bias_score: Option<f64>,
    pub labels: &'static BiasSliderLabels,
}

#[function_component(ArticleSummaryCard)]
pub fn article_summary_card(props: &ArticleSummaryProps) -> Html {
    html! {
        <div class="summary-card">
            <div class="summary-header">
                <h2 class="summary-title">{props.heading}</h2>
                if let Some(score) = props.bias_score {
                    <BiasSlider score={score} labels={props.labels} />
                }
            </div>
            <p class="summary-text">{&props.summary}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PerspectivePanelsProps {
    pub left_heading: &'static str,
    pub right_heading: &'static str,
    pub left: String,
    pub right: String,
}

#[function_component(PerspectivePanels)]
pub fn perspective_panels(props: &PerspectivePanelsProps) -> Html {
    html! {
        <div class="perspectives-grid">
            <div class="perspective-card perspective-left">
                <h2 class="perspective-title">{"← "}{props.left_heading}</h2>
                <p class="perspective-text">{&props.left}</p>
            </div>
            <div class="perspective-card perspective-right">
                <h2 class="perspective-title">{props.right_heading}{" →"}</h2>
                <p class="perspective-text">{&props.right}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub heading: &'static str,
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="message-top-margin" role="alert">
            <Alert r#type={AlertType::Danger} title={props.heading} inline={true}>
                {props.message.clone()}
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub records: Vec<HistoryRecord>,
    pub translations: &'static Translations,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let t = props.translations;

    html! {
        <div class="history-container">
            <h2 class="history-title">{t.history_heading}</h2>
            if props.records.is_empty() {
                <p class="empty-state">{t.history_empty}</p>
            } else {
                <div class="history-list">
                    {for props.records.iter().map(|record| html! {
                        <div key={record.id.clone()} class="history-item">
                            <div class="history-item-header">
                                <p class="history-topic">{&record.topic}</p>
                                <span class="history-language">{record.language.code()}</span>
                            </div>
                            if let Some(score) = record.bias_score {
                                <BiasSlider score={score} labels={&t.bias_slider} compact={true} />
                            }
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
