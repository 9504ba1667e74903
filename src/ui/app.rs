/// Main page: language toggle, topic form, results and history

use crate::analysis::AnalysisResult;
use crate::config::AppConfig;
use crate::firebase::{self, Subscription};
use crate::gemini::GeminiClient;
use crate::history::HistoryRecord;
use crate::i18n::Language;
use crate::input::{AnalysisInput, classify};
use crate::perspectives::fetch_perspectives;
use crate::state::{AppAction, AppState, RequestTracker};
use crate::ui::components::{
    ArticleSummaryCard, ErrorBanner, HistoryPanel, LanguageToggle, PerspectivePanels,
};
use patternfly_yew::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

struct Services {
    config: AppConfig,
    client: GeminiClient,
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        let config = AppConfig::load();
        let client = GeminiClient::new(&config);
        Services { config, client }
    });
    let state = use_reducer(AppState::default);
    let tracker = use_mut_ref(RequestTracker::default);
    let t = state.translations();

    // Sign in anonymously and track the current user
    {
        let dispatcher = state.dispatcher();
        let firebase_config = services.config.firebase.clone();

        use_effect_with((), move |_| {
            let subscription: Option<Subscription> = match firebase_config {
                Some(firebase_config) => match firebase::init(&firebase_config) {
                    Ok(()) => Some(firebase::watch_auth(move |user| match user {
                        Some(user) => {
                            log::info!("Signed in as {} (anonymous: {})", user.uid, user.is_anonymous);
                            dispatcher.dispatch(AppAction::SignedIn(user.uid));
                        }
                        None => {
                            dispatcher.dispatch(AppAction::SignedOut);
                            spawn_local(async move {
                                if let Err(e) = firebase::sign_in_anonymously().await {
                                    log::error!("{}", e);
                                }
                            });
                        }
                    })),
                    Err(e) => {
                        log::error!("{}", e);
                        None
                    }
                },
                None => {
                    log::info!("No Firebase config; history disabled");
                    None
                }
            };
            move || drop(subscription)
        });
    }

    // Follow the signed-in user's history
    {
        let dispatcher = state.dispatcher();

        use_effect_with(state.uid.clone(), move |uid| {
            let subscription = uid.as_ref().map(|uid| {
                firebase::subscribe_history(uid, move |records| {
                    dispatcher.dispatch(AppAction::HistoryUpdated(records));
                })
            });
            move || drop(subscription)
        });
    }

    let on_toggle_language = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(AppAction::ToggleLanguage))
    };

    let on_topic_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(AppAction::SetTopic(input.value()));
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let services = services.clone();
        let tracker = tracker.clone();

        Callback::from(move |_: ()| {
            if !state.can_submit() {
                return;
            }

            let request_id = tracker.borrow_mut().begin();
            let input = classify(&state.topic);
            let language = state.language;
            let uid = state.uid.clone();
            let dispatcher = state.dispatcher();
            let services = services.clone();
            let tracker = tracker.clone();

            log::info!("Request {}: analyzing {:?}", request_id, input);
            state.dispatch(AppAction::Submit { request_id });

            spawn_local(async move {
                match fetch_perspectives(&services.client, &input, language).await {
                    Ok(result) => {
                        dispatcher.dispatch(AppAction::Succeeded {
                            request_id,
                            result: result.clone(),
                        });
                        if !tracker.borrow().is_current(request_id) {
                            log::debug!("Request {} superseded; not saving to history", request_id);
                        } else if let Some(uid) = uid {
                            save_to_history(&uid, &input, &result, language).await;
                        }
                    }
                    Err(error) => {
                        dispatcher.dispatch(AppAction::Failed { request_id, error });
                    }
                }
            });
        })
    };

    let on_keypress = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };

    html! {
        <div class="page">
            <div class="card">
                <LanguageToggle
                    language={state.language}
                    english_label={t.english_option}
                    chinese_label={t.chinese_option}
                    on_toggle={on_toggle_language}
                />

                <h1 class="main-title">{t.title}</h1>
                <p class="tagline">{t.tagline}</p>

                <div class="search-container">
                    <input
                        type="text"
                        class="search-input"
                        placeholder={t.input_placeholder}
                        value={state.topic.clone()}
                        oninput={on_topic_input}
                        onkeypress={on_keypress}
                    />
                    <Button
                        onclick={on_submit.reform(|_: MouseEvent| ())}
                        disabled={!state.can_submit()}
                        variant={ButtonVariant::Primary}
                    >
                        {if state.is_loading() { t.analyzing_button } else { t.get_perspectives_button }}
                    </Button>
                </div>

                if state.is_loading() {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                }

                if let Some(message) = state.error_message() {
                    <ErrorBanner heading={t.error_heading} message={message} />
                }

                if !state.result.article_summary.is_empty() {
                    <ArticleSummaryCard
                        heading={t.article_summary_heading}
                        summary={state.result.article_summary.clone()}
                        bias_score={state.result.bias_score}
                        labels={&t.bias_slider}
                    />
                }

                if state.has_perspectives() {
                    <PerspectivePanels
                        left_heading={t.left_perspective_heading}
                        right_heading={t.right_perspective_heading}
                        left={state.result.left_perspective.clone()}
                        right={state.result.right_perspective.clone()}
                    />
                }

                if services.config.history_enabled() {
                    <HistoryPanel records={state.history.records.clone()} translations={t} />
                }
            </div>

            <p class="footer">{t.footer_text}</p>
        </div>
    }
}

async fn save_to_history(uid: &str, input: &AnalysisInput, result: &AnalysisResult, language: Language) {
    let record = HistoryRecord::new(
        Uuid::new_v4().to_string(),
        input.as_str(),
        result,
        language,
        js_sys::Date::now(),
    );

    match firebase::save_record(uid, &record).await {
        Ok(()) => log::debug!("Saved history record {}", record.id),
        Err(e) => log::error!("Error adding document: {}", e),
    }
}
