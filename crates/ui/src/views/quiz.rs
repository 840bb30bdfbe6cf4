use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;

use bagdar_core::catalog;
use bagdar_core::model::Phase;
use services::{SessionView, SubmitOutcome};

use crate::context::AppContext;
use crate::views::scripts;
use crate::vm::map_result;

/// The whole quiz as one screen: intro, questions, analysis spinner, and
/// the result, switched on the session phase.
#[component]
pub fn QuizFlowView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();

    let mut session = use_signal(|| None::<SessionView>);
    let mut has_saved = use_signal(|| false);
    let mut nickname = use_signal(String::new);
    let mut analysis_failed = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut copied = use_signal(|| false);

    let quiz_for_load = quiz.clone();
    use_future(move || {
        let quiz = quiz_for_load.clone();
        async move {
            has_saved.set(quiz.has_saved_progress().await);
            session.set(Some(quiz.view().await));
        }
    });

    let quiz_for_start = quiz.clone();
    let on_start = use_callback(move |_: ()| {
        if busy() {
            return;
        }
        busy.set(true);
        let quiz = quiz_for_start.clone();
        spawn(async move {
            let name = nickname().trim().to_owned();
            if !name.is_empty() {
                quiz.set_nickname(name).await;
            }
            analysis_failed.set(false);
            has_saved.set(false);
            session.set(Some(quiz.start().await));
            busy.set(false);
        });
    });

    let quiz_for_resume = quiz.clone();
    let on_resume = use_callback(move |_: ()| {
        if busy() {
            return;
        }
        busy.set(true);
        let quiz = quiz_for_resume.clone();
        spawn(async move {
            analysis_failed.set(false);
            has_saved.set(false);
            session.set(Some(quiz.resume().await));
            busy.set(false);
        });
    });

    let quiz_for_answer = quiz.clone();
    let on_answer = use_callback(move |label: &'static str| {
        if busy() {
            return;
        }
        busy.set(true);
        let quiz = quiz_for_answer.clone();
        spawn(async move {
            // The final answer kicks off the analysis request; show the
            // loading screen while it runs.
            if let Some(view) = session.write().as_mut() {
                if view.answers.len() + 1 == view.question_count {
                    view.phase = Phase::Loading;
                }
            }
            match quiz.submit_answer(label).await {
                Ok(SubmitOutcome::Advanced(view) | SubmitOutcome::Completed(view)) => {
                    session.set(Some(view));
                }
                Ok(SubmitOutcome::AnalysisFailed(view)) => {
                    analysis_failed.set(true);
                    session.set(Some(view));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "answer rejected");
                }
            }
            busy.set(false);
        });
    });

    let quiz_for_submit = quiz.clone();
    let on_submit = use_callback(move |_: ()| {
        if busy() {
            return;
        }
        busy.set(true);
        let quiz = quiz_for_submit.clone();
        spawn(async move {
            if let Err(err) = quiz.finalize_and_report().await {
                tracing::warn!(error = %err, "could not submit result");
            }
            session.set(Some(quiz.view().await));
            busy.set(false);
        });
    });

    let on_copy = use_callback(move |text: String| {
        let _ = eval(&scripts::copy_text_script(&text));
        copied.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            copied.set(false);
        });
    });

    let quiz_for_reset = quiz.clone();
    let on_reset = use_callback(move |_: ()| {
        if busy() {
            return;
        }
        busy.set(true);
        let quiz = quiz_for_reset.clone();
        spawn(async move {
            analysis_failed.set(false);
            copied.set(false);
            session.set(Some(quiz.reset().await));
            busy.set(false);
        });
    });

    let Some(view) = session() else {
        return rsx! {
            div { class: "page",
                p { class: "muted", "Жүктелуде..." }
            }
        };
    };

    rsx! {
        div { class: "page quiz-page",
            match view.phase {
                Phase::Intro => rsx! {
                    IntroSection {
                        nickname,
                        has_saved: has_saved(),
                        analysis_failed: analysis_failed(),
                        on_start,
                        on_resume,
                    }
                },
                Phase::Quiz => rsx! {
                    QuestionSection { view: view.clone(), on_answer }
                },
                Phase::Loading => rsx! {
                    LoadingSection {}
                },
                Phase::Result => rsx! {
                    ResultSection {
                        view: view.clone(),
                        copied: copied(),
                        on_submit,
                        on_copy,
                        on_reset,
                    }
                },
            }
        }
    }
}

#[component]
fn IntroSection(
    mut nickname: Signal<String>,
    has_saved: bool,
    analysis_failed: bool,
    on_start: Callback<()>,
    on_resume: Callback<()>,
) -> Element {
    rsx! {
        section { class: "intro card",
            h2 { "Болашақ мамандығыңды тап!" }
            p { class: "intro-lead",
                "5 қысқа сұраққа жауап бер — жасанды интеллект саған қай "
                "білім беру бағдарламасы жақын екенін айтып береді."
            }
            if analysis_failed {
                p { class: "error-note",
                    "Талдау сәтсіз аяқталды. Интернет байланысын тексеріп, қайта бастап көр."
                }
            }
            input {
                class: "nickname-input",
                r#type: "text",
                maxlength: "30",
                placeholder: "Лақап атың (міндетті емес)",
                value: "{nickname}",
                oninput: move |evt| nickname.set(evt.value()),
            }
            div { class: "intro-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_start.call(()),
                    "Бастау"
                }
                if has_saved {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_resume.call(()),
                        "Жалғастыру"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionSection(view: SessionView, on_answer: Callback<&'static str>) -> Element {
    let Some(question) = catalog::questions().get(view.current_question) else {
        return rsx! {
            p { class: "error-note", "Сұрақ табылмады." }
        };
    };
    let progress = view.answers.len() * 100 / view.question_count;

    rsx! {
        section { class: "question card",
            div { class: "question-meta",
                span { class: "question-pill",
                    "Сұрақ {view.current_question + 1} / {view.question_count}"
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {progress}%;" }
                }
            }
            h2 { class: "question-text", "{question.text}" }
            div { class: "options",
                for option in question.options.iter() {
                    button {
                        key: "{option.id}",
                        class: "option-btn",
                        r#type: "button",
                        onclick: {
                            let label = option.label;
                            move |_| on_answer.call(label)
                        },
                        span { class: "option-emoji", "{option.emoji}" }
                        span { class: "option-label", "{option.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingSection() -> Element {
    rsx! {
        section { class: "loading card",
            div { class: "spinner" }
            h2 { "Жауаптарың талдануда..." }
            p { class: "muted", "Бұл бірнеше секунд алуы мүмкін." }
        }
    }
}

#[component]
fn ResultSection(
    view: SessionView,
    copied: bool,
    on_submit: Callback<()>,
    on_copy: Callback<String>,
    on_reset: Callback<()>,
) -> Element {
    let Some(result) = view.result.as_ref() else {
        return rsx! {
            p { class: "error-note", "Нәтиже табылмады." }
        };
    };
    let vm = map_result(result);
    let share_text = vm.share_text.clone();
    let contacts = catalog::contact_info();

    rsx! {
        section { class: "result",
            div { class: "card profile-card",
                h2 { "Сенің бейінің" }
                p { "{vm.profile_summary}" }
            }
            h3 { class: "result-heading", "Саған лайық бағдарламалар" }
            div { class: "program-list",
                for (index, program) in vm.programs.iter().enumerate() {
                    div { key: "{index}", class: "card program-card",
                        div { class: "program-rank", "{index + 1}" }
                        div { class: "program-body",
                            h4 { "{program.name}" }
                            p { class: "program-why", "{program.why_fits}" }
                            p { class: "program-desc", "{program.description}" }
                            p { class: "program-subjects", "Пәндер: {program.subjects}" }
                        }
                    }
                }
            }
            div { class: "result-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: view.submitted,
                    onclick: move |_| on_submit.call(()),
                    if view.submitted { "Жіберілді ✓" } else { "Нәтижені жіберу" }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_copy.call(share_text.clone()),
                    if copied { "Көшірілді!" } else { "Көшіру" }
                }
                a { class: "btn btn-share", href: "{vm.whatsapp_url}", "WhatsApp" }
                a { class: "btn btn-share", href: "{vm.telegram_url}", "Telegram" }
                a { class: "btn btn-share", href: "{vm.mailto_url}", "Email" }
            }
            div { class: "card contact-card",
                h4 { "Қабылдау комиссиясы" }
                p { "{contacts.address}" }
                p { "{contacts.email}" }
                for phone in contacts.phones.iter() {
                    p { key: "{phone}", "{phone}" }
                }
            }
            button {
                class: "btn btn-ghost restart-btn",
                r#type: "button",
                onclick: move |_| on_reset.call(()),
                "Қайта бастау"
            }
        }
    }
}
