mod quiz;

use std::sync::Arc;

use chatgpt::{client::ChatGPT, config::ChatGPTEngine};
use dotenv::dotenv;
use quiz::ai_helper::{HelperError, OracleHelper};
use quiz::portrait::PortraitGallery;
use quiz::presenter::ResultPresenter;
use quiz::spirits::spirit_info;
use quiz::{Advance, QuizResult, QuizSession};
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{ChatAction, ChatId, InputFile, KeyboardButton, KeyboardMarkup, ParseMode},
};

type QuizDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    /// The landing narrative; waiting for the user to wake the sprout up.
    #[default]
    Landing,
    /// Mid-quiz: one answer per incoming message.
    SpiritQuiz {
        session: QuizSession,
    },
    /// Result card shown; waiting for a wish (or a reset / portrait retry).
    SeedWish {
        session: QuizSession,
        presenter: ResultPresenter,
    },
    /// Oracle delivered; waiting for restart or keep.
    OracleShown {
        session: QuizSession,
        presenter: ResultPresenter,
    },
}

#[tokio::main]
async fn main() {
    dotenv().expect("Failed to load .env file");
    let chatgpt_api_key = std::env::var("CHATGPT_API_KEY").expect("CHATGPT_API_KEY is not set");

    pretty_env_logger::init();
    log::info!("Starting sprout spirit bot...");

    let bot = Bot::from_env();

    let portrait_dir =
        std::env::var("PORTRAIT_DIR").unwrap_or_else(|_| "portraits".to_string());
    println!("Using portrait gallery at '{}'", portrait_dir);
    let gallery = Arc::new(PortraitGallery::new(portrait_dir));
    let gallery_for_retry = gallery.clone();

    let gpt = {
        let mut gpt = ChatGPT::new(chatgpt_api_key).expect("Unable to connect with ChatGPT");

        gpt.config.engine = ChatGPTEngine::Gpt35Turbo;
        gpt.config.timeout = std::time::Duration::from_secs(15);

        gpt
    };
    let oracle_helper = Arc::new(OracleHelper::new(gpt));

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(dptree::case![State::Landing].endpoint(landing))
            .branch(dptree::case![State::SpiritQuiz { session }].endpoint(
                move |bot: Bot, dialogue: QuizDialogue, session: QuizSession, msg: Message| {
                    spirit_quiz(gallery.clone(), bot, dialogue, session, msg)
                },
            ))
            .branch(
                dptree::case![State::SeedWish { session, presenter }].endpoint(
                    move |bot: Bot,
                          dialogue: QuizDialogue,
                          (session, presenter): (QuizSession, ResultPresenter),
                          msg: Message| {
                        seed_wish(
                            oracle_helper.clone(),
                            gallery_for_retry.clone(),
                            bot,
                            dialogue,
                            (session, presenter),
                            msg,
                        )
                    },
                ),
            )
            .branch(
                dptree::case![State::OracleShown { session, presenter }].endpoint(oracle_shown),
            ),
    )
    .dependencies(dptree::deps![InMemStorage::<State>::new()])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const AWAKEN_BUTTON: &str = "喚醒新芽";
const RESET_BUTTON: &str = "重測";
const RETRY_PORTRAIT_BUTTON: &str = "再次顯化精靈肖像";
const RESTART_BUTTON: &str = "重返覺醒之始";
const KEEP_BUTTON: &str = "永久收藏神諭";

const LANDING_TEXT: &str = "🌳 <b>新年覺醒之旅</b>\n\n新年的晨光灑落，世界樹低聲吟唱，願望種子輕輕落下……\n你，一隻新芽小精靈，從柔軟的樹根中醒來。\n翅膀輕輕顫動，手中握著微溫的願望種子。\n\n<b>這個新年，你的成長之旅，即將展開。</b>";

const WISH_PROMPT_TEXT: &str = "🌱 <b>種下你的願望</b>\n在種子中注入你的新年渴望，世界樹將為你指引明路。\n\n例如：我希望今年能更有勇氣去嘗試那些一直不敢做的事...";

const ORACLE_LOADING_TEXT: &str = "正在將森林的低語轉化為文字...";
const PORTRAIT_LOADING_TEXT: &str = "【新芽努力中😄】";
const PORTRAIT_FAILED_TEXT: &str = "顯化失敗";

const CREDENTIAL_PROMPT_TEXT: &str = "⚠️ 世界樹無法連結星界：你的 API 金鑰已被拒絕。\n請在 .env 中設定有效的 CHATGPT_API_KEY 並重新啟動，再回來種下願望。";

async fn landing(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    if msg.text() == Some(AWAKEN_BUTTON) {
        let mut session = QuizSession::default();
        session.start();
        send_current_question(&bot, msg.chat.id, &session).await?;
        dialogue.update(State::SpiritQuiz { session }).await?;
        return Ok(());
    }

    let keyboard = KeyboardMarkup::new(vec![vec![KeyboardButton::new(AWAKEN_BUTTON)]]);
    bot.send_message(msg.chat.id, LANDING_TEXT)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

async fn spirit_quiz(
    gallery: Arc<PortraitGallery>,
    bot: Bot,
    dialogue: QuizDialogue,
    mut session: QuizSession,
    msg: Message,
) -> HandlerResult {
    let answer_text = match msg.text() {
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "請用鍵盤選擇一個選項").await?;
            return Ok(());
        }
    };

    let question = match session.current_question() {
        Some(question) => question,
        None => {
            // The session drifted out of the quiz stage somehow; start over.
            log::warn!("Quiz state without a current question, restarting");
            return restart(&bot, &dialogue, msg.chat.id).await;
        }
    };

    let archetype = match question.choice_for(answer_text) {
        Some(archetype) => archetype,
        None => {
            bot.send_message(msg.chat.id, "請選擇其中一個選項").await?;
            return Ok(());
        }
    };

    match session.submit_answer(archetype) {
        Advance::NextQuestion => {
            send_current_question(&bot, msg.chat.id, &session).await?;
            dialogue.update(State::SpiritQuiz { session }).await?;
        }
        Advance::Completed => {
            let mut presenter = ResultPresenter::default();
            send_result_card(&gallery, &bot, msg.chat.id, &session, &mut presenter).await?;
            dialogue
                .update(State::SeedWish { session, presenter })
                .await?;
        }
        Advance::Ignored => {
            log::warn!("Answer ignored outside the quiz stage");
        }
    }
    Ok(())
}

async fn seed_wish(
    oracle_helper: Arc<OracleHelper>,
    gallery: Arc<PortraitGallery>,
    bot: Bot,
    dialogue: QuizDialogue,
    (mut session, mut presenter): (QuizSession, ResultPresenter),
    msg: Message,
) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "請用文字寫下你的願望").await?;
            return Ok(());
        }
    };

    if text == RESET_BUTTON {
        presenter.reset();
        session.reset();
        return restart(&bot, &dialogue, msg.chat.id).await;
    }

    if text == RETRY_PORTRAIT_BUTTON {
        send_portrait(&gallery, &bot, msg.chat.id, &session, &mut presenter).await?;
        dialogue
            .update(State::SeedWish { session, presenter })
            .await?;
        return Ok(());
    }

    let wish = text.trim();
    if wish.is_empty() {
        bot.send_message(msg.chat.id, "願望不能是空白的，再試一次吧").await?;
        return Ok(());
    }

    let result = match session.result.clone() {
        Some(result) => result,
        None => {
            log::warn!("Wish received without a quiz result, restarting");
            return restart(&bot, &dialogue, msg.chat.id).await;
        }
    };
    let spirit = spirit_info(result.dominant);

    // Nothing breaks if the typing hint is lost, it just looks nicer.
    let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;
    bot.send_message(msg.chat.id, ORACLE_LOADING_TEXT).await?;

    let epoch = presenter.begin_oracle();
    match oracle_helper.seed_oracle(spirit, wish).await {
        Ok(oracle_text) => {
            session.enter_oracle();
            presenter.complete_oracle(epoch, oracle_text.clone());

            let keyboard = KeyboardMarkup::new(vec![vec![
                KeyboardButton::new(RESTART_BUTTON),
                KeyboardButton::new(KEEP_BUTTON),
            ]]);
            bot.send_message(msg.chat.id, format_oracle(&oracle_text))
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;

            dialogue
                .update(State::OracleShown { session, presenter })
                .await?;
        }
        Err(HelperError::InvalidCredential(detail)) => {
            log::error!("ChatGPT credential rejected: {}", detail);
            // The session stays on the result card so a fixed key lets the
            // user just send the wish again.
            presenter.fail_oracle(epoch, &detail);
            bot.send_message(msg.chat.id, CREDENTIAL_PROMPT_TEXT).await?;
            dialogue
                .update(State::SeedWish { session, presenter })
                .await?;
        }
    }
    Ok(())
}

async fn oracle_shown(
    bot: Bot,
    dialogue: QuizDialogue,
    (mut session, mut presenter): (QuizSession, ResultPresenter),
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(RESTART_BUTTON) => {
            presenter.reset();
            session.reset();
            return restart(&bot, &dialogue, msg.chat.id).await;
        }
        Some(KEEP_BUTTON) => {
            let oracle_text = match presenter.oracle.value() {
                Some(text) => text.clone(),
                None => {
                    bot.send_message(msg.chat.id, "神諭已經消散了，請重新開始").await?;
                    return Ok(());
                }
            };
            let sent = bot
                .send_message(msg.chat.id, format_oracle(&oracle_text))
                .parse_mode(ParseMode::Html)
                .await?;
            // Pinning can fail without the right chat permissions.
            if let Err(err) = bot.pin_chat_message(msg.chat.id, sent.id).await {
                log::warn!("Could not pin the oracle message: {}", err);
            }
            dialogue
                .update(State::OracleShown { session, presenter })
                .await?;
            return Ok(());
        }
        _ => {
            bot.send_message(msg.chat.id, "請選擇其中一個選項").await?;
            return Ok(());
        }
    }
}

/// Back to the landing narrative with a cleared session.
async fn restart(bot: &Bot, dialogue: &QuizDialogue, chat_id: ChatId) -> HandlerResult {
    let keyboard = KeyboardMarkup::new(vec![vec![KeyboardButton::new(AWAKEN_BUTTON)]]);
    bot.send_message(chat_id, LANDING_TEXT)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    dialogue.update(State::Landing).await?;
    Ok(())
}

async fn send_current_question(bot: &Bot, chat_id: ChatId, session: &QuizSession) -> HandlerResult {
    let question = match session.current_question() {
        Some(question) => question,
        None => return Ok(()),
    };

    let question_text = format!(
        "醒覺度 <b>{} / {}</b>\n\n{}",
        session.question_index + 1,
        quiz::questions::QUESTIONS.len(),
        question.text
    );

    let keyboard = KeyboardMarkup::new(
        question
            .choices
            .iter()
            .map(|choice| vec![KeyboardButton::new(choice.text)])
            .collect::<Vec<_>>(),
    );

    bot.send_message(chat_id, question_text)
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

/// Renders the full result card: portrait (or placeholder), the themed card
/// text and the wish prompt with its keyboard.
async fn send_result_card(
    gallery: &PortraitGallery,
    bot: &Bot,
    chat_id: ChatId,
    session: &QuizSession,
    presenter: &mut ResultPresenter,
) -> HandlerResult {
    let result = match session.result.as_ref() {
        Some(result) => result,
        None => return Ok(()),
    };

    send_portrait(gallery, bot, chat_id, session, presenter).await?;

    let spirit = spirit_info(result.dominant);
    bot.send_message(chat_id, format_result_card(spirit, result))
        .parse_mode(ParseMode::Html)
        .await?;

    let mut rows = vec![vec![KeyboardButton::new(RESET_BUTTON)]];
    if presenter.portrait.is_failed() {
        rows.push(vec![KeyboardButton::new(RETRY_PORTRAIT_BUTTON)]);
    }
    bot.send_message(chat_id, WISH_PROMPT_TEXT)
        .parse_mode(ParseMode::Html)
        .reply_markup(KeyboardMarkup::new(rows))
        .await?;
    Ok(())
}

async fn send_portrait(
    gallery: &PortraitGallery,
    bot: &Bot,
    chat_id: ChatId,
    session: &QuizSession,
    presenter: &mut ResultPresenter,
) -> HandlerResult {
    let result = match session.result.as_ref() {
        Some(result) => result,
        None => return Ok(()),
    };
    let spirit = spirit_info(result.dominant);

    let _ = bot
        .send_chat_action(chat_id, ChatAction::UploadPhoto)
        .await;
    bot.send_message(chat_id, PORTRAIT_LOADING_TEXT).await?;

    let epoch = presenter.begin_portrait();
    let portrait = gallery.portrait_for(result.dominant);
    presenter.complete_portrait(
        epoch,
        portrait
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
        PORTRAIT_FAILED_TEXT,
    );

    match portrait {
        Some(path) => {
            bot.send_photo(chat_id, InputFile::file(path))
                .caption(format!("{} — {}", spirit.name, spirit.motto))
                .await?;
        }
        None => {
            bot.send_message(chat_id, format!("🖼 {}", PORTRAIT_FAILED_TEXT))
                .await?;
        }
    }
    Ok(())
}

fn format_result_card(spirit: &quiz::spirits::SpiritInfo, result: &QuizResult) -> String {
    let advice = spirit
        .advice
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n");

    let trait_tags = spirit
        .traits
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ");

    let tally = quiz::Archetype::ALL
        .iter()
        .map(|archetype| {
            format!(
                "{} {}",
                spirit_info(*archetype).name,
                result.scores[archetype]
            )
        })
        .collect::<Vec<_>>()
        .join(" / ");

    format!(
        "🌳 <b>世界樹的呼喚</b>\n<b>{name}</b>\n\n<i>{story}</i>\n\n{tags}\n\n⚡ <b>靈魂核心力量</b>\n{strength}\n\n🌫 <b>迷霧之境提醒</b>\n{caution}\n\n💚 <b>溫暖行動建議</b>\n{advice}\n\n🪶 {motto}\n\n醒覺度統計：{tally}",
        name = spirit.name,
        story = spirit.story,
        tags = trait_tags,
        strength = spirit.strength,
        caution = spirit.caution,
        advice = advice,
        motto = spirit.motto,
        tally = tally,
    )
}

fn format_oracle(oracle_text: &str) -> String {
    format!("✨ <b>世界樹的啟示</b>\n\n{}", oracle_text)
}
