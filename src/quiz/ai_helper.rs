use chatgpt::client::ChatGPT;
use chatgpt::types::CompletionResponse;

use crate::quiz::spirits::SpiritInfo;

/// Spoken by the elder when the model is unreachable. Every failed request
/// yields exactly this text, so the user never sees a raw provider error.
pub const ORACLE_FALLBACK: &str = "森林長老正在深層靈修中...但他托風傳來一句話：你的本質就是最仁慈的種子，請帶著勇氣，在屬於你的土壤裡紮根生長。";

/// The one provider failure that has to reach the user: the configured API
/// key was rejected, so no amount of retrying will help.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    #[error("API credential rejected: {0}")]
    InvalidCredential(String),
}

/// Wraps the ChatGPT client as the "world tree elder" oracle.
pub struct OracleHelper {
    chat_gpt: ChatGPT,
}

impl OracleHelper {
    pub fn new(chat_gpt: ChatGPT) -> Self {
        Self { chat_gpt }
    }

    /// Asks the elder for a new-year oracle for the classified spirit and the
    /// user's wish. Backend or network trouble folds into `ORACLE_FALLBACK`;
    /// only a rejected credential is returned as an error.
    pub async fn seed_oracle(
        &self,
        spirit: &SpiritInfo,
        wish: &str,
    ) -> Result<String, HelperError> {
        let prompt = build_oracle_prompt(spirit, wish);
        log::debug!("Requesting oracle for spirit {:?}", spirit.name);

        let response: Result<CompletionResponse, chatgpt::err::Error> =
            self.chat_gpt.send_message(&prompt).await;
        fold_oracle_response(response.map(|response| response.message().clone().content))
    }
}

/// Applies the error policy to a finished provider call: content passes
/// through, a rejected credential surfaces, anything else becomes the fixed
/// fallback text.
fn fold_oracle_response(
    response: Result<String, chatgpt::err::Error>,
) -> Result<String, HelperError> {
    match response {
        Ok(content) => {
            log::debug!("Oracle completion: {:?}", content);
            Ok(content)
        }
        Err(err) if is_credential_error(&err) => {
            Err(HelperError::InvalidCredential(err.to_string()))
        }
        Err(err) => {
            log::warn!("Oracle generation failed, using fallback: {}", err);
            Ok(ORACLE_FALLBACK.to_string())
        }
    }
}

fn is_credential_error(err: &chatgpt::err::Error) -> bool {
    match err {
        chatgpt::err::Error::BackendError {
            message,
            error_type,
        } => {
            error_type == "authentication_error"
                || error_type == "invalid_api_key"
                || message.to_lowercase().contains("api key")
        }
        _ => false,
    }
}

fn build_oracle_prompt(spirit: &SpiritInfo, wish: &str) -> String {
    format!(
        "你是一位森林中的「世界樹長老」。
目前有一位剛誕生的「{name}」新芽小精靈尋求你的新年指引。

【精靈特質分析】
- 靈魂故事：{story}
- 核心力量：{strength}
- 潛在挑戰：{caution}
- 建議行動：{advice}

【精靈的新年願望】
「{wish}」

請以長老的口吻，給予他一段優美、充滿森林意象且具有深度心理啟發的新年神諭。

回答規範：
1. 【引言】：以溫暖、神秘的語氣開頭，稱呼他為「親愛的{name}」。
2. 【共鳴】：分析他的特質（如：{traits}）與願望之間的深刻連結。
3. 【啟示】：結合森林生長的隱喻（如：季節更迭、根系蔓延、光合作用），給予他具體的心理或生活建議。
4. 【祝福】：送他一句簡短且富有詩意的「世界樹箴言」。

請用繁體中文回答，語氣要優雅且充滿智慧。",
        name = spirit.name,
        story = spirit.story,
        strength = spirit.strength,
        caution = spirit.caution,
        advice = spirit.advice.join("、"),
        traits = spirit.traits.join("、"),
        wish = wish,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{spirits, Archetype};

    #[test]
    fn prompt_carries_the_spirit_fields_and_the_wish() {
        let spirit = spirits::spirit_info(Archetype::Growth);
        let prompt = build_oracle_prompt(spirit, "我希望今年能更有勇氣");

        assert!(prompt.contains(spirit.name));
        assert!(prompt.contains(spirit.story));
        assert!(prompt.contains(spirit.strength));
        assert!(prompt.contains(spirit.caution));
        assert!(prompt.contains("我希望今年能更有勇氣"));
        for advice in spirit.advice {
            assert!(prompt.contains(advice));
        }
        for tag in spirit.traits {
            assert!(prompt.contains(tag));
        }
    }

    #[test]
    fn backend_auth_errors_are_classified_as_credential_errors() {
        let err = chatgpt::err::Error::BackendError {
            message: "Incorrect API key provided".to_string(),
            error_type: "invalid_request_error".to_string(),
        };
        assert!(is_credential_error(&err));

        let err = chatgpt::err::Error::BackendError {
            message: "rate limit reached".to_string(),
            error_type: "requests".to_string(),
        };
        assert!(!is_credential_error(&err));
    }

    #[test]
    fn non_credential_failures_fold_into_the_same_fixed_fallback() {
        let first = fold_oracle_response(Err(chatgpt::err::Error::BackendError {
            message: "rate limit reached".to_string(),
            error_type: "requests".to_string(),
        }))
        .unwrap();
        let second = fold_oracle_response(Err(chatgpt::err::Error::BackendError {
            message: "The server had an error".to_string(),
            error_type: "server_error".to_string(),
        }))
        .unwrap();

        assert_eq!(first, ORACLE_FALLBACK);
        assert_eq!(first, second);
    }

    #[test]
    fn credential_rejection_surfaces_instead_of_falling_back() {
        let folded = fold_oracle_response(Err(chatgpt::err::Error::BackendError {
            message: "Incorrect API key provided".to_string(),
            error_type: "invalid_request_error".to_string(),
        }));
        assert!(matches!(folded, Err(HelperError::InvalidCredential(_))));
    }

    #[test]
    fn successful_completion_passes_through_untouched() {
        let folded = fold_oracle_response(Ok("親愛的森芽精靈...".to_string()));
        assert_eq!(folded.unwrap(), "親愛的森芽精靈...");
    }
}
