use crate::quiz::Archetype;

/// One option the user can pick for a question.
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub text: &'static str,
    pub archetype: Archetype,
}

/// A fixed quiz question: prompt plus one choice per archetype.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub choices: [Choice; 4],
}

impl Question {
    /// Looks the picked button text back up to its archetype.
    pub fn choice_for(&self, text: &str) -> Option<Archetype> {
        self.choices
            .iter()
            .find(|choice| choice.text == text)
            .map(|choice| choice.archetype)
    }
}

const fn choice(text: &'static str, archetype: Archetype) -> Choice {
    Choice { text, archetype }
}

/// The ten-question awakening journey, in order.
pub static QUESTIONS: [Question; 10] = [
    Question {
        text: "你第一次張開眼睛時，最先吸引你的是？",
        choices: [
            choice("林間吹來的風與光影", Archetype::Autonomy),
            choice("地面閃爍的符文路徑", Archetype::Competence),
            choice("附近其他剛醒來的小精靈", Archetype::Relatedness),
            choice("手中種子散發的溫暖光芒", Archetype::Growth),
        ],
    },
    Question {
        text: "你嘗試拍動翅膀飛起來，結果有點搖晃。你會？",
        choices: [
            choice("改變方向再試一次", Archetype::Autonomy),
            choice("調整姿勢努力飛得更穩", Archetype::Competence),
            choice("向旁邊的小精靈求助", Archetype::Relatedness),
            choice("把這當成學習的過程", Archetype::Growth),
        ],
    },
    Question {
        text: "前方出現巨大的蘑菇牆，你會？",
        choices: [
            choice("繞路探索新區域", Archetype::Autonomy),
            choice("找方法穿過去", Archetype::Competence),
            choice("問問別人怎麼走", Archetype::Relatedness),
            choice("觀察結構找出突破方式", Archetype::Growth),
        ],
    },
    Question {
        text: "天空開始飄起細雨，你內心的第一反應是？",
        choices: [
            choice("跟著感覺繼續飛", Archetype::Autonomy),
            choice("評估是否該調整行程", Archetype::Competence),
            choice("想找人一起避雨", Archetype::Relatedness),
            choice("覺得這是成長的一部分", Archetype::Growth),
        ],
    },
    Question {
        text: "你來到一片能量花田，你最想做的是？",
        choices: [
            choice("隨意飛舞感受自由", Archetype::Autonomy),
            choice("吸收最多能量讓自己變強", Archetype::Competence),
            choice("分享花蜜給其他精靈", Archetype::Relatedness),
            choice("記住這裡的感覺", Archetype::Growth),
        ],
    },
    Question {
        text: "夜晚到來，你準備休息，你最在意？",
        choices: [
            choice("能不能照自己節奏休息", Archetype::Autonomy),
            choice("明天是否能更有效率", Archetype::Competence),
            choice("有沒有夥伴一起聊天", Archetype::Relatedness),
            choice("今天學到了什麼", Archetype::Growth),
        ],
    },
    Question {
        text: "你不小心讓願望種子掉落了一下，你會？",
        choices: [
            choice("換個方式繼續前進", Archetype::Autonomy),
            choice("告訴自己要更小心", Archetype::Competence),
            choice("希望有人安慰你", Archetype::Relatedness),
            choice("想著「這也是成長的一步」", Archetype::Growth),
        ],
    },
    Question {
        text: "前方出現兩條路：一條安全、一條未知但閃著光，你會？",
        choices: [
            choice("跟著內心的感覺走", Archetype::Autonomy),
            choice("選成功率高的路", Archetype::Competence),
            choice("看大家走哪條", Archetype::Relatedness),
            choice("觀察再決定", Archetype::Growth),
        ],
    },
    Question {
        text: "你飛到高處，看見整片森林，你最強烈的感受是？",
        choices: [
            choice("我想找到屬於我的方向", Archetype::Autonomy),
            choice("我想變得更強", Archetype::Competence),
            choice("我想和誰分享這一刻", Archetype::Relatedness),
            choice("我真的正在改變", Archetype::Growth),
        ],
    },
    Question {
        text: "世界樹詢問你：你最希望成為怎樣的小精靈？",
        choices: [
            choice("自由飛翔的探索者", Archetype::Autonomy),
            choice("能力強大的守護者", Archetype::Competence),
            choice("溫暖陪伴的光之精靈", Archetype::Relatedness),
            choice("不斷成長的學習者", Archetype::Growth),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_questions_each_covering_all_four_archetypes() {
        assert_eq!(QUESTIONS.len(), 10);
        for question in &QUESTIONS {
            let mut seen: Vec<Archetype> =
                question.choices.iter().map(|c| c.archetype).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 4, "question {:?} repeats an archetype", question.text);
        }
    }

    #[test]
    fn choice_lookup_maps_button_text_back_to_its_archetype() {
        let question = &QUESTIONS[0];
        assert_eq!(
            question.choice_for("地面閃爍的符文路徑"),
            Some(Archetype::Competence)
        );
        assert_eq!(question.choice_for("不存在的選項"), None);
    }
}
