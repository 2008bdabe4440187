pub mod ai_helper;
pub mod portrait;
pub mod presenter;
pub mod questions;
pub mod spirits;

use std::collections::BTreeMap;

/// The four spirit archetypes the quiz can classify a user into.
/// `ALL` doubles as the tie-break precedence order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Archetype {
    Autonomy,
    Competence,
    Relatedness,
    Growth,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Autonomy,
        Archetype::Competence,
        Archetype::Relatedness,
        Archetype::Growth,
    ];

    /// Lowercase tag used to key portrait assets ("autonomy.png" etc.)
    pub fn tag(&self) -> &'static str {
        match self {
            Archetype::Autonomy => "autonomy",
            Archetype::Competence => "competence",
            Archetype::Relatedness => "relatedness",
            Archetype::Growth => "growth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizResult {
    pub dominant: Archetype,
    pub scores: BTreeMap<Archetype, u32>,
}

/// Tallies the answers and picks the dominant archetype.
///
/// All four archetypes are present in the tally even when they were never
/// answered. Ties go to the earliest archetype in `Archetype::ALL`: we iterate
/// in that order and only a strictly greater count replaces the running
/// maximum (which starts below zero, so the all-zero case lands on Autonomy).
pub fn classify(answers: &[Archetype]) -> QuizResult {
    let mut scores: BTreeMap<Archetype, u32> = BTreeMap::new();
    for archetype in Archetype::ALL {
        scores.insert(archetype, 0);
    }
    for answer in answers {
        *scores.entry(*answer).or_insert(0) += 1;
    }

    let mut dominant = Archetype::Autonomy;
    let mut max_count: i64 = -1;
    for archetype in Archetype::ALL {
        let count = scores[&archetype] as i64;
        if count > max_count {
            max_count = count;
            dominant = archetype;
        }
    }

    return QuizResult { dominant, scores };
}

/// Which screen of the journey the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Stage {
    #[default]
    Landing,
    Quiz,
    Result,
    Oracle,
}

/// What `submit_answer` did with the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion,
    Completed,
    /// The session wasn't in the Quiz stage, so the answer was dropped.
    Ignored,
}

/// One user's run through the quiz, from landing to oracle.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct QuizSession {
    pub stage: Stage,
    pub question_index: usize,
    pub answers: Vec<Archetype>,
    pub result: Option<QuizResult>,
}

impl QuizSession {
    pub fn start(&mut self) {
        self.stage = Stage::Quiz;
        self.question_index = 0;
        self.answers.clear();
        self.result = None;
    }

    pub fn current_question(&self) -> Option<&'static questions::Question> {
        if self.stage != Stage::Quiz {
            return None;
        }
        return questions::QUESTIONS.get(self.question_index);
    }

    /// Records one answer. On the last question this computes the
    /// classification and moves the session to the Result stage.
    pub fn submit_answer(&mut self, choice: Archetype) -> Advance {
        if self.stage != Stage::Quiz {
            return Advance::Ignored;
        }

        self.answers.push(choice);
        if self.question_index + 1 < questions::QUESTIONS.len() {
            self.question_index += 1;
            return Advance::NextQuestion;
        }

        self.result = Some(classify(&self.answers));
        self.stage = Stage::Result;
        return Advance::Completed;
    }

    /// The user asked for the oracle; only meaningful from the Result stage.
    pub fn enter_oracle(&mut self) {
        if self.stage == Stage::Result {
            self.stage = Stage::Oracle;
        }
    }

    pub fn reset(&mut self) {
        *self = QuizSession::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_keeps_all_four_keys_and_sums_to_answer_count() {
        let answers = vec![
            Archetype::Growth,
            Archetype::Growth,
            Archetype::Autonomy,
            Archetype::Relatedness,
            Archetype::Growth,
        ];
        let result = classify(&answers);
        assert_eq!(result.scores.len(), 4);
        let total: u32 = result.scores.values().sum();
        assert_eq!(total as usize, answers.len());
        assert_eq!(result.scores[&Archetype::Competence], 0);
    }

    #[test]
    fn all_equal_counts_classify_as_autonomy() {
        let mut answers = Vec::new();
        for archetype in Archetype::ALL {
            answers.push(archetype);
            answers.push(archetype);
        }
        let result = classify(&answers);
        assert_eq!(result.dominant, Archetype::Autonomy);
    }

    #[test]
    fn empty_answer_list_classifies_as_autonomy_with_zero_scores() {
        let result = classify(&[]);
        assert_eq!(result.dominant, Archetype::Autonomy);
        assert!(result.scores.values().all(|count| *count == 0));
    }

    #[test]
    fn clear_lead_wins_regardless_of_precedence() {
        let answers = [
            Archetype::Growth,
            Archetype::Growth,
            Archetype::Growth,
            Archetype::Autonomy,
        ];
        let result = classify(&answers);
        assert_eq!(result.dominant, Archetype::Growth);
        assert_eq!(result.scores[&Archetype::Growth], 3);
        assert_eq!(result.scores[&Archetype::Autonomy], 1);
    }

    #[test]
    fn single_archetype_sweep() {
        let answers = [Archetype::Competence; 10];
        let result = classify(&answers);
        assert_eq!(result.dominant, Archetype::Competence);
        assert_eq!(result.scores[&Archetype::Competence], 10);
        assert_eq!(result.scores[&Archetype::Autonomy], 0);
        assert_eq!(result.scores[&Archetype::Relatedness], 0);
        assert_eq!(result.scores[&Archetype::Growth], 0);
    }

    #[test]
    fn classify_is_pure() {
        let answers = [
            Archetype::Relatedness,
            Archetype::Competence,
            Archetype::Relatedness,
        ];
        assert_eq!(classify(&answers), classify(&answers));
    }

    #[test]
    fn start_resets_index_and_answers() {
        let mut session = QuizSession::default();
        session.answers.push(Archetype::Growth);
        session.question_index = 7;
        session.start();
        assert_eq!(session.stage, Stage::Quiz);
        assert_eq!(session.question_index, 0);
        assert!(session.answers.is_empty());
        assert!(session.result.is_none());
    }

    #[test]
    fn answering_every_question_lands_on_result_with_a_classification() {
        let mut session = QuizSession::default();
        session.start();
        for i in 0..questions::QUESTIONS.len() {
            let advance = session.submit_answer(Archetype::Relatedness);
            if i + 1 < questions::QUESTIONS.len() {
                assert_eq!(advance, Advance::NextQuestion);
                assert_eq!(session.stage, Stage::Quiz);
                assert_eq!(session.question_index, i + 1);
            } else {
                assert_eq!(advance, Advance::Completed);
                assert_eq!(session.stage, Stage::Result);
            }
        }
        let result = session.result.expect("completed quiz must carry a result");
        assert_eq!(result.dominant, Archetype::Relatedness);
        assert_eq!(
            result.scores[&Archetype::Relatedness] as usize,
            questions::QUESTIONS.len()
        );
    }

    #[test]
    fn answers_outside_quiz_stage_are_ignored() {
        let mut session = QuizSession::default();
        assert_eq!(session.submit_answer(Archetype::Growth), Advance::Ignored);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn reset_returns_to_landing_from_any_stage() {
        for stage in [Stage::Landing, Stage::Quiz, Stage::Result, Stage::Oracle] {
            let mut session = QuizSession {
                stage,
                question_index: 3,
                answers: vec![Archetype::Autonomy],
                result: Some(classify(&[Archetype::Autonomy])),
            };
            session.reset();
            assert_eq!(session.stage, Stage::Landing);
            assert!(session.answers.is_empty());
            assert!(session.result.is_none());
        }
    }

    #[test]
    fn enter_oracle_only_from_result() {
        let mut session = QuizSession::default();
        session.enter_oracle();
        assert_eq!(session.stage, Stage::Landing);

        session.start();
        for _ in 0..questions::QUESTIONS.len() {
            session.submit_answer(Archetype::Autonomy);
        }
        session.enter_oracle();
        assert_eq!(session.stage, Stage::Oracle);
    }
}
