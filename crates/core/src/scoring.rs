//! Pure scoring over the answer record and the answer key.

use crate::model::Question;

/// Count of positions where the chosen option matches the question's answer
/// key. Absent answers never match. Pure and deterministic.
#[must_use]
pub fn compute_score(answers: &[Option<usize>], bank: &[Question]) -> u32 {
    answers
        .iter()
        .zip(bank)
        .filter(|(answer, question)| **answer == Some(question.correct_index()))
        .count() as u32
}

/// Score as a rounded whole-number percentage of the bank size.
#[must_use]
pub fn percentage(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = total as u64;
    let scaled = u64::from(score) * 100;
    // round-half-up, matching the original round(100 * score / N)
    ((scaled + total / 2) / total) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(keys: &[usize]) -> Vec<Question> {
        keys.iter()
            .map(|correct| {
                Question::new(
                    "prompt",
                    vec!["a".into(), "b".into(), "c".into()],
                    *correct,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn counts_matching_positions() {
        let bank = bank(&[2, 1, 2]);
        let answers = [Some(2), Some(1), Some(0)];
        assert_eq!(compute_score(&answers, &bank), 2);
    }

    #[test]
    fn absent_answers_never_match() {
        let bank = bank(&[0, 1, 2]);
        let answers = [None, Some(1), None];
        assert_eq!(compute_score(&answers, &bank), 1);
        assert_eq!(compute_score(&[None, None, None], &bank), 0);
    }

    #[test]
    fn full_marks() {
        let bank = bank(&[0, 1]);
        assert_eq!(compute_score(&[Some(0), Some(1)], &bank), 2);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(29, 30), 97);
        assert_eq!(percentage(0, 30), 0);
        assert_eq!(percentage(30, 30), 100);
    }

    #[test]
    fn percentage_of_empty_bank_is_zero() {
        assert_eq!(percentage(0, 0), 0);
    }
}
