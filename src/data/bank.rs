use crate::models::Question;

static QUESTIONS: [Question; 10] = [
    Question {
        id: 1,
        prompt: "What is the capital of France?",
        options: ["London", "Berlin", "Paris", "Madrid"],
        correct_option: 2,
    },
    Question {
        id: 2,
        prompt: "Which planet is known as the Red Planet?",
        options: ["Venus", "Mars", "Jupiter", "Saturn"],
        correct_option: 1,
    },
    Question {
        id: 3,
        prompt: "What is the largest ocean on Earth?",
        options: ["Atlantic", "Indian", "Arctic", "Pacific"],
        correct_option: 3,
    },
    Question {
        id: 4,
        prompt: "Who painted the Mona Lisa?",
        options: [
            "Vincent van Gogh",
            "Leonardo da Vinci",
            "Pablo Picasso",
            "Michelangelo",
        ],
        correct_option: 1,
    },
    Question {
        id: 5,
        prompt: "What is the chemical symbol for gold?",
        options: ["Go", "Gd", "Au", "Ag"],
        correct_option: 2,
    },
    Question {
        id: 6,
        prompt: "Which country is home to Machu Picchu?",
        options: ["Brazil", "Peru", "Chile", "Ecuador"],
        correct_option: 1,
    },
    Question {
        id: 7,
        prompt: "What is the smallest prime number?",
        options: ["0", "1", "2", "3"],
        correct_option: 2,
    },
    Question {
        id: 8,
        prompt: "Which instrument did Beethoven primarily compose for?",
        options: ["Violin", "Piano", "Cello", "Flute"],
        correct_option: 1,
    },
    Question {
        id: 9,
        prompt: "What is the hardest natural substance on Earth?",
        options: ["Gold", "Iron", "Diamond", "Platinum"],
        correct_option: 2,
    },
    Question {
        id: 10,
        prompt: "Which year did World War II end?",
        options: ["1944", "1945", "1946", "1947"],
        correct_option: 1,
    },
];

/// The fixed general-knowledge question set, in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OPTION_COUNT;

    #[test]
    fn test_bank_is_fixed() {
        let bank = questions();
        assert_eq!(bank.len(), 10);

        let correct: Vec<usize> = bank.iter().map(|q| q.correct_option).collect();
        assert_eq!(correct, vec![2, 1, 3, 1, 2, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_ids_are_sequential_and_options_valid() {
        for (index, question) in questions().iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
            assert!(question.correct_option < OPTION_COUNT);
            assert!(question.options.iter().all(|option| !option.is_empty()));
        }
    }
}
