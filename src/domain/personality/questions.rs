//! The fixed question catalog.

/// One selectable answer and the weight it adds to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: &'static str,
    pub weight: u8,
}

/// A multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [AnswerOption; 5],
}

const fn opt(text: &'static str, weight: u8) -> AnswerOption {
    AnswerOption { text, weight }
}

/// Questions in the order they are asked.
pub static QUESTIONS: [Question; 5] = [
    Question {
        prompt: "How often do you worry about your health?",
        options: [
            opt("Never", 1),
            opt("Rarely", 2),
            opt("Sometimes", 3),
            opt("Often", 4),
            opt("Constantly", 5),
        ],
    },
    Question {
        prompt: "When you feel unwell, what do you usually think?",
        options: [
            opt("It's probably nothing", 1),
            opt("I should monitor it", 2),
            opt("I should see a doctor soon", 3),
            opt("This could be serious", 4),
            opt("I'm definitely dying", 5),
        ],
    },
    Question {
        prompt: "How do you handle uncertainty?",
        options: [
            opt("Very well", 1),
            opt("Pretty well", 2),
            opt("Okay", 3),
            opt("Poorly", 4),
            opt("I panic immediately", 5),
        ],
    },
    Question {
        prompt: "Your general outlook on life is:",
        options: [
            opt("Very optimistic", 1),
            opt("Mostly positive", 2),
            opt("Neutral", 3),
            opt("Somewhat pessimistic", 4),
            opt("Doom and gloom", 5),
        ],
    },
    Question {
        prompt: "How often do you Google your symptoms?",
        options: [
            opt("Never", 1),
            opt("Rarely", 2),
            opt("Sometimes", 3),
            opt("Frequently", 4),
            opt("Every single symptom", 5),
        ],
    },
];
