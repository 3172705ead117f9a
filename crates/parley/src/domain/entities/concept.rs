//! Concept - Built-in programming concepts the tutor can teach

use serde::Serialize;

/// A teachable concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sample_question: &'static str,
}

const CATALOGUE: &[Concept] = &[
    Concept {
        id: "variables",
        title: "Variables",
        summary: "A variable is a name bound to a value so the program can store it and use it later.",
        sample_question: "What is a variable, and why would you give a value a name?",
    },
    Concept {
        id: "loops",
        title: "Loops",
        summary: "A loop repeats a block of code, either a fixed number of times or while a condition holds.",
        sample_question: "When would you use a loop instead of writing the same line several times?",
    },
    Concept {
        id: "functions",
        title: "Functions",
        summary: "A function is a named, reusable block of code that takes inputs and can return a result.",
        sample_question: "What are parameters and return values, and how do they work together?",
    },
    Concept {
        id: "conditionals",
        title: "Conditionals",
        summary: "Conditionals choose which code runs based on whether a condition is true or false.",
        sample_question: "How does an if-else statement decide which branch to run?",
    },
];

impl Concept {
    /// All built-in concepts, in teaching order
    pub fn catalogue() -> &'static [Concept] {
        CATALOGUE
    }

    /// Look up a concept by id (case-insensitive)
    pub fn find(id: &str) -> Option<&'static Concept> {
        let id = id.trim();
        CATALOGUE.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }
}
