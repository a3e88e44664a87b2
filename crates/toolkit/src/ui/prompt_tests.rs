// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[test]
fn test_prompt_display() {
    let prompt = Prompt::new(PromptKind::MultiSelect, "Colors?", Vec::<String>::new());
    assert_eq!(prompt.to_string(), "<MultiSelect msg=Colors?>");
    assert_eq!(prompt.describe(), "<MultiSelect msg=Colors?>");
    assert_eq!(prompt.record(), prompt);
}

#[test]
fn test_prompt_builders() {
    let prompt = Prompt::new(PromptKind::Select, "Country?", "US")
        .with_options(&["US", "CA"])
        .with_prompt_options(&PromptOptions::new().help("Where you live"));

    assert_eq!(prompt.default, Answer::String("US".into()));
    assert_eq!(prompt.options, ["US", "CA"]);
    assert_eq!(prompt.help.as_deref(), Some("Where you live"));
}

#[test]
fn test_prompt_options_from_help() {
    assert_eq!(PromptOptions::from_help(""), PromptOptions::default());
    assert_eq!(PromptOptions::from_help("x").help.as_deref(), Some("x"));
}

#[parameterized(
    bool_true = { Answer::Bool(true), true },
    bool_false = { Answer::Bool(false), false },
    string_t = { Answer::from("t"), true },
    string_yes = { Answer::from("Yes"), true },
    string_one = { Answer::from("1"), true },
    string_false = { Answer::from("FALSE"), false },
    string_empty = { Answer::from(""), false },
)]
fn test_answer_to_bool(answer: Answer, expected: bool) {
    assert_eq!(answer.to_bool().unwrap(), expected);
}

#[test]
fn test_answer_to_bool_rejects_garbage() {
    let err = Answer::from("maybe").to_bool().unwrap_err();
    assert_eq!(err.to_string(), "cannot use 'maybe' as bool");

    let err = Answer::Strings(vec!["a".into()]).to_bool().unwrap_err();
    assert_eq!(err.to_string(), "cannot use '[a]' as bool");
}

#[test]
fn test_answer_into_string() {
    assert_eq!(Answer::from("foo").into_string().unwrap(), "foo");
    assert_eq!(Answer::Bool(true).into_string().unwrap(), "true");
    assert!(matches!(
        Answer::Strings(vec![]).into_string().unwrap_err(),
        UiError::InvalidAnswer { expected: "string", .. }
    ));
}

#[test]
fn test_answer_into_strings() {
    assert_eq!(
        Answer::from(vec!["a".to_string(), "b".to_string()])
            .into_strings()
            .unwrap(),
        ["a", "b"]
    );
    assert_eq!(
        Answer::from("red  blue").into_strings().unwrap(),
        ["red", "blue"]
    );
    assert!(Answer::Bool(true).into_strings().is_err());
}
