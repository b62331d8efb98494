#![no_main]

use libfuzzer_sys::fuzz_target;
use rotor_core::lexer::{Lexer, LexicalGoal};

const GOALS: [LexicalGoal; 4] = [
    LexicalGoal::InputElementDiv,
    LexicalGoal::InputElementRegExp,
    LexicalGoal::InputElementRegExpOrTemplateTail,
    LexicalGoal::InputElementTemplateTail,
];

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let total = input.chars().count();

    for goal in GOALS {
        let mut lexer = Lexer::new();
        // Either a full token stream or a structured error; never a panic.
        let _ = lexer.tokenise(input, goal);

        // Positions are in bounds and strictly increasing, and every token
        // value fits between its position and the end of the input.
        let mut last_pos = None;
        for token in lexer.tokens() {
            assert!(token.pos < total, "token starts past the end of input");
            if let Some(prev) = last_pos {
                assert!(token.pos > prev, "token positions must increase");
            }
            last_pos = Some(token.pos);
        }
    }
});
