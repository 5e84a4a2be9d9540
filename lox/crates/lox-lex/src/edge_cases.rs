//! Edge case tests for lox-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Literal, Token, TokenKind};
    use lox_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        tokenize(source, &mut handler)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(lex_all(""), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert_eq!(lex_all(" \t\r\n\n"), vec![Token::eof(3)]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].lexeme(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert_eq!(t[1].lexeme(), name);
    }

    #[test]
    fn test_edge_keyword_prefix() {
        let t = lex_all("forest");
        assert_eq!(t[0].to_string(), "IDENTIFIER forest null");
    }

    #[test]
    fn test_edge_keyword_followed_by_digit() {
        assert_eq!(kinds("and1 and"), vec![TokenKind::Identifier, TokenKind::And, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_trailing_dot() {
        assert_eq!(kinds("1."), vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_leading_dot() {
        let t = lex_all(".5");
        assert_eq!(t[0].kind(), TokenKind::Dot);
        assert_eq!(t[1].to_string(), "NUMBER 5 5");
    }

    #[test]
    fn test_edge_method_call_on_number() {
        assert_eq!(
            kinds("1.abs"),
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_negative_number() {
        assert_eq!(kinds("-1"), vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("12abc"), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_bang_then_other() {
        assert_eq!(
            kinds("!!="),
            vec![TokenKind::Bang, TokenKind::BangEqual, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_triple_equal() {
        assert_eq!(
            kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_operator_spaced_from_equal() {
        assert_eq!(
            kinds("< ="),
            vec![TokenKind::Less, TokenKind::Equal, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_comment_at_end_of_input() {
        assert_eq!(kinds("1 // done"), vec![TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_comment_only() {
        assert_eq!(lex_all("// nothing here"), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_lines_across_comments() {
        let t = lex_all("// one\n// two\nx");
        assert_eq!(t[0].line(), 3);
    }

    #[test]
    fn test_edge_carriage_return_newlines() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[0].line(), 1);
        assert_eq!(t[1].line(), 2);
    }

    #[test]
    fn test_edge_string_with_comment_marker() {
        let t = lex_all("\"// not a comment\"");
        assert_eq!(t[0].literal(), &Literal::from("// not a comment"));
    }

    #[test]
    fn test_edge_unterminated_string_advances_lines() {
        let mut handler = Handler::new();
        let t = tokenize("\"a\nb\nc", &mut handler);
        assert_eq!(t, vec![Token::eof(3)]);
        assert_eq!(
            handler.diagnostics()[0].to_string(),
            "[line 3] Error: Unterminated string."
        );
    }

    #[test]
    fn test_edge_string_after_error() {
        let mut handler = Handler::new();
        let t = tokenize("@\"ok\"", &mut handler);
        assert_eq!(t[0].to_string(), "STRING \"ok\" \"ok\"");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_error_line_numbers() {
        let mut handler = Handler::new();
        tokenize("\n\n  %", &mut handler);
        assert_eq!(
            handler.diagnostics()[0].to_string(),
            "[line 3] Error: Unexpected character: %"
        );
    }

    #[test]
    fn test_edge_non_ascii_identifier_start() {
        let mut handler = Handler::new();
        let t = tokenize("é", &mut handler);
        assert_eq!(t, vec![Token::eof(1)]);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_non_ascii_inside_identifier() {
        let mut handler = Handler::new();
        let t = tokenize("caf\u{e9}s", &mut handler);
        let lexemes: Vec<&str> = t.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["caf", "s", ""]);
        assert_eq!(
            handler.diagnostics()[0].message,
            "Unexpected character: \u{e9}"
        );
    }

    #[test]
    fn test_edge_every_punctuation() {
        let t = lex_all("(){},.-+;*/");
        assert_eq!(t.len(), 12);
        assert!(t[..11].iter().all(|tok| tok.literal() == &Literal::Nil));
    }

    #[test]
    fn test_edge_tokens_keep_source_order() {
        let t = lex_all("a\nb c\n\nd");
        let lines: Vec<u32> = t.iter().map(Token::line).collect();
        assert_eq!(lines, vec![1, 2, 2, 4, 4]);
    }
}

#[cfg(test)]
mod proptests {
    use crate::{tokenize, Literal, Token, TokenKind};
    use lox_util::Handler;
    use proptest::prelude::*;

    fn lex(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = tokenize(source, &mut handler);
        (tokens, handler)
    }

    proptest! {
        #[test]
        fn never_panics_and_ends_with_one_eof(source in any::<String>()) {
            let (tokens, _) = lex(&source);
            let eofs = tokens.iter().filter(|t| t.is_eof()).count();
            prop_assert_eq!(eofs, 1);
            prop_assert!(tokens.last().map_or(false, Token::is_eof));
        }

        #[test]
        fn eof_line_counts_newlines(source in "[a-z0-9 \n(){};+\\-*]{0,200}") {
            let (tokens, handler) = lex(&source);
            prop_assert!(!handler.has_errors());
            let newlines = source.matches('\n').count() as u32;
            prop_assert_eq!(tokens.last().map(Token::line), Some(newlines + 1));
        }

        #[test]
        fn integer_round_trips(n in 0u32..=u32::MAX) {
            let source = n.to_string();
            let (tokens, _) = lex(&source);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].to_string(), format!("NUMBER {} {}", n, n));
        }

        #[test]
        fn fraction_round_trips(whole in 0u32..100_000, frac in 1u32..1000) {
            let source = format!("{}.{}", whole, frac);
            let (tokens, _) = lex(&source);
            let expected: f64 = source.parse().unwrap();
            prop_assert_eq!(tokens[0].lexeme(), source.as_str());
            prop_assert_eq!(tokens[0].literal(), &Literal::Number(expected));
        }

        #[test]
        fn identifiers_use_maximal_munch(word in "[a-zA-Z_][a-zA-Z0-9_]{0,20}") {
            let (tokens, _) = lex(&word);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme(), word.as_str());
            let expected = crate::keyword_from_ident(&word).unwrap_or(TokenKind::Identifier);
            prop_assert_eq!(tokens[0].kind(), expected);
        }

        #[test]
        fn strings_keep_their_content(content in "[^\"]{0,50}") {
            let source = format!("\"{}\"", content);
            let (tokens, handler) = lex(&source);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens[0].kind(), TokenKind::String);
            prop_assert_eq!(tokens[0].literal(), &Literal::String(content.clone()));
        }

        #[test]
        fn lexemes_are_source_slices(source in "[a-z0-9 .!=<>\"\n]{0,100}") {
            let (tokens, _) = lex(&source);
            for token in &tokens {
                prop_assert!(source.contains(token.lexeme()));
            }
        }
    }
}
