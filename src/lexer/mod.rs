use logos::Logos;

/// Tokens of a thread designation such as `MF 10 x 1.25`, `UNEF 1 1/16-18`,
/// `HC M8 x 1.25` or `G (PF) 3/8`.
///
/// Keywords are case-insensitive. Anything the lexer does not know becomes a
/// `LexerError` with its span, which the parser treats as the end of the
/// readable part.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\f\r\n]+")]
#[logos(error = LexerError)]
pub enum Token {
    #[regex(r"[0-9]+\.?[0-9]*", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Heli-Coil prefix: "HC", "Heli-Coil", "Heli Coil", "HeliCoil"
    #[token("hc", ignore(ascii_case))]
    #[regex(r"heli[ \t\-]?coil", ignore(ascii_case))]
    HeliCoil,

    // Metric
    #[token("m", ignore(ascii_case))]
    Metric,

    #[token("mf", ignore(ascii_case))]
    MetricFine,

    // Unified
    #[token("unc", ignore(ascii_case))]
    Unc,

    #[token("unf", ignore(ascii_case))]
    Unf,

    #[token("unef", ignore(ascii_case))]
    Unef,

    // Pipe threads
    #[token("pt", ignore(ascii_case))]
    Pt,

    #[token("npt", ignore(ascii_case))]
    Npt,

    #[token("g", ignore(ascii_case))]
    G,

    #[token("pf", ignore(ascii_case))]
    Pf,

    // Punctuation
    #[token("x", ignore(ascii_case))]
    By,

    #[token("/")]
    Slash,

    #[token("-")]
    Dash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LexerError;

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized character in designation")
    }
}

impl std::error::Error for LexerError {}

/// Lex a designation into tokens, stopping at the first unreadable character.
///
/// Designations are short and anything after garbage is not trusted, so the
/// readable prefix is all the parser ever sees.
pub fn lex(input: &str) -> Vec<(Token, logos::Span)> {
    Token::lexer(input)
        .spanned()
        .map_while(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}

/// Spans of every character run the lexer could not read.
pub fn unrecognized_spans(input: &str) -> Vec<logos::Span> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.err().map(|_| span))
        .collect()
}
