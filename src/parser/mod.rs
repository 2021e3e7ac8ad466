//! Designation parser
//!
//! Turns a thread designation string into a [`Designation`]: the Heli-Coil
//! flag, the base (prefix-stripped) text, a tagged [`DesignationKind`] and the
//! pre-computed [`Series`]. Parsing never fails; text that matches no known
//! pattern becomes [`DesignationKind::Unrecognized`].

use crate::lexer::{lex, Token};
use serde::{Deserialize, Serialize};

pub mod series;

pub use series::{classify, coarse_pitch_for, Series, COARSE_PITCH};

/// Metric letter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricLabel {
    /// `M`, coarse by convention unless the pitch says otherwise
    M,
    /// `MF`, always fine
    MF,
}

/// Unified inch series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnifiedSeries {
    Unc,
    Unf,
    Unef,
}

/// Pipe thread standards. These never take part in series filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeStandard {
    /// Japanese taper pipe (PT / R)
    Pt,
    /// American taper pipe
    Npt,
    /// BSPP parallel pipe, written `G (PF)`
    G,
}

/// What a designation turned out to be, with the numbers it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignationKind {
    Metric {
        label: MetricLabel,
        /// Nominal diameter in mm
        diameter: f64,
        /// Pitch in mm when written (`M 12 x 1.5`)
        pitch: Option<f64>,
    },
    Unified {
        series: UnifiedSeries,
        /// Nominal size in inches (`1 1/16` -> 1.0625)
        nominal_in: Option<f64>,
        /// Threads per inch
        tpi: Option<f64>,
    },
    Pipe {
        standard: PipeStandard,
    },
    Unrecognized,
}

/// A parsed thread designation.
///
/// Equality and hashing use the text as written, so `MF 8 x 1.0` and
/// `MF 8 x 1.00` are different sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Designation {
    raw: String,
    base: String,
    heli_coil: bool,
    kind: DesignationKind,
    series: Series,
}

impl Designation {
    pub fn parse(input: &str) -> Self {
        let text = input.trim();
        let tokens = lex(text);

        let (heli_coil, base, skip) = match tokens.first() {
            Some((Token::HeliCoil, span)) => {
                let rest = text[span.end..]
                    .trim_start_matches(|c: char| c.is_whitespace() || c == '-')
                    .trim();
                let skip = 1 + tokens[1..]
                    .iter()
                    .take_while(|(t, _)| *t == Token::Dash)
                    .count();
                (true, rest.to_string(), skip)
            }
            _ => (false, text.to_string(), 0),
        };

        let mut parser = Parser::new(text, tokens.into_iter().skip(skip).collect());
        let kind = parser.parse_kind();
        let series = series::series_of(heli_coil, &kind);

        Self {
            raw: input.to_string(),
            base,
            heli_coil,
            kind,
            series,
        }
    }

    /// The designation exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Designation with any Heli-Coil prefix removed (`HC M8 x 1.25` -> `M8 x 1.25`).
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_heli_coil(&self) -> bool {
        self.heli_coil
    }

    pub fn kind(&self) -> &DesignationKind {
        &self.kind
    }

    pub fn series(&self) -> Series {
        self.series
    }

    /// True for M/MF designations, with or without a Heli-Coil prefix.
    /// These are the sizes a Heli-Coil insert can be fitted to.
    pub fn is_metric(&self) -> bool {
        matches!(self.kind, DesignationKind::Metric { .. })
    }

    /// Heli-Coil display form: `HC ` followed by the base designation.
    pub fn heli_coil_display(&self) -> String {
        format!("HC {}", self.base)
    }
}

impl PartialEq for Designation {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Designation {}

impl std::hash::Hash for Designation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl std::fmt::Display for Designation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for Designation {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Designation {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Designation> for String {
    fn from(d: Designation) -> Self {
        d.raw
    }
}

/// Strip a Heli-Coil prefix and surrounding separators.
pub fn base_metric_of(designation: &str) -> String {
    Designation::parse(designation).base
}

/// `HC <base>` for any designation, prefixed or not.
pub fn heli_coil_display(designation: &str) -> String {
    Designation::parse(designation).heli_coil_display()
}

/// M/MF check that looks through a Heli-Coil prefix.
pub fn is_metric_size(designation: &str) -> bool {
    Designation::parse(designation).is_metric()
}

/// Parser over the tokens that follow the Heli-Coil prefix.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<(Token, logos::Span)>,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: Vec<(Token, logos::Span)>) -> Self {
        Self {
            source,
            tokens,
            position: 0,
        }
    }

    fn parse_kind(&mut self) -> DesignationKind {
        match self.peek() {
            Some(Token::Metric) => self.parse_metric(MetricLabel::M),
            Some(Token::MetricFine) => self.parse_metric(MetricLabel::MF),
            Some(Token::Unc) if self.keyword_ends_word() => self.parse_unified(UnifiedSeries::Unc),
            Some(Token::Unf) if self.keyword_ends_word() => self.parse_unified(UnifiedSeries::Unf),
            Some(Token::Unef) if self.keyword_ends_word() => {
                self.parse_unified(UnifiedSeries::Unef)
            }
            Some(Token::Pt) if self.keyword_ends_word() => DesignationKind::Pipe {
                standard: PipeStandard::Pt,
            },
            Some(Token::Npt) if self.keyword_ends_word() => DesignationKind::Pipe {
                standard: PipeStandard::Npt,
            },
            Some(Token::G) if self.keyword_ends_word() => DesignationKind::Pipe {
                standard: PipeStandard::G,
            },
            _ => DesignationKind::Unrecognized,
        }
    }

    // M|MF <diameter> [x <pitch>]
    fn parse_metric(&mut self, label: MetricLabel) -> DesignationKind {
        self.advance();
        let Some(diameter) = self.number() else {
            return DesignationKind::Unrecognized;
        };

        let pitch = if self.peek() == Some(&Token::By) {
            self.advance();
            self.number()
        } else {
            None
        };

        DesignationKind::Metric {
            label,
            diameter,
            pitch,
        }
    }

    // UNx [whole] [num/den]-tpi
    fn parse_unified(&mut self, series: UnifiedSeries) -> DesignationKind {
        self.advance();
        let nominal_in = self.nominal_inches();
        let tpi = if nominal_in.is_some() && self.peek() == Some(&Token::Dash) {
            self.advance();
            self.number()
        } else {
            None
        };

        DesignationKind::Unified {
            series,
            nominal_in,
            tpi,
        }
    }

    fn nominal_inches(&mut self) -> Option<f64> {
        let first = self.number()?;
        match self.peek() {
            Some(Token::Slash) => {
                self.advance();
                let den = self.number()?;
                (den != 0.0).then(|| first / den)
            }
            Some(Token::Number(_)) => {
                let num = self.number()?;
                if self.peek() != Some(&Token::Slash) {
                    return None;
                }
                self.advance();
                let den = self.number()?;
                (den != 0.0).then(|| first + num / den)
            }
            _ => Some(first),
        }
    }

    /// Series keywords only count when not glued to further word characters
    /// (`UNC 1/2-13` yes, `UNC1/2` or `UNCX` no).
    fn keyword_ends_word(&self) -> bool {
        let Some((_, span)) = self.tokens.get(self.position) else {
            return false;
        };
        self.source[span.end..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
    }

    fn number(&mut self) -> Option<f64> {
        match self.peek() {
            Some(Token::Number(n)) => {
                let val = *n;
                self.advance();
                Some(val)
            }
            _ => None,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(t, _)| t)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}
