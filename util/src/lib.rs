use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result};
use miette::GraphicalReportHandler;
use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    error::ParseError,
    sequence::tuple,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: BaseErrorKind<&'a str, Box<dyn std::error::Error + Send + Sync>>,
}

pub fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + nom::error::FromExternalError<Span<'a>, anyhow::Error>,
{
    map_res(recognize(tuple((opt(char('-')), digit1))), |i: Span<'a>| {
        FromStr::from_str(i.fragment()).map_err(anyhow::Error::msg)
    })(i)
}

/// Runs a line parser to completion. A line that fails to parse gets a
/// rendered report on stdout and comes back as `None`, so downstream
/// accumulators see an explicit absent value instead of a crash.
pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Option<T>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    match line {
        Ok(line) => Some(line),
        Err(e) => {
            match e {
                GenericErrorTree::Base { location, kind } => {
                    let offset = location.location_offset().into();
                    let err = BadInput {
                        src: l,
                        bad_bit: miette::SourceSpan::new(offset, 0.into()),
                        kind,
                    };
                    let mut s = String::new();
                    GraphicalReportHandler::new()
                        .render_report(&mut s, &err)
                        .unwrap();
                    println!("{s}");
                }
                e => {
                    println!("bad input: {e:?}");
                }
            }
            None
        }
    }
}

/// Lazily yields the lines of a puzzle input file, in file order. Lines that
/// fail to decode are dropped; a file that cannot be opened is an error for
/// the caller to surface.
pub fn read_lines(path: impl AsRef<Path>) -> Result<impl Iterator<Item = String>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    Ok(BufReader::new(file).lines().filter_map(|l| l.ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_ok() {
        let parsed = parse_nice("199", parse_number);
        assert_eq!(parsed, Some(199));
    }

    #[test]
    fn negative_number_ok() {
        let parsed = parse_nice("-42", parse_number);
        assert_eq!(parsed, Some(-42));
    }

    #[test]
    fn garbage_is_absent() {
        let parsed = parse_nice("not a depth", parse_number);
        assert_eq!(parsed, None);
    }

    #[test]
    fn trailing_garbage_is_absent() {
        let parsed = parse_nice("199x", parse_number);
        assert_eq!(parsed, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_lines("data/no_such_input.txt").is_err());
    }
}
