use nom::{
    character::complete::digit1,
    combinator::{all_consuming, opt},
    error::{ErrorKind as NomErrorKind, ParseError},
    sequence::pair,
    Err, IResult,
};

use crate::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    NextMonth(u32),
    PrevMonth(u32),
    Today,
    Pick(u32),
    Exit,
}

pub type CmdResult = Result<Cmd>;

pub enum Action {
    NoArg(fn() -> Cmd),
    Repeatable(fn(u32) -> Cmd),
}

const COMMANDS: &[(&str, Action)] = &[
    ("n", Action::Repeatable(Cmd::NextMonth)),
    ("next", Action::Repeatable(Cmd::NextMonth)),
    ("p", Action::Repeatable(Cmd::PrevMonth)),
    ("prev", Action::Repeatable(Cmd::PrevMonth)),
    ("t", Action::NoArg(|| Cmd::Today)),
    ("today", Action::NoArg(|| Cmd::Today)),
    ("q", Action::NoArg(|| Cmd::Exit)),
    ("quit", Action::NoArg(|| Cmd::Exit)),
];

pub fn match_action<'a, 's, T: ?Sized, Act: 's>(
    c: &'a T,
) -> impl Fn(&str) -> IResult<&str, (&'s str, &'s Act)> + 'a
where
    &'a T: IntoIterator<Item = &'s (&'s str, Act)>,
{
    move |input| {
        if let Some((name, act)) = c.into_iter().find(|(name, _)| name == &input) {
            Ok(("", (*name, act)))
        } else {
            Err(Err::Failure(ParseError::from_error_kind(
                input,
                NomErrorKind::Tag,
            )))
        }
    }
}

/// Parses one line of the interactive prompt.
///
/// A bare number picks that day of the displayed month; `n`/`p` take an
/// optional repeat prefix such as `3n`.
pub fn parse_cmd(line: &str) -> CmdResult {
    let line = line.trim();

    if line.is_empty() {
        return Ok(Cmd::Noop);
    }

    if let Ok((_, day)) = all_consuming(digit1::<_, nom::error::Error<&str>>)(line) {
        return Ok(Cmd::Pick(day.parse()?));
    }

    let (_, (repeat, (_, act))) = all_consuming(pair(opt(digit1), match_action(COMMANDS)))(line)
        .map_err(|e| Error::from(e).with_msg(&format!("unknown command '{}'", line)))?;

    match (act, repeat) {
        (Action::Repeatable(a), Some(repeat)) => Ok(a(repeat.parse()?)),
        (Action::Repeatable(a), None) => Ok(a(1)),
        (Action::NoArg(a), None) => Ok(a()),
        (Action::NoArg(_), Some(_)) => Err(Error::new(
            ErrorKind::CommandParse,
            &format!("'{}' does not take a count", line),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_noop() {
        assert_eq!(parse_cmd("").unwrap(), Cmd::Noop);
        assert_eq!(parse_cmd("   ").unwrap(), Cmd::Noop);
    }

    #[test]
    fn bare_number_picks_day() {
        assert_eq!(parse_cmd("10").unwrap(), Cmd::Pick(10));
        assert_eq!(parse_cmd(" 3 ").unwrap(), Cmd::Pick(3));
    }

    #[test]
    fn navigation_with_and_without_count() {
        assert_eq!(parse_cmd("n").unwrap(), Cmd::NextMonth(1));
        assert_eq!(parse_cmd("next").unwrap(), Cmd::NextMonth(1));
        assert_eq!(parse_cmd("3p").unwrap(), Cmd::PrevMonth(3));
        assert_eq!(parse_cmd("12next").unwrap(), Cmd::NextMonth(12));
        assert_eq!(parse_cmd("today").unwrap(), Cmd::Today);
        assert_eq!(parse_cmd("q").unwrap(), Cmd::Exit);
    }

    #[test]
    fn rejects_unknown_and_miscounted_commands() {
        let err = parse_cmd("jump").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::CommandParse));
        assert!(parse_cmd("2q").is_err());
        assert!(parse_cmd("n2").is_err());
        assert!(parse_cmd("99999999999").is_err());
    }
}
