//! Nom-based line framer.
//!
//! Splits one protocol line into its syntactic parts without copying.
//! Every optional part is parsed with `opt`, so framing degrades to empty
//! parts instead of failing.

use nom::{
    bytes::complete::{take_till, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse the tag block (the part after `@` and before the first space).
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRCv3 message tags",
        preceded(char('@'), take_till(|c: char| c == ' ')),
    )(input)
}

/// Parse the source prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_while1(|c: char| c != ' ')),
    )(input)
}

/// Parse the command token, word or numeric.
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context("parsing command", take_while1(|c: char| c != ' '))(input)
}

/// Split the parameter list. A parameter starting with `:` is the long
/// parameter and takes the remainder of the line.
fn split_params(mut rest: &str) -> Vec<&str> {
    let mut params = Vec::new();
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }
        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }
    params
}

/// Frame a complete line into its components.
///
/// Line format:
/// ```text
/// [@tags] [:prefix] <command> [params...] [:trailing]
/// ```
fn parse_line(input: &str) -> ParseResult<&str, FramedLine<'_>> {
    let raw = input;
    let body = input.trim_end_matches(['\r', '\n']);

    let (rest, tags) = context("parsing optional tags", opt(parse_tags))(body)?;
    let (rest, _) = space0::<_, VerboseError<&str>>(rest)?;

    let (rest, prefix) = context("parsing optional prefix", opt(parse_prefix))(rest)?;
    let (rest, _) = space0::<_, VerboseError<&str>>(rest)?;

    let (rest, command) = context("parsing optional command", opt(parse_command))(rest)?;

    let source_username = prefix
        .and_then(|p| p.split_once('!'))
        .map(|(nick, _)| nick)
        .unwrap_or_default();

    Ok((
        "",
        FramedLine {
            raw,
            tags,
            prefix,
            source_username,
            command: command.unwrap_or_default(),
            params: split_params(rest),
        },
    ))
}

/// A framed protocol line with borrowed string slices.
///
/// This is the intermediate representation handed to the type-specific
/// decoders. It holds references into the original line and lives only
/// for the duration of one decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedLine<'a> {
    /// The untouched input line.
    pub raw: &'a str,
    /// Raw tag block (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw source prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// Nickname part of a `nick!user@host` prefix, empty otherwise.
    pub source_username: &'a str,
    /// Command token, empty when the line carries none.
    pub command: &'a str,
    /// Parameters in wire order, the long parameter last.
    pub params: Vec<&'a str>,
}

impl<'a> FramedLine<'a> {
    /// Frame a line. Never fails; missing parts come back empty.
    pub fn parse(input: &'a str) -> FramedLine<'a> {
        match parse_line(input) {
            Ok((_, framed)) => framed,
            Err(_) => FramedLine {
                raw: input,
                tags: None,
                prefix: None,
                source_username: "",
                command: "",
                params: Vec::new(),
            },
        }
    }

    /// Parameter at `index`, or the empty string.
    pub fn param(&self, index: usize) -> &'a str {
        self.params.get(index).copied().unwrap_or_default()
    }

    /// Message body: the long parameter of a `<target> :<body>` line.
    ///
    /// Any other parameter count has no well-defined body and yields the
    /// empty string.
    pub fn body(&self) -> &'a str {
        match self.params.as_slice() {
            &[_, body] => body,
            _ => "",
        }
    }

    /// Channel name taken from the parameter at `index`, `#` stripped.
    pub fn channel_at(&self, index: usize) -> &'a str {
        let param = self.param(index);
        param.strip_prefix('#').unwrap_or(param)
    }
}
