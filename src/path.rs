// MIT/Apache2 License

use crate::{Error, Result};
use linecrop_geometry::{point, LineSegment, Point};
use lyon_path::{math, Path};
use std::{fmt::Write as _, iter::Peekable, str::FromStr};
use tinyvec::ArrayVec;

/// The number of fractional digits [`encode_path`] writes for each coordinate.
pub const DEFAULT_PRECISION: usize = 3;

/// A single command of the straight-line path grammar.
///
/// Only absolute straight lines exist here. Lowercase letters are read as their uppercase counterparts,
/// and curve or arc commands are refused by the decoder instead of being approximated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    /// `M x y`, starts a new subpath.
    Move(Point<f64>),
    /// `L x y`
    LineTo(Point<f64>),
    /// `H x`
    HorizontalTo(f64),
    /// `V y`
    VerticalTo(f64),
    /// `Z`
    Close,
}

impl PathCommand {
    /// The point this command adds to the decoded point list, if any.
    ///
    /// `H` and `V` only carry one coordinate. The other one reads as zero; it is not taken from the
    /// previous point.
    #[must_use]
    #[inline]
    pub fn point(self) -> Option<Point<f64>> {
        match self {
            Self::Move(to) | Self::LineTo(to) => Some(to),
            Self::HorizontalTo(x) => Some(point(x, 0.0)),
            Self::VerticalTo(y) => Some(point(0.0, y)),
            Self::Close => None,
        }
    }

    /// The number of arguments the command letter takes, or `None` if the grammar has no such command.
    #[inline]
    fn arity(letter: char) -> Option<usize> {
        match letter {
            'M' | 'L' => Some(2),
            'H' | 'V' => Some(1),
            'Z' => Some(0),
            _ => None,
        }
    }

    #[inline]
    fn from_arguments(letter: char, args: &[f64]) -> Self {
        match letter {
            'M' => Self::Move(point(args[0], args[1])),
            'L' => Self::LineTo(point(args[0], args[1])),
            'H' => Self::HorizontalTo(args[0]),
            'V' => Self::VerticalTo(args[0]),
            _ => Self::Close,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

/// Splits path data into command letters and numbers.
struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    #[inline]
    fn new(src: &'a str) -> Self {
        Tokenizer { src, pos: 0 }
    }

    fn number(&mut self) -> Result<Token> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut end = start;

        if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let integer = digits(&bytes[end..]);
        end += integer;

        let mut fraction = 0;
        if bytes.get(end) == Some(&b'.') {
            fraction = digits(&bytes[end + 1..]);
            end += 1 + fraction;
        }

        if integer + fraction == 0 {
            // skip the whole unreadable token
            let len = self.src[start..]
                .find(|c: char| c.is_ascii_whitespace() || c == ',')
                .unwrap_or(self.src.len() - start);
            self.pos = start + len;
            return Err(Error::InvalidNumber(self.src[start..self.pos].to_string()));
        }

        if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
                exp += 1;
            }
            let exp_digits = digits(&bytes[exp..]);
            if exp_digits == 0 {
                self.pos = exp;
                return Err(Error::InvalidNumber(self.src[start..exp].to_string()));
            }
            end = exp + exp_digits;
        }

        self.pos = end;
        let text = &self.src[start..end];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::Number(value)),
            _ => Err(Error::InvalidNumber(text.to_string())),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && (bytes[self.pos].is_ascii_whitespace() || bytes[self.pos] == b',') {
            self.pos += 1;
        }

        let byte = *bytes.get(self.pos)?;
        if byte.is_ascii_alphabetic() {
            self.pos += 1;
            Some(Ok(Token::Command(byte as char)))
        } else {
            Some(self.number())
        }
    }
}

#[inline]
fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Read the arguments of one command.
fn arguments(
    tokens: &mut Peekable<Tokenizer<'_>>,
    letter: char,
    arity: usize,
) -> Result<ArrayVec<[f64; 2]>> {
    let mut args = ArrayVec::new();
    for _ in 0..arity {
        match tokens.next_if(|token| !matches!(token, Ok(Token::Command(_)))) {
            Some(Ok(Token::Number(value))) => args.push(value),
            Some(Err(err)) => return Err(err),
            _ => return Err(Error::MissingArgument(letter)),
        }
    }
    Ok(args)
}

/// Decode path data into its commands.
///
/// Commands and numbers may be separated by whitespace, commas, or nothing at all where that is unambiguous
/// (`M10-5L3,4`). A command followed by more numbers than it takes repeats itself, with extra `M`
/// coordinates becoming `L` commands.
///
/// # Errors
///
/// Fails on the first command outside of `M`, `L`, `H`, `V` and `Z`, on a command that lacks arguments, and
/// on numbers that cannot be read.
pub fn decode_commands(data: &str) -> Result<Vec<PathCommand>> {
    let mut tokens = Tokenizer::new(data).peekable();
    let mut commands = Vec::new();

    while let Some(token) = tokens.next() {
        let written = match token? {
            Token::Command(letter) => letter,
            Token::Number(_) => return Err(Error::UnexpectedNumber),
        };
        let mut letter = written.to_ascii_uppercase();
        let arity = PathCommand::arity(letter).ok_or(Error::UnsupportedCommand(written))?;

        let args = arguments(&mut tokens, written, arity)?;
        commands.push(PathCommand::from_arguments(letter, &args));

        if arity == 0 {
            continue;
        }

        if letter == 'M' {
            letter = 'L';
        }
        while matches!(tokens.peek(), Some(Ok(Token::Number(_)))) {
            let args = arguments(&mut tokens, written, arity)?;
            commands.push(PathCommand::from_arguments(letter, &args));
        }
    }

    Ok(commands)
}

/// Decode path data into the ordered list of points it visits, one per drawing command.
///
/// # Errors
///
/// Fails in the same cases as [`decode_commands`].
#[inline]
pub fn decode_path(data: &str) -> Result<Vec<Point<f64>>> {
    Ok(decode_commands(data)?
        .into_iter()
        .filter_map(PathCommand::point)
        .collect())
}

/// Encode a list of points as path data, with [`DEFAULT_PRECISION`] fractional digits.
#[must_use]
#[inline]
pub fn encode_path(points: &[Point<f64>], closed: bool) -> String {
    encode_path_with_precision(points, closed, DEFAULT_PRECISION)
}

/// Encode a list of points as path data, with `precision` fractional digits.
///
/// The first point becomes an `M` command and every other point an `L` command, for instance
/// `M0.000,0.000 L50.000,50.000`. A closed path ends with ` Z`. No points encode to an empty string.
#[must_use]
pub fn encode_path_with_precision(points: &[Point<f64>], closed: bool, precision: usize) -> String {
    let mut data = String::new();
    if points.is_empty() {
        return data;
    }

    for (i, pt) in points.iter().enumerate() {
        if i == 0 {
            data.push('M');
        } else {
            data.push_str(" L");
        }
        write_coordinate(&mut data, pt.x, precision);
        data.push(',');
        write_coordinate(&mut data, pt.y, precision);
    }

    if closed {
        data.push_str(" Z");
    }

    data
}

fn write_coordinate(data: &mut String, value: f64, precision: usize) {
    let start = data.len();
    // writing to a String cannot fail
    let _ = write!(data, "{:.*}", precision, value);

    // -0.000 reads as 0.000
    let written = &data[start..];
    if written.starts_with('-') && written[1..].bytes().all(|b| b == b'0' || b == b'.') {
        data.remove(start);
    }
}

/// Decoded path data: the points it visits and whether it is closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    /// The points of the path, in order.
    pub points: Vec<Point<f64>>,
    /// Did the path end with a `Z` command?
    pub closed: bool,
}

impl PathData {
    /// Decode path data.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`decode_commands`].
    #[inline]
    pub fn parse(data: &str) -> Result<PathData> {
        Ok(Self::from_commands(&decode_commands(data)?))
    }

    /// Collect the points of a list of commands.
    #[must_use]
    pub fn from_commands(commands: &[PathCommand]) -> PathData {
        PathData {
            points: commands.iter().copied().filter_map(PathCommand::point).collect(),
            closed: commands.contains(&PathCommand::Close),
        }
    }

    /// The segment between the first two points, if there are two.
    #[must_use]
    #[inline]
    pub fn leading_segment(&self) -> Option<LineSegment<f64>> {
        match self.points.as_slice() {
            [from, to, ..] => Some(LineSegment {
                from: *from,
                to: *to,
            }),
            _ => None,
        }
    }

    /// Iterate over the segments between consecutive points.
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = LineSegment<f64>> + '_ {
        self.points
            .windows(2)
            .map(|pair| LineSegment {
                from: pair[0],
                to: pair[1],
            })
    }

    /// Encode this path with [`DEFAULT_PRECISION`] fractional digits.
    #[must_use]
    #[inline]
    pub fn encode(&self) -> String {
        encode_path(&self.points, self.closed)
    }

    /// Build a `lyon_path` path out of this one, for flattening or rendering it elsewhere.
    ///
    /// `lyon_path` stores `f32` coordinates, so every coordinate is rounded to the nearest `f32`. Precision
    /// is lost past about seven significant digits, and coordinates beyond the range of `f32` saturate at
    /// `f32::MIN` or `f32::MAX` instead of becoming infinite.
    #[must_use]
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut points = self
            .points
            .iter()
            .map(|pt| math::point(narrow(pt.x), narrow(pt.y)));

        if let Some(first) = points.next() {
            builder.begin(first);
            for pt in points {
                builder.line_to(pt);
            }
            builder.end(self.closed);
        }

        builder.build()
    }
}

#[inline]
fn narrow(value: f64) -> f32 {
    value.max(f64::from(f32::MIN)).min(f64::from(f32::MAX)) as f32
}

impl FromStr for PathData {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<PathData> {
        PathData::parse(s)
    }
}
