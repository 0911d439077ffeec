use nom::bytes;
use nom::character;
use nom::combinator;
use nom::multi;
use nom::number;
use nom::sequence;
use nom::IResult;

use crate::core::prelude::Float;

/// Splits one line of a scene file into its whitespace separated fields.
pub fn tokenize(s: &str) -> IResult<&str, Vec<&str>> {
    return combinator::all_consuming(sequence::delimited(
        character::complete::multispace0,
        multi::separated_list0(character::complete::multispace1, parse_field),
        character::complete::multispace0,
    ))(s);
}

fn parse_field(s: &str) -> IResult<&str, &str> {
    return bytes::complete::is_not(" \t\r\n")(s);
}

#[cfg(not(feature = "float-as-double"))]
fn parse_float(s: &str) -> IResult<&str, Float> {
    return number::complete::float(s);
}

#[cfg(feature = "float-as-double")]
fn parse_float(s: &str) -> IResult<&str, Float> {
    return number::complete::double(s);
}

/// Reads a whole field as a finite number, rejecting trailing characters.
///
/// `nan`, `inf` and values that overflow `Float` are rejected.
pub fn parse_number(s: &str) -> Option<Float> {
    match combinator::all_consuming(parse_float)(s) {
        Ok((_, v)) if v.is_finite() => Some(v),
        _ => None,
    }
}
