use nom::combinator::all_consuming;
use nom::number::complete::float;
use nom::IResult;
use nom::Parser;

use crate::error::Error;
use crate::pssm::KLambda;
use crate::pssm::RelativeWeight;
use crate::pssm::AMINO_ACIDS;

/// Split a line into whitespace-delimited tokens.
///
/// Trailing whitespace is stripped first, then the line is split on runs
/// of whitespace. A line starting with whitespace yields an empty leading
/// token, and the empty line yields a single empty token; data rows in a
/// report are indented, so their position index lands at `tokens[1]` and
/// the residue letter at `tokens[2]`.
pub fn tokens(line: &str) -> Vec<&str> {
    let line = line.trim_end();
    let mut tokens = Vec::new();
    if line.is_empty() || line.starts_with(|c: char| c.is_whitespace()) {
        tokens.push("");
    }
    tokens.extend(line.split_whitespace());
    tokens
}

/// Coerce a single token into a float, rejecting trailing garbage.
pub fn value(token: &str) -> Result<f32, Error> {
    let result: IResult<&str, f32> = all_consuming(float).parse(token);
    match result {
        Ok((_, x)) => Ok(x),
        Err(_) => Err(Error::InvalidData(Some(format!(
            "expected a number, found {:?}",
            token
        )))),
    }
}

/// Coerce a single token into a residue letter.
///
/// The residue must be exactly one ASCII letter so that one byte of the
/// reconstructed sequence maps to one matrix position.
pub fn residue(token: &str) -> Result<char, Error> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
        _ => Err(Error::InvalidData(Some(format!(
            "expected a residue letter, found {:?}",
            token
        )))),
    }
}

/// Coerce a run of 20 tokens into one score or percentage row.
pub fn row(tokens: &[&str]) -> Result<[f32; AMINO_ACIDS], Error> {
    let mut row = [0.0; AMINO_ACIDS];
    for (slot, token) in row.iter_mut().zip(tokens) {
        *slot = value(token)?;
    }
    Ok(row)
}

/// Coerce the relative-weight token, which is either a float or the
/// literal `inf`.
pub fn weight(token: &str) -> Result<RelativeWeight, Error> {
    if token == "inf" {
        Ok(RelativeWeight::Infinite)
    } else {
        value(token).map(RelativeWeight::Finite)
    }
}

/// Extract the K and Lambda statistics from the last two tokens of a
/// trailing summary line.
pub fn k_lambda(line: &str) -> Result<KLambda, Error> {
    match tokens(line).as_slice() {
        [.., k, lambda] => Ok(KLambda {
            k: value(k)?,
            lambda: value(lambda)?,
        }),
        _ => Err(Error::InvalidData(Some(format!(
            "expected a statistics line, found {:?}",
            line
        )))),
    }
}
