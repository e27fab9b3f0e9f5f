//! Record extraction from V3000 molfiles.
//!
//! The layout is fixed: the counts line is line 5 of the file, the atom
//! block starts at line 7, and the bond block starts two lines after the
//! atom block ends. Coordinates and charges are read past, never
//! interpreted.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, multispace0, multispace1},
    combinator::map_res,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use crate::Symbol;

/// Line number (zero-based) of the `COUNTS` line.
const COUNTS_LINE: usize = 5;
/// Line number (zero-based) of the first atom line.
const ATOM_BLOCK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomRecord {
    pub symbol: Symbol,
    /// 1-based atom index as declared in the file.
    pub original_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondRecord {
    /// 1-based bond index as declared in the file.
    pub original_index: usize,
    pub order: usize,
    pub a: usize,
    pub b: usize,
}

/// The raw record feed handed to [`build_graph`](crate::build_graph):
/// declared header counts plus the atom and bond records actually read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MolfileRecords {
    pub declared_atom_count: usize,
    pub declared_bond_count: usize,
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MolfileError {
    #[error("molfile ends after {actual} lines, expected at least {expected}")]
    Truncated { expected: usize, actual: usize },
    #[error("line {line} is not a valid {kind} line: `{content}`")]
    Malformed {
        line: usize,
        kind: &'static str,
        content: String,
    },
}

fn integer(input: &str) -> IResult<&str, usize> {
    map_res(preceded(multispace0, digit1), str::parse)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace()))(input)
}

fn v30_prefix(input: &str) -> IResult<&str, ()> {
    let (input, _) = preceded(multispace0, tag("M"))(input)?;
    let (input, _) = preceded(multispace1, tag("V30"))(input)?;
    Ok((input, ()))
}

/// `M  V30 COUNTS <atoms> <bonds> ...`
fn counts_line(input: &str) -> IResult<&str, (usize, usize)> {
    let (input, _) = v30_prefix(input)?;
    let (input, _) = preceded(multispace1, tag("COUNTS"))(input)?;
    let (input, atoms) = integer(input)?;
    let (input, bonds) = integer(input)?;
    Ok((input, (atoms, bonds)))
}

/// `M  V30 <index> <symbol> <x> <y> <z> <charge>`
fn atom_line(input: &str) -> IResult<&str, AtomRecord> {
    let (input, _) = v30_prefix(input)?;
    let (input, original_index) = integer(input)?;
    let (input, symbol) = word(input)?;
    Ok((
        input,
        AtomRecord {
            symbol: Symbol::new(symbol),
            original_index,
        },
    ))
}

/// `M  V30 <index> <order> <a> <b>`
fn bond_line(input: &str) -> IResult<&str, BondRecord> {
    let (input, _) = v30_prefix(input)?;
    let (input, original_index) = integer(input)?;
    let (input, order) = integer(input)?;
    let (input, a) = integer(input)?;
    let (input, b) = integer(input)?;
    Ok((
        input,
        BondRecord {
            original_index,
            order,
            a,
            b,
        },
    ))
}

fn parse_line<T>(
    parser: impl Fn(&str) -> IResult<&str, T>,
    lines: &[&str],
    line: usize,
    kind: &'static str,
) -> Result<T, MolfileError> {
    let content: &str = lines.get(line).copied().ok_or(MolfileError::Truncated {
        expected: line + 1,
        actual: lines.len(),
    })?;
    match parser(content) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(MolfileError::Malformed {
            line,
            kind,
            content: content.to_string(),
        }),
    }
}

/// Extracts the atom and bond records from molfile text.
///
/// Only structural consistency within each line is checked here; cross-record
/// validation (dangling bonds, duplicates, header count mismatches) is the
/// job of [`build_graph`](crate::build_graph).
pub fn parse_molfile(text: &str) -> Result<MolfileRecords, MolfileError> {
    let lines: Vec<&str> = text.lines().collect();

    let (declared_atom_count, declared_bond_count) =
        parse_line(counts_line, &lines, COUNTS_LINE, "counts")?;

    let mut atoms = Vec::with_capacity(declared_atom_count);
    for offset in 0..declared_atom_count {
        atoms.push(parse_line(atom_line, &lines, ATOM_BLOCK + offset, "atom")?);
    }

    // the atom block is followed by `END ATOM` and `BEGIN BOND`
    let bond_block = ATOM_BLOCK + declared_atom_count + 2;
    let mut bonds = Vec::with_capacity(declared_bond_count);
    for offset in 0..declared_bond_count {
        bonds.push(parse_line(bond_line, &lines, bond_block + offset, "bond")?);
    }

    Ok(MolfileRecords {
        declared_atom_count,
        declared_bond_count,
        atoms,
        bonds,
    })
}
