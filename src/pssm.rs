//! Parser for the position-specific scoring matrix report of PSI-BLAST.
//!
//! A report starts with a banner line and a column-label line, followed by
//! one indented row per residue position, and ends with summary lines, the
//! last four of which carry the K and Lambda statistics:
//! ```text
//! Last position-specific scoring matrix computed, weighted observed ...
//!             A   R   N   D   C  ...   A   R   N   D   C  ...
//!     1 M    -2  -2  -3  -4  -2  ...   0   0   0   0   0  ...  0.90 0.09
//!     2 Q    -1   1   0  -1  -4  ...   0  11   0   0   0  ...  0.61 0.12
//!
//!                       K         Lambda
//! Standard Ungapped    0.1384     0.3187
//! Standard Gapped      0.0410     0.2670
//! PSI Ungapped         0.1516     0.3179
//! PSI Gapped           0.0464     0.2670
//! ```
//!
//! Each data row carries 44 fields: the position index, the residue
//! letter, 20 substitution scores, 20 weighted observed percentages
//! rounded down, the information content of the position, and the
//! relative weight of gapless real matches to pseudocounts. Any line with
//! fewer fields is skipped, which covers the banner, the column labels,
//! blank separators and the summary prose.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::parse;
use crate::scan::Hit;
use crate::scan::Scanner;

/// Number of score and percentage columns in a row, one per standard
/// amino acid.
pub const AMINO_ACIDS: usize = 20;

/// Minimum token count for a line to be treated as a data row.
const DATA_ROW_TOKENS: usize = 44;

// ---

/// Relative weight of gapless real matches to pseudocounts at one position.
///
/// The report encodes an unbounded weight as the literal token `inf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RelativeWeight {
    Finite(f32),
    Infinite,
}

impl RelativeWeight {
    /// Get the weight as a float, or `None` if it is unbounded.
    pub fn finite(&self) -> Option<f32> {
        match self {
            RelativeWeight::Finite(x) => Some(*x),
            RelativeWeight::Infinite => None,
        }
    }
}

// ---

/// K and Lambda statistics for one alignment mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KLambda {
    pub k: f32,
    pub lambda: f32,
}

// ---

/// A parsed report, stored as parallel per-position columns.
///
/// All five columns have the same length, and index `i` in every column
/// refers to the same sequence position. The aggregate is immutable after
/// construction and safe to share across threads.
#[derive(Clone, Debug)]
pub struct Pssm {
    sequence: String,
    scores: Vec<[f32; AMINO_ACIDS]>,
    weighted_percentages: Vec<[f32; AMINO_ACIDS]>,
    information: Vec<f32>,
    relative_weights: Vec<RelativeWeight>,
    standard_ungapped: KLambda,
    standard_gapped: KLambda,
    psi_ungapped: KLambda,
    psi_gapped: KLambda,
}

impl Pssm {
    /// Parse a report from the given path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| Error::NotFound(path.to_path_buf()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a report from any buffered reader.
    ///
    /// The whole input is buffered before parsing starts: the four
    /// statistics lines sit at a fixed offset from the end of the report,
    /// so the full line list must be known.
    pub fn from_reader<B: BufRead>(reader: B) -> Result<Self, Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(&lines)
    }

    fn from_lines(lines: &[String]) -> Result<Self, Error> {
        let mut sequence = String::new();
        let mut scores = Vec::new();
        let mut weighted_percentages = Vec::new();
        let mut information = Vec::new();
        let mut relative_weights = Vec::new();

        for line in lines {
            let tokens = parse::tokens(line);
            if tokens.len() < DATA_ROW_TOKENS {
                continue;
            }
            sequence.push(parse::residue(tokens[2])?);
            scores.push(parse::row(&tokens[3..3 + AMINO_ACIDS])?);
            weighted_percentages.push(parse::row(&tokens[23..23 + AMINO_ACIDS])?);
            information.push(parse::value(tokens[tokens.len() - 2])?);
            relative_weights.push(parse::weight(tokens[tokens.len() - 1])?);
        }

        // the statistics lines sit at a fixed offset from the end, so a
        // trailing blank line would shift them; the report format never
        // emits one.
        if lines.len() < 4 {
            return Err(Error::InvalidData(Some(
                "missing trailing statistics lines".into(),
            )));
        }
        let n = lines.len();
        let standard_ungapped = parse::k_lambda(&lines[n - 4])?;
        let standard_gapped = parse::k_lambda(&lines[n - 3])?;
        let psi_ungapped = parse::k_lambda(&lines[n - 2])?;
        let psi_gapped = parse::k_lambda(&lines[n - 1])?;

        Ok(Self {
            sequence,
            scores,
            weighted_percentages,
            information,
            relative_weights,
            standard_ungapped,
            standard_gapped,
            psi_ungapped,
            psi_gapped,
        })
    }

    /// Number of residue positions in the matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check whether the matrix has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The amino-acid sequence reconstructed from the residue column.
    #[inline]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Substitution scores, one row of 20 per position.
    #[inline]
    pub fn scores(&self) -> &[[f32; AMINO_ACIDS]] {
        &self.scores
    }

    /// Weighted observed percentages rounded down, one row of 20 per
    /// position.
    #[inline]
    pub fn weighted_percentages(&self) -> &[[f32; AMINO_ACIDS]] {
        &self.weighted_percentages
    }

    /// Information content per position.
    #[inline]
    pub fn information(&self) -> &[f32] {
        &self.information
    }

    /// Relative weight of gapless real matches to pseudocounts per
    /// position.
    #[inline]
    pub fn relative_weights(&self) -> &[RelativeWeight] {
        &self.relative_weights
    }

    /// Statistics of the standard scoring system, ungapped.
    #[inline]
    pub fn standard_ungapped(&self) -> KLambda {
        self.standard_ungapped
    }

    /// Statistics of the standard scoring system, gapped.
    #[inline]
    pub fn standard_gapped(&self) -> KLambda {
        self.standard_gapped
    }

    /// Statistics of the position-specific scoring system, ungapped.
    #[inline]
    pub fn psi_ungapped(&self) -> KLambda {
        self.psi_ungapped
    }

    /// Statistics of the position-specific scoring system, gapped.
    #[inline]
    pub fn psi_gapped(&self) -> KLambda {
        self.psi_gapped
    }

    /// Scan the reconstructed sequence for occurrences of a query
    /// subsequence.
    ///
    /// Matches are exact, left-to-right and non-overlapping: after a hit
    /// at position `p` the scan resumes at `p + query.len()`. Errors with
    /// [`Error::InvalidQuery`] if the query is empty.
    pub fn scan<'p, 'q>(&'p self, query: &'q str) -> Result<Scanner<'p, 'q>, Error> {
        if query.is_empty() {
            return Err(Error::InvalidQuery);
        }
        Ok(Scanner::new(self, query))
    }

    /// Collect every hit for a query subsequence.
    ///
    /// Convenience wrapper around [`Pssm::scan`]; a query with no
    /// occurrence yields an empty vector, not an error.
    pub fn find<'p>(&'p self, query: &str) -> Result<Vec<Hit<'p>>, Error> {
        Ok(self.scan(query)?.collect())
    }
}
