//! Scanner returning per-position matrix data for every query occurrence.

use std::ops::Range;

use memchr::memmem;

use crate::pssm::Pssm;
use crate::pssm::RelativeWeight;
use crate::pssm::AMINO_ACIDS;

/// A hit describing one occurrence of the query in the sequence.
///
/// Every accessor returns a view over the same position range of the
/// source matrix; nothing is copied out of it.
#[derive(Clone, Debug)]
pub struct Hit<'a> {
    start: usize,
    residues: &'a str,
    scores: &'a [[f32; AMINO_ACIDS]],
    weighted_percentages: &'a [[f32; AMINO_ACIDS]],
    information: &'a [f32],
    relative_weights: &'a [RelativeWeight],
}

impl<'a> Hit<'a> {
    fn new(pssm: &'a Pssm, start: usize, len: usize) -> Self {
        let end = start + len;
        Self {
            start,
            residues: &pssm.sequence()[start..end],
            scores: &pssm.scores()[start..end],
            weighted_percentages: &pssm.weighted_percentages()[start..end],
            information: &pssm.information()[start..end],
            relative_weights: &pssm.relative_weights()[start..end],
        }
    }

    /// Position of the first matched residue.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position right after the last matched residue.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.information.len()
    }

    /// Range of matched positions in the source matrix.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The matched residues.
    #[inline]
    pub fn residues(&self) -> &'a str {
        self.residues
    }

    /// Substitution-score rows of the matched positions.
    #[inline]
    pub fn scores(&self) -> &'a [[f32; AMINO_ACIDS]] {
        self.scores
    }

    /// Weighted-percentage rows of the matched positions.
    #[inline]
    pub fn weighted_percentages(&self) -> &'a [[f32; AMINO_ACIDS]] {
        self.weighted_percentages
    }

    /// Information content of the matched positions.
    #[inline]
    pub fn information(&self) -> &'a [f32] {
        self.information
    }

    /// Relative weights of the matched positions.
    #[inline]
    pub fn relative_weights(&self) -> &'a [RelativeWeight] {
        self.relative_weights
    }
}

// ---

/// An iterator over the non-overlapping occurrences of a query.
///
/// The scan is greedy and left-to-right: the next occurrence is searched
/// at or after the current cursor, and the cursor then jumps past the
/// hit, so `"VV"` occurs twice in `"VVVV"`, not three times. Created with
/// [`Pssm::scan`], which rejects the empty query.
#[derive(Debug)]
pub struct Scanner<'p, 'q> {
    pssm: &'p Pssm,
    finder: memmem::Finder<'q>,
    len: usize,
    at: usize,
}

impl<'p, 'q> Scanner<'p, 'q> {
    pub(crate) fn new(pssm: &'p Pssm, query: &'q str) -> Self {
        Self {
            pssm,
            finder: memmem::Finder::new(query.as_bytes()),
            len: query.len(),
            at: 0,
        }
    }
}

impl<'p> Iterator for Scanner<'p, '_> {
    type Item = Hit<'p>;
    fn next(&mut self) -> Option<Self::Item> {
        let haystack = self.pssm.sequence().as_bytes().get(self.at..)?;
        let start = self.at + self.finder.find(haystack)?;
        self.at = start + self.len;
        Some(Hit::new(self.pssm, start, self.len))
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::pssm::Pssm;
    use crate::pssm::AMINO_ACIDS;

    /// Build a matrix whose score rows hold the position index, so hits
    /// can be checked against the columns they slice.
    fn pssm(sequence: &str) -> Pssm {
        let mut lines = Vec::new();
        for (i, residue) in sequence.chars().enumerate() {
            let mut line = format!("{:>5} {}", i + 1, residue);
            for _ in 0..2 * AMINO_ACIDS {
                line.push_str(&format!(" {:>3}", i));
            }
            line.push_str(&format!("  {}.0 0.5", i));
            lines.push(line);
        }
        lines.push("Standard Ungapped 0.1 0.3".to_string());
        lines.push("Standard Gapped 0.2 0.4".to_string());
        lines.push("PSI Ungapped 0.5 0.7".to_string());
        lines.push("PSI Gapped 0.6 0.8".to_string());
        Pssm::from_reader(std::io::Cursor::new(lines.join("\n"))).unwrap()
    }

    #[test]
    fn test_single_hit() {
        let pssm = pssm("MQIFVKTLTG");
        let hits = pssm.find("FVK").unwrap();
        assert_eq!(hits.len(), 1);

        let hit = &hits[0];
        assert_eq!(hit.range(), 3..6);
        assert_eq!(hit.residues(), "FVK");
        assert_eq!(hit.scores().len(), 3);
        assert_eq!(hit.scores()[0][0], 3.0);
        assert_eq!(hit.weighted_percentages()[2][19], 5.0);
        assert_eq!(hit.information(), &[3.0, 4.0, 5.0]);
        assert_eq!(hit.relative_weights().len(), 3);
    }

    #[test]
    fn test_non_overlapping() {
        let pssm = pssm("VVVV");
        let hits = pssm.find("VV").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].range(), 0..2);
        assert_eq!(hits[1].range(), 2..4);
    }

    #[test]
    fn test_repeated_hits() {
        let pssm = pssm("TLTGKTLTITLE");
        let hits = pssm.find("TLT").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].range(), 0..3);
        assert_eq!(hits[1].range(), 5..8);
    }

    #[test]
    fn test_no_hit() {
        let pssm = pssm("MQIFVK");
        assert!(pssm.find("W").unwrap().is_empty());
        assert!(pssm.find("MQIFVKT").unwrap().is_empty());
    }

    #[test]
    fn test_empty_query() {
        let pssm = pssm("MQIFVK");
        assert!(matches!(pssm.find(""), Err(Error::InvalidQuery)));
        assert!(matches!(pssm.scan("").err(), Some(Error::InvalidQuery)));
    }

    #[test]
    fn test_lazy_scan() {
        let pssm = pssm("VAVAVA");
        let mut scanner = pssm.scan("VA").unwrap();
        assert_eq!(scanner.next().unwrap().range(), 0..2);
        assert_eq!(scanner.next().unwrap().range(), 2..4);
        assert_eq!(scanner.next().unwrap().range(), 4..6);
        assert!(scanner.next().is_none());
    }
}
