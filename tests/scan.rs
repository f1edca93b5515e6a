extern crate pssm_scan;

use std::io::Cursor;

use pssm_scan::Pssm;
use pssm_scan::RelativeWeight;

const UBIQUITIN: &str = include_str!("1UBQ.pssm");

#[test]
fn test_find() {
    let pssm = Pssm::from_reader(Cursor::new(UBIQUITIN)).unwrap();

    let hits = pssm.find("TLTG").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].range(), 6..10);
    assert_eq!(hits[0].residues(), "TLTG");
    assert_eq!(hits[0].scores().len(), 4);
    assert_eq!(hits[0].scores()[0][16], 5.0);
    assert_eq!(hits[0].information(), &[2.10, 1.09, 2.09, 0.46]);
    assert_eq!(hits[0].relative_weights()[3], RelativeWeight::Infinite);
}

#[test]
fn test_find_repeated() {
    let pssm = Pssm::from_reader(Cursor::new(UBIQUITIN)).unwrap();

    let hits = pssm.find("T").unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].range(), 6..7);
    assert_eq!(hits[1].range(), 8..9);
    assert_eq!(hits[0].information(), &[2.10]);
    assert_eq!(hits[1].information(), &[2.09]);
}

#[test]
fn test_find_absent() {
    let pssm = Pssm::from_reader(Cursor::new(UBIQUITIN)).unwrap();
    assert!(pssm.find("W").unwrap().is_empty());
    assert!(pssm.find("GM").unwrap().is_empty());
}

#[test]
fn test_scan_lazy() {
    let pssm = Pssm::from_reader(Cursor::new(UBIQUITIN)).unwrap();

    let mut scanner = pssm.scan("T").unwrap();
    assert_eq!(scanner.next().unwrap().range(), 6..7);
    assert_eq!(scanner.next().unwrap().range(), 8..9);
    assert!(scanner.next().is_none());
}
