//! Natural (numeric-aware) name ordering.
//!
//! The bucket's folder names lead with ordinal prefixes (`1.EEV`,
//! `2.Case controller`, `10.Showcase photo`), so plain lexicographic order
//! would put `10.` before `2.`. This comparator treats runs of digits as
//! numbers and everything else as case-insensitive text.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two names naturally: digit runs by numeric value, other
/// characters case-insensitively, with a full lexicographic tiebreak so the
/// ordering is total and deterministic.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    let mut ai = a_lower.chars().peekable();
    let mut bi = b_lower.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let ord = compare_digit_runs(&digit_run(&mut ai), &digit_run(&mut bi));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    ai.next();
                    bi.next();
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }
}

fn digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare digit runs by numeric value without parsing: strip leading
/// zeros, then longer runs are larger, equal-length runs compare lexically.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
