//! Plain-text matrix format.
//!
//! `Display` prints one row per line with whitespace-separated entries.
//! [`Matrix::write_to`] prefixes that with the dimension, producing the format
//! `FromStr` reads back: the dimension `n` followed by `n²` scalars in
//! row-major order, separated by any whitespace.

use core::fmt::{self, Write as _};
use core::str::FromStr;
use std::io;

use super::Matrix;
use crate::linalg::LinalgError;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n;

        let mut widths = vec![0usize; n];
        for j in 0..n {
            for i in 0..n {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                widths[j] = widths[j].max(w);
            }
        }

        for i in 0..n {
            for j in 0..n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

impl Matrix {
    /// Write the dimension on its own line, then the rows.
    ///
    /// ```
    /// use symeig::Matrix;
    ///
    /// let m = Matrix::new([[1.0, -2.5], [0.0, 4.0]]);
    /// let mut buf = Vec::new();
    /// m.write_to(&mut buf).unwrap();
    /// let text = String::from_utf8(buf).unwrap();
    /// assert_eq!(text.parse::<Matrix>().unwrap(), m);
    /// ```
    pub fn write_to<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "{}", self.n)?;
        write!(w, "{}", self)
    }
}

impl FromStr for Matrix {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let n: usize = tokens
            .next()
            .ok_or_else(|| LinalgError::Parse("missing dimension".into()))?
            .parse()
            .map_err(|e| LinalgError::Parse(format!("bad dimension: {}", e)))?;

        let len = n
            .checked_mul(n)
            .ok_or_else(|| LinalgError::Parse(format!("dimension {} too large", n)))?;
        let body: Vec<&str> = tokens.collect();
        if body.len() < len {
            return Err(LinalgError::Parse(format!(
                "expected {} entries, found {}",
                len,
                body.len()
            )));
        }
        if let Some(extra) = body.get(len) {
            return Err(LinalgError::Parse(format!(
                "trailing data after {} entries: {:?}",
                len, extra
            )));
        }

        let data = body
            .iter()
            .enumerate()
            .map(|(idx, tok)| {
                tok.parse().map_err(|e| {
                    LinalgError::Parse(format!(
                        "entry ({}, {}) {:?}: {}",
                        idx / n,
                        idx % n,
                        tok,
                        e
                    ))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(Matrix { data, n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rows() {
        let m = Matrix::new([[1.0, 20.0], [300.0, 4.0]]);
        assert_eq!(m.to_string(), "  1 20\n300  4\n");
    }

    #[test]
    fn parse_row_major() {
        let m: Matrix = "2\n1 2\n3 4\n".parse().unwrap();
        assert_eq!(m, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));

        // Any whitespace layout is accepted.
        let m2: Matrix = "2 1 2 3 4".parse().unwrap();
        assert_eq!(m, m2);
    }

    #[test]
    fn round_trip_preserves_bits() {
        let m = Matrix::from_fn(3, |i, j| (i as f64 + 0.1) / (j as f64 + 3.0));
        let mut buf = Vec::new();
        m.write_to(&mut buf).unwrap();
        let back: Matrix = String::from_utf8(buf).unwrap().parse().unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("".parse::<Matrix>(), Err(LinalgError::Parse(_))));
        assert!(matches!("x".parse::<Matrix>(), Err(LinalgError::Parse(_))));
        assert!(matches!("2 1 2 3".parse::<Matrix>(), Err(LinalgError::Parse(_))));
        assert!(matches!("2 1 2 3 y".parse::<Matrix>(), Err(LinalgError::Parse(_))));
        assert!(matches!("1 1 2".parse::<Matrix>(), Err(LinalgError::Parse(_))));
    }

    #[test]
    fn parse_oversized_dimension() {
        // n² overflows usize
        assert!(matches!(
            "4294967296 1".parse::<Matrix>(),
            Err(LinalgError::Parse(_))
        ));
        assert!(matches!(
            "18446744073709551615 1".parse::<Matrix>(),
            Err(LinalgError::Parse(_))
        ));
        // fits, but the body is far too short to allocate for
        assert!(matches!(
            "2147483648 1".parse::<Matrix>(),
            Err(LinalgError::Parse(_))
        ));
        assert!(matches!("100000 1 2".parse::<Matrix>(), Err(LinalgError::Parse(_))));
    }
}
