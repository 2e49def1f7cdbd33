//! Point file format encoder/decoder.
//!
//! Each line holds the two coordinates of a point:
//!
//! ```text
//! -6 -10
//! 3.5 2
//! ```

use std::io;

use crate::ErrorKind;
use crate::Result;

/// Wrapping `r` in a [`std::io::BufReader`] is recommended.
pub fn read<R>(r: R) -> Result<Vec<[f64; 2]>>
where
    R: io::BufRead,
{
    let mut points = Vec::new();
    crate::for_each_record(r, |fields| {
        let &[x, y] = fields else {
            return Err(crate::Error {
                kind: ErrorKind::FieldCount {
                    expected: 2,
                    found: fields.len(),
                },
                lineno: 0,
            });
        };
        points.push([x.parse()?, y.parse()?]);
        Ok(())
    })?;
    Ok(points)
}

/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
pub fn write<I, W>(mut w: W, points: I) -> io::Result<()>
where
    I: IntoIterator<Item = [f64; 2]>,
    W: io::Write,
{
    for [x, y] in points {
        writeln!(w, "{} {}", x, y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        let input = "-6 -10\n\n  3.5\t2\n1e3 -0.25   \n";
        let points = read(input.as_bytes()).unwrap();
        assert_eq!(points, vec![[-6.0, -10.0], [3.5, 2.0], [1000.0, -0.25]]);
    }

    #[test]
    fn test_read_empty() {
        assert!(read("".as_bytes()).unwrap().is_empty());
        assert!(read("\n \n\t\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_bad_field_count() {
        let err = read("1 2\n3\n".as_bytes()).unwrap_err();
        assert_eq!(err.lineno(), 2);
        assert!(matches!(
            err.kind(),
            ErrorKind::FieldCount {
                expected: 2,
                found: 1
            }
        ));

        let err = read("1 2 3\n".as_bytes()).unwrap_err();
        assert_eq!(err.lineno(), 1);
    }

    #[test]
    fn test_read_bad_float() {
        let err = read("1 2\n\n3 four\n".as_bytes()).unwrap_err();
        assert_eq!(err.lineno(), 3);
        assert!(matches!(err.kind(), ErrorKind::BadFloat(_)));
        assert_eq!(
            err.to_string(),
            "at line 3: when parsing float: invalid float literal"
        );
    }

    #[test]
    fn test_write() {
        let mut output = Vec::new();
        write(&mut output, [[-6.0, -10.0], [3.5, 2.0]]).unwrap();
        assert_eq!(output, b"-6 -10\n3.5 2\n");
        assert_eq!(read(&output[..]).unwrap(), vec![[-6.0, -10.0], [3.5, 2.0]]);
    }
}
