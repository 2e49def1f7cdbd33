//! Label file format encoder/decoder.
//!
//! Each line holds the cluster label of the point at the same position in
//! the point file.

use std::io;

use crate::ErrorKind;
use crate::Result;

/// Wrapping `r` in a [`std::io::BufReader`] is recommended.
pub fn read<R>(r: R) -> Result<Vec<usize>>
where
    R: io::BufRead,
{
    let mut labels = Vec::new();
    crate::for_each_record(r, |fields| {
        let &[label] = fields else {
            return Err(crate::Error {
                kind: ErrorKind::FieldCount {
                    expected: 1,
                    found: fields.len(),
                },
                lineno: 0,
            });
        };
        labels.push(label.parse()?);
        Ok(())
    })?;
    Ok(labels)
}

/// Wrapping `w` in a [`std::io::BufWriter`] is recommended.
pub fn write<I, W>(mut w: W, labels: I) -> io::Result<()>
where
    I: IntoIterator<Item = usize>,
    W: io::Write,
{
    for label in labels {
        writeln!(w, "{}", label)?;
    }
    Ok(())
}
