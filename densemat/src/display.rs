/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::fmt;

use crate::Matrix;

struct Row<'a>(&'a [f32]);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:?}")?;
        }
        write!(f, "]")
    }
}

/// Render as nested brackets, `[[1.0, 2.0], [3.0, 4.0]]`. A single-row matrix renders as
/// one flat list, `[1.0, 2.0]`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nrows() == 1 {
            return Row(self.as_slice()).fmt(f);
        }

        write!(f, "[")?;
        for (i, row) in self.row_iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            Row(row).fmt(f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.5]]).unwrap();
        assert_eq!(m.to_string(), "[[1.0, 2.0], [3.0, 4.5]]");

        let v = Matrix::row_vector(vec![1.0, -0.25, 3.0]).unwrap();
        assert_eq!(v.to_string(), "[1.0, -0.25, 3.0]");

        let c = v.transposed();
        assert_eq!(c.to_string(), "[[1.0], [-0.25], [3.0]]");

        let s = Matrix::filled(f32::NAN, 1, 1).unwrap();
        assert_eq!(s.to_string(), "[NaN]");
    }
}
