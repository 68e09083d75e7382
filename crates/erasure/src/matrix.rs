use std::fmt::{Display, Formatter};
use serde::Serialize;
use crate::equatable::AnyEquatable;

/// The result of comparing every box of a list against every box of the same list.
///
/// `rows()[row][col]` is `boxes[row] == boxes[col]`, i.e. the comparison bound to `boxes[row]` is
/// the one that runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<bool>>,
}

impl ComparisonMatrix {
    pub fn of(boxes: &[AnyEquatable]) -> Self {
        let rows = boxes.iter()
            .map(|lhs| boxes.iter().map(|rhs| lhs == rhs).collect())
            .collect();

        Self { rows }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row)
            .and_then(|row| row.get(col))
            .copied()
    }

    pub fn is_reflexive(&self) -> bool {
        (0..self.len()).all(|index| self.at(index, index))
    }

    pub fn is_symmetric(&self) -> bool {
        self.pairs().all(|(row, col)| self.at(row, col) == self.at(col, row))
    }

    pub fn is_transitive(&self) -> bool {
        self.pairs().all(|(first, second)| {
            !self.at(first, second) || (0..self.len()).all(|third| {
                !self.at(second, third) || self.at(first, third)
            })
        })
    }

    fn at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).flat_map(move |row| (0..self.len()).map(move |col| (row, col)))
    }
}

impl Display for ComparisonMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let row: Vec<String> = row.iter().map(bool::to_string).collect();
            write!(f, "{}", row.join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod comparison_matrix_tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    pub fn of() {
        // given
        let boxes = vec![
            AnyEquatable::new(1_i32),
            AnyEquatable::new(1_i32),
            AnyEquatable::new("1".to_string()),
        ];

        // when
        let matrix = ComparisonMatrix::of(&boxes);

        // then
        assert_eq!(matrix, ComparisonMatrix::from_rows(vec![
            vec![T, T, F],
            vec![T, T, F],
            vec![F, F, T],
        ]));
    }

    #[test]
    pub fn display() {
        // given
        let matrix = ComparisonMatrix::from_rows(vec![
            vec![T, F],
            vec![F, T],
        ]);

        // expect
        assert_eq!(matrix.to_string(), "true false\nfalse true");
    }

    #[test]
    pub fn serialize() {
        // given
        let matrix = ComparisonMatrix::from_rows(vec![
            vec![T, F],
            vec![F, T],
        ]);

        // when
        let json = serde_json::to_string(&matrix).expect("serializable");

        // then
        assert_eq!(json, "[[true,false],[false,true]]");
    }

    #[test]
    pub fn asymmetric() {
        // given
        let matrix = ComparisonMatrix::from_rows(vec![
            vec![T, T],
            vec![F, T],
        ]);

        // expect
        assert!(matrix.is_reflexive());
        assert!(!matrix.is_symmetric());
    }

    #[test]
    pub fn intransitive() {
        // given
        let matrix = ComparisonMatrix::from_rows(vec![
            vec![T, T, F],
            vec![T, T, T],
            vec![F, T, T],
        ]);

        // expect
        assert!(matrix.is_symmetric());
        assert!(!matrix.is_transitive());
    }

    #[test]
    pub fn get_out_of_range() {
        // given
        let matrix = ComparisonMatrix::from_rows(vec![vec![T]]);

        // expect
        assert_eq!(matrix.get(0, 0), Some(true));
        assert_eq!(matrix.get(0, 1), None);
        assert_eq!(matrix.get(1, 0), None);
    }
}
