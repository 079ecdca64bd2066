//! Sort model reducer and multi-field row comparator.

use super::types::{CellValue, GridRow, SortDirection, SortItem, SortModel};
use std::cmp::Ordering;

/// Current direction of `field` in the model; absent fields are unsorted
pub fn sort_direction(model: &[SortItem], field: &str) -> SortDirection {
    model
        .iter()
        .find(|item| item.field == field)
        .map(|item| item.sort)
        .unwrap_or(SortDirection::None)
}

/// Apply one header activation to the sort model.
///
/// The field cycles unsorted → ascending → descending → unsorted. A field that
/// stays sorted moves to the end of the model; every other entry keeps its
/// position and direction.
pub fn cycle_sort(model: &[SortItem], field: &str) -> SortModel {
    let next = match sort_direction(model, field) {
        SortDirection::None => SortDirection::Asc,
        SortDirection::Asc => SortDirection::Desc,
        SortDirection::Desc => SortDirection::None,
    };

    let mut updated: SortModel = model.iter().filter(|item| item.field != field).cloned().collect();
    if next != SortDirection::None {
        updated.push(SortItem::new(field, next));
    }
    updated
}

fn kind_rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Empty => 0,
        CellValue::Bool(_) => 1,
        CellValue::Number(_) => 2,
        CellValue::Text(_) => 3,
    }
}

/// Total order over cell values: kinds first, then values within a kind.
/// NaN sorts after every other number.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::Number(x), CellValue::Number(y)) => match (x.is_nan(), y.is_nan()) {
            (false, false) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (x_nan, y_nan) => x_nan.cmp(&y_nan),
        },
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Compare two rows field by field in model order
pub fn compare_rows<T: GridRow>(a: &T, b: &T, model: &[SortItem]) -> Ordering {
    for item in model {
        let ordering = match item.sort {
            SortDirection::None => continue,
            SortDirection::Asc => compare_values(&a.cell(&item.field), &b.cell(&item.field)),
            SortDirection::Desc => compare_values(&b.cell(&item.field), &a.cell(&item.field)),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Row indices in display order. Ties keep their input order.
pub fn sorted_indices<T: GridRow>(rows: &[T], model: &[SortItem]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    if model.iter().any(|item| item.sort != SortDirection::None) {
        indices.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], model));
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_kinds_order() {
        let mut values = [
            CellValue::Text("a".into()),
            CellValue::Number(1.0),
            CellValue::Empty,
            CellValue::Bool(true),
        ];
        values.sort_by(compare_values);
        assert_eq!(
            values,
            [
                CellValue::Empty,
                CellValue::Bool(true),
                CellValue::Number(1.0),
                CellValue::Text("a".into())
            ]
        );
    }

    struct Age(f64);

    impl GridRow for Age {
        fn cell(&self, _field: &str) -> CellValue {
            CellValue::Number(self.0)
        }
    }

    #[test]
    fn test_nan_sorts_after_numbers() {
        assert_eq!(
            compare_values(&CellValue::Number(f64::NAN), &CellValue::Number(1.0)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&CellValue::Number(f64::NAN), &CellValue::Number(-f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_with_nan_values_is_stable() {
        let rows: Vec<Age> = (0..64)
            .map(|i| if i % 5 == 0 { Age(f64::NAN) } else { Age(f64::from(64 - i)) })
            .collect();
        let model = vec![SortItem::new("age", SortDirection::Asc)];

        let order = sorted_indices(&rows, &model);

        let nan_start = order.iter().position(|&i| rows[i].0.is_nan()).unwrap();
        let (numbers, nans) = order.split_at(nan_start);
        assert!(numbers.windows(2).all(|w| rows[w[0]].0 < rows[w[1]].0));
        assert!(nans.iter().all(|&i| rows[i].0.is_nan()));
        assert!(nans.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(nans.len(), 13);

        let desc = vec![SortItem::new("age", SortDirection::Desc)];
        let order = sorted_indices(&rows, &desc);
        assert!(order[..13].iter().all(|&i| rows[i].0.is_nan()));
        assert!(order[..13].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_explicit_none_entry_restarts_cycle() {
        let model = vec![SortItem::new("age", SortDirection::None)];
        assert_eq!(cycle_sort(&model, "age"), vec![SortItem::new("age", SortDirection::Asc)]);
    }
}
