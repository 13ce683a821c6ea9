use std::collections::HashSet;

use serde::Serialize;

use crate::entities::seat_group;
use crate::error::{AppError, AppResult};

/// One addressable seat after layout expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub seat_ref: String,
    pub seat_type_id: i32,
}

/// Expand a seat group's coordinate descriptor into concrete seat refs.
///
/// Coordinates name a row and a starting column, e.g. "A1"; a quantity
/// of 5 expands to A1..A5. Expansion is pure: the same input always
/// yields the same refs in the same order.
pub fn expand_group(coordinates: &str, quantity: i32) -> AppResult<Vec<String>> {
    let row_len = coordinates
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    let (row, start) = coordinates.split_at(row_len);

    if row.is_empty() || start.is_empty() {
        return Err(AppError::Validation(format!(
            "Invalid seat coordinates '{}': expected row letters followed by a start column",
            coordinates
        )));
    }

    let start: u32 = start.parse().map_err(|_| {
        AppError::Validation(format!(
            "Invalid seat coordinates '{}': start column is not a number",
            coordinates
        ))
    })?;

    if start == 0 {
        return Err(AppError::Validation(format!(
            "Invalid seat coordinates '{}': columns start at 1",
            coordinates
        )));
    }

    if quantity < 1 {
        return Err(AppError::Validation(format!(
            "Seat group at '{}' must contain at least one seat",
            coordinates
        )));
    }

    Ok((0..quantity as u32)
        .map(|offset| format!("{}{}", row, start + offset))
        .collect())
}

/// Expand a chart's seat groups into the full ordered seat list.
///
/// Seat refs must be unique across all groups of one chart; a duplicate
/// is a data-integrity error surfaced at chart creation, never at query
/// time.
pub fn resolve_layout(groups: &[seat_group::Model]) -> AppResult<Vec<Seat>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut seats = Vec::new();

    for group in groups {
        for seat_ref in expand_group(&group.coordinates, group.quantity)? {
            if !seen.insert(seat_ref.clone()) {
                return Err(AppError::Validation(format!(
                    "Seat '{}' is claimed by more than one seat group",
                    seat_ref
                )));
            }
            seats.push(Seat {
                seat_ref,
                seat_type_id: group.seat_type_id,
            });
        }
    }

    Ok(seats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: i32, seat_type_id: i32, coordinates: &str, quantity: i32) -> seat_group::Model {
        seat_group::Model {
            id,
            seating_chart_id: 1,
            seat_type_id,
            coordinates: coordinates.to_string(),
            quantity,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_expand_group_row_run() {
        let refs = expand_group("A1", 5).unwrap();
        assert_eq!(refs, vec!["A1", "A2", "A3", "A4", "A5"]);
    }

    #[test]
    fn test_expand_group_offset_start() {
        let refs = expand_group("B3", 2).unwrap();
        assert_eq!(refs, vec!["B3", "B4"]);
    }

    #[test]
    fn test_expand_group_rejects_garbage() {
        assert!(expand_group("12", 3).is_err());
        assert!(expand_group("A", 3).is_err());
        assert!(expand_group("A0", 3).is_err());
        assert!(expand_group("A1", 0).is_err());
    }

    #[test]
    fn test_resolve_layout_cardinality_and_uniqueness() {
        let groups = vec![group(1, 1, "A1", 5), group(2, 2, "B1", 2)];
        let layout = resolve_layout(&groups).unwrap();

        assert_eq!(layout.len(), 7);
        let refs: HashSet<_> = layout.iter().map(|s| s.seat_ref.clone()).collect();
        assert_eq!(refs.len(), 7);
        assert_eq!(layout[0].seat_type_id, 1);
        assert_eq!(layout[5].seat_type_id, 2);
    }

    #[test]
    fn test_resolve_layout_is_deterministic() {
        let groups = vec![group(1, 1, "A1", 4), group(2, 2, "B2", 3)];
        assert_eq!(
            resolve_layout(&groups).unwrap(),
            resolve_layout(&groups).unwrap()
        );
    }

    #[test]
    fn test_resolve_layout_rejects_overlapping_groups() {
        // A3 is claimed by both runs.
        let groups = vec![group(1, 1, "A1", 5), group(2, 2, "A3", 2)];
        assert!(resolve_layout(&groups).is_err());
    }
}
