use crate::config::MAX_TARGETS;
use crate::model::{Badge, Board, GridDimensions, NavTarget};

/// Places up to six targets in two centred rows in the lower part of the grid.
///
/// The first `ceil(n/2)` targets go on the upper row. Within a row targets are
/// spread evenly over the columns between a one-column margin on each side; a
/// target that would land within one column of the spawn head is nudged two
/// columns right so the first tick cannot eat it by accident.
pub fn layout_badges(defs: &[NavTarget], dims: GridDimensions) -> Vec<Badge> {
    let items = &defs[..defs.len().min(MAX_TARGETS)];
    let rows = dims.rows;
    let row1_y = ((rows as f64 * 0.68).floor() as i32).min(rows - 3).max(2);
    let row2_y = ((rows as f64 * 0.82).floor() as i32).min(rows - 2).max(2);
    let split = items.len().div_ceil(2);
    let (upper, lower) = items.split_at(split);

    let mut out = place_row(upper, row1_y, dims);
    out.extend(place_row(lower, row2_y, dims));
    out
}

fn place_row(list: &[NavTarget], y: i32, dims: GridDimensions) -> Vec<Badge> {
    let head_x = Board::spawn_column(dims);
    let usable = (dims.columns - 2) as f64;
    let gap = usable / (list.len() as f64 + 1.0);
    list.iter()
        .enumerate()
        .map(|(i, def)| {
            let mut x = (1.0 + gap * (i as f64 + 1.0)).round() as i32;
            if (x - head_x).abs() <= 1 {
                x = (x + 2).min(dims.columns - 2);
            }
            Badge {
                target: def.clone(),
                x,
                y,
                consumed: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TargetKind;

    fn defs(n: usize) -> Vec<NavTarget> {
        (0..n)
            .map(|i| NavTarget {
                key: format!("t{i}"),
                label: format!("T{i}"),
                icon: String::new(),
                kind: TargetKind::Section,
                section_id: Some(format!("s{i}")),
                href: None,
            })
            .collect()
    }

    fn dims(columns: i32, rows: i32) -> GridDimensions {
        GridDimensions {
            columns,
            rows,
            cell_size: 20.0,
        }
    }

    fn xs(badges: &[Badge]) -> Vec<(i32, i32)> {
        badges.iter().map(|b| (b.x, b.y)).collect()
    }

    #[test]
    fn five_targets_split_three_and_two() {
        let badges = layout_badges(&defs(5), dims(36, 24));
        // rows: floor(24*0.68)=16, floor(24*0.82)=19
        // upper gap 34/4=8.5 -> 9.5, 18, 26.5 ; 18 is next to head 18 -> 20
        // lower gap 34/3 -> 12.33, 23.67
        assert_eq!(
            xs(&badges),
            vec![(10, 16), (20, 16), (27, 16), (12, 19), (24, 19)]
        );
        assert_eq!(badges[3].target.key, "t3");
    }

    #[test]
    fn caps_at_six() {
        let badges = layout_badges(&defs(9), dims(40, 30));
        assert_eq!(badges.len(), 6);
        assert_eq!(badges.iter().filter(|b| b.y == 20).count(), 3);
        assert_eq!(badges.iter().filter(|b| b.y == 24).count(), 3);
    }

    #[test]
    fn nudge_stays_inside_margin() {
        // single target lands on the head column of a minimum grid
        let badges = layout_badges(&defs(1), dims(22, 14));
        assert_eq!(xs(&badges), vec![(13, 9)]);
        for b in &badges {
            assert!(b.x >= 1 && b.x <= 20);
            assert!((b.x - 11).abs() > 1);
        }
    }

    #[test]
    fn rows_are_clamped_on_short_grids() {
        let badges = layout_badges(&defs(2), dims(22, 3));
        assert!(badges.iter().all(|b| b.y == 2));
    }

    #[test]
    fn empty_input_gives_no_badges() {
        assert!(layout_badges(&[], dims(30, 20)).is_empty());
    }
}
