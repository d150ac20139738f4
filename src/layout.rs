use raylib::prelude::*;
use crate::constants::*;
use crate::deck::{Area, SlideSpec};

pub const CONTENT_LEFT: f32 = 160.0;
pub const CONTENT_TOP: f32 = 280.0;
pub const CONTENT_WIDTH: f32 = RENDER_WIDTH as f32 - 2.0 * CONTENT_LEFT;
pub const CONTENT_BOTTOM: f32 = 940.0;

const GAP: f32 = 24.0;
const LINE_HEIGHT: f32 = 40.0;
const MIN_CELL_HEIGHT: f32 = 90.0;

/// Resting rectangles of every element on a slide, one list per group.
pub struct Layout {
    pub cells: Vec<Vec<Rectangle>>,
}

impl Layout {
    pub fn compute(slide: &SlideSpec) -> Layout {
        let half_width = (CONTENT_WIDTH - GAP) / 2.0;

        // Each area keeps its own vertical cursor
        let mut full_y = CONTENT_TOP;
        let mut left_y = CONTENT_TOP;
        let mut right_y = CONTENT_TOP;

        let mut cells = Vec::with_capacity(slide.groups.len());

        for group in slide.groups {
            let (x, width, cursor) = match group.area {
                Area::Full => (CONTENT_LEFT, CONTENT_WIDTH, &mut full_y),
                Area::Left => (CONTENT_LEFT, half_width, &mut left_y),
                Area::Right => (CONTENT_LEFT + half_width + GAP, half_width, &mut right_y),
            };

            let columns = group.columns.max(1) as usize;
            let cell_width = (width - GAP * (columns - 1) as f32) / columns as f32;

            let mut rects = Vec::with_capacity(group.labels.len());
            for row in group.labels.chunks(columns) {
                let row_height = row
                    .iter()
                    .map(|label| cell_height(label))
                    .fold(MIN_CELL_HEIGHT, f32::max);

                for (column, _) in row.iter().enumerate() {
                    rects.push(Rectangle::new(
                        x + column as f32 * (cell_width + GAP),
                        *cursor,
                        cell_width,
                        row_height,
                    ));
                }
                *cursor += row_height + GAP;
            }
            cells.push(rects);

            // Full-width groups push both halves down
            if group.area == Area::Full {
                left_y = full_y;
                right_y = full_y;
            } else {
                full_y = left_y.max(right_y);
            }
        }

        Layout { cells }
    }
}

fn cell_height(label: &str) -> f32 {
    20.0 + LINE_HEIGHT * label.lines().count().max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn every_element_gets_a_cell() {
        let deck = Deck::builtin();
        for n in 1..=deck.len() {
            let slide = deck.slide(n).unwrap();
            let layout = Layout::compute(slide);
            assert_eq!(layout.cells.len(), slide.groups.len());
            for (group, rects) in slide.groups.iter().zip(&layout.cells) {
                assert_eq!(rects.len(), group.labels.len(), "slide {}", n);
            }
        }
    }

    #[test]
    fn cells_stay_inside_content_area() {
        let deck = Deck::builtin();
        for n in 1..=deck.len() {
            for rect in Layout::compute(deck.slide(n).unwrap()).cells.iter().flatten() {
                assert!(rect.x >= CONTENT_LEFT, "slide {}", n);
                assert!(rect.x + rect.width <= CONTENT_LEFT + CONTENT_WIDTH + 0.5, "slide {}", n);
                assert!(rect.y >= CONTENT_TOP, "slide {}", n);
                assert!(rect.y + rect.height <= CONTENT_BOTTOM, "slide {}", n);
            }
        }
    }

    #[test]
    fn split_areas_sit_side_by_side() {
        let deck = Deck::builtin();
        let layout = Layout::compute(deck.slide(3).unwrap());
        let pros = layout.cells[0][0];
        let cons = layout.cells[1][0];
        assert_eq!(pros.y, cons.y);
        assert!(pros.x + pros.width < cons.x);

        // List items stack under their own section
        let first_pro = layout.cells[2][0];
        assert_eq!(first_pro.x, pros.x);
        assert!(first_pro.y > pros.y);
    }
}
