//! Conversion between pixel coordinates on screen and cell indices on the board.
//!
//! There are two flavors here. [`to_board_coordinates()`] and
//! [`to_screen_coordinates()`] keep the formulas the app has always used. They
//! disagree about what `board_size` means: the first treats it as the number
//! of cells per side and derives the cell size from `screen_x`, the second
//! treats it as the pixel size of one cell. They are therefore **not** inverses
//! of each other.
//!
//! [`BoardGeometry`] takes the pixel extent of the board and the cell count
//! separately and derives the cell size the same way in both directions.
use serde::{Deserialize, Serialize};

use crate::CoordinateError;

/// Maps a pixel position to a cell, treating `board_size` as the number of cells per side.
///
/// The cell size is `screen_x / board_size`, i.e. the horizontal pixel
/// position doubles as the board's pixel width. Results are not clamped to
/// `[0, board_size)`. The origin maps to `(0, 0)`. Any other point with
/// `screen_x <= 0`, or with an `screen_x` so small that the cell size
/// underflows, has no usable cell size and is rejected.
pub fn to_board_coordinates(
    screen_x: f32,
    screen_y: f32,
    board_size: i32,
) -> Result<(i32, i32), CoordinateError> {
    if board_size <= 0 {
        return Err(CoordinateError::NonPositiveBoardSize { board_size });
    }
    if !screen_x.is_finite() || !screen_y.is_finite() {
        return Err(CoordinateError::NonFiniteCoordinate {
            x: screen_x,
            y: screen_y,
        });
    }
    if screen_x == 0.0 && screen_y == 0.0 {
        return Ok((0, 0));
    }
    let cell_size = screen_x / board_size as f32;
    if !cell_size.is_normal() || cell_size < 0.0 {
        return Err(CoordinateError::DegenerateCellSize { screen_x });
    }
    let fx = screen_x / cell_size;
    let fy = screen_y / cell_size;
    if !fx.is_finite() || !fy.is_finite() {
        return Err(CoordinateError::DegenerateCellSize { screen_x });
    }
    Ok((fx.floor() as i32, fy.floor() as i32))
}

/// Maps a cell to a pixel position, treating `board_size` as the pixel size of one cell.
pub fn to_screen_coordinates(
    cell_x: i32,
    cell_y: i32,
    board_size: i32,
) -> Result<(f32, f32), CoordinateError> {
    if board_size <= 0 {
        return Err(CoordinateError::NonPositiveBoardSize { board_size });
    }
    let cell_size = board_size as f32;
    Ok((cell_x as f32 * cell_size, cell_y as f32 * cell_size))
}

/// A square board of `cell_count` x `cell_count` cells drawn over
/// `board_pixel_extent` x `board_pixel_extent` pixels, with the origin in the
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    board_pixel_extent: f32,
    cell_count: u32,
}

impl BoardGeometry {
    pub fn new(board_pixel_extent: f32, cell_count: u32) -> Result<Self, CoordinateError> {
        if cell_count == 0 {
            return Err(CoordinateError::ZeroCellCount);
        }
        if !board_pixel_extent.is_finite() || board_pixel_extent <= 0.0 {
            return Err(CoordinateError::InvalidPixelExtent {
                extent: board_pixel_extent,
            });
        }
        Ok(Self {
            board_pixel_extent,
            cell_count,
        })
    }

    pub fn board_pixel_extent(&self) -> f32 {
        self.board_pixel_extent
    }

    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// The side length of one cell in pixels.
    pub fn cell_size(&self) -> f32 {
        self.board_pixel_extent / self.cell_count as f32
    }

    /// The cell containing pixel `(x, y)`.
    ///
    /// Points on the far edge of the board belong to the last cell.
    pub fn to_cell(self, x: f32, y: f32) -> Result<(u32, u32), CoordinateError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CoordinateError::NonFiniteCoordinate { x, y });
        }
        let extent = self.board_pixel_extent;
        if x < 0.0 || y < 0.0 || x > extent || y > extent {
            return Err(CoordinateError::OutOfBounds { x, y, extent });
        }
        let cell_size = self.cell_size();
        let last = self.cell_count - 1;
        let cell_x = ((x / cell_size).floor() as u32).min(last);
        let cell_y = ((y / cell_size).floor() as u32).min(last);
        Ok((cell_x, cell_y))
    }

    /// The top-left corner of cell `(cell_x, cell_y)` in pixels.
    pub fn to_pixel(self, cell_x: u32, cell_y: u32) -> Result<(f32, f32), CoordinateError> {
        self.check_cell(cell_x, cell_y)?;
        let cell_size = self.cell_size();
        Ok((cell_x as f32 * cell_size, cell_y as f32 * cell_size))
    }

    /// The center of cell `(cell_x, cell_y)` in pixels, where a stone would be drawn.
    pub fn to_pixel_center(self, cell_x: u32, cell_y: u32) -> Result<(f32, f32), CoordinateError> {
        let (x, y) = self.to_pixel(cell_x, cell_y)?;
        let half = self.cell_size() / 2.0;
        Ok((x + half, y + half))
    }

    fn check_cell(&self, cell_x: u32, cell_y: u32) -> Result<(), CoordinateError> {
        if cell_x >= self.cell_count || cell_y >= self.cell_count {
            return Err(CoordinateError::CellOutOfBounds {
                cell_x,
                cell_y,
                cell_count: self.cell_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::GeometryInput;

    #[test]
    fn origin_maps_to_origin() {
        for board_size in [1, 9, 13, 19, 40] {
            assert_eq!(to_board_coordinates(0.0, 0.0, board_size), Ok((0, 0)));
        }
    }

    #[test]
    fn board_coordinates_use_screen_x_as_board_width() {
        // cell size = 300 / 10 = 30
        assert_eq!(to_board_coordinates(300.0, 150.0, 10), Ok((10, 5)));
    }

    #[test]
    fn screen_coordinates_use_board_size_as_cell_size() {
        assert_eq!(to_screen_coordinates(3, 4, 40), Ok((120.0, 160.0)));
    }

    #[test]
    fn legacy_conversions_are_not_inverses() {
        let (x, y) = to_screen_coordinates(3, 4, 40).unwrap();
        let back = to_board_coordinates(x, y, 40).unwrap();
        // cell size on the way back is 120 / 40 = 3
        assert_eq!(back, (40, 53));
        assert_ne!(back, (3, 4));
    }

    #[test]
    fn legacy_conversions_reject_non_positive_board_size() {
        assert_eq!(
            to_board_coordinates(10.0, 10.0, 0),
            Err(CoordinateError::NonPositiveBoardSize { board_size: 0 })
        );
        assert_eq!(
            to_board_coordinates(10.0, 10.0, -19),
            Err(CoordinateError::NonPositiveBoardSize { board_size: -19 })
        );
        assert_eq!(
            to_screen_coordinates(1, 1, 0),
            Err(CoordinateError::NonPositiveBoardSize { board_size: 0 })
        );
    }

    #[test]
    fn legacy_board_coordinates_reject_non_finite_input() {
        assert!(matches!(
            to_board_coordinates(f32::NAN, 1.0, 19),
            Err(CoordinateError::NonFiniteCoordinate { .. })
        ));
        assert!(matches!(
            to_board_coordinates(1.0, f32::INFINITY, 19),
            Err(CoordinateError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn legacy_board_coordinates_reject_degenerate_cell_size() {
        // Zero width but a non-zero height would divide by a zero cell size
        assert_eq!(
            to_board_coordinates(0.0, 150.0, 10),
            Err(CoordinateError::DegenerateCellSize { screen_x: 0.0 })
        );
        assert_eq!(
            to_board_coordinates(-10.0, 5.0, 10),
            Err(CoordinateError::DegenerateCellSize { screen_x: -10.0 })
        );
        // The cell size underflows to zero
        assert_eq!(
            to_board_coordinates(1e-40, 5.0, 10),
            Err(CoordinateError::DegenerateCellSize { screen_x: 1e-40 })
        );
    }

    #[test]
    fn legacy_board_coordinates_are_not_clamped() {
        // cell size = 100 / 10 = 10, so y = 500 lands far outside the board
        assert_eq!(to_board_coordinates(100.0, 500.0, 10), Ok((10, 50)));
    }

    #[test]
    fn geometry_rejects_degenerate_boards() {
        assert_eq!(BoardGeometry::new(100.0, 0), Err(CoordinateError::ZeroCellCount));
        assert!(matches!(
            BoardGeometry::new(0.0, 19),
            Err(CoordinateError::InvalidPixelExtent { .. })
        ));
        assert!(matches!(
            BoardGeometry::new(-5.0, 19),
            Err(CoordinateError::InvalidPixelExtent { .. })
        ));
        assert!(matches!(
            BoardGeometry::new(f32::INFINITY, 19),
            Err(CoordinateError::InvalidPixelExtent { .. })
        ));
    }

    #[test]
    fn geometry_maps_pixels_to_cells() {
        let geometry = BoardGeometry::new(190.0, 19).unwrap();
        assert_eq!(geometry.cell_size(), 10.0);
        assert_eq!(geometry.to_cell(0.0, 0.0), Ok((0, 0)));
        assert_eq!(geometry.to_cell(9.9, 10.0), Ok((0, 1)));
        assert_eq!(geometry.to_cell(185.0, 42.0), Ok((18, 4)));
        // The far edge belongs to the last cell
        assert_eq!(geometry.to_cell(190.0, 190.0), Ok((18, 18)));
    }

    #[test]
    fn geometry_maps_cells_to_pixels() {
        let geometry = BoardGeometry::new(190.0, 19).unwrap();
        assert_eq!(geometry.to_pixel(3, 4), Ok((30.0, 40.0)));
        assert_eq!(geometry.to_pixel_center(3, 4), Ok((35.0, 45.0)));
        assert_eq!(geometry.to_cell(30.0, 40.0), Ok((3, 4)));
    }

    #[test]
    fn geometry_rejects_out_of_range_input() {
        let geometry = BoardGeometry::new(190.0, 19).unwrap();
        assert!(matches!(
            geometry.to_cell(-0.5, 3.0),
            Err(CoordinateError::OutOfBounds { .. })
        ));
        assert!(matches!(
            geometry.to_cell(3.0, 190.5),
            Err(CoordinateError::OutOfBounds { .. })
        ));
        assert!(matches!(
            geometry.to_cell(f32::NAN, 3.0),
            Err(CoordinateError::NonFiniteCoordinate { .. })
        ));
        assert_eq!(
            geometry.to_pixel(19, 0),
            Err(CoordinateError::CellOutOfBounds {
                cell_x: 19,
                cell_y: 0,
                cell_count: 19
            })
        );
    }

    quickcheck! {
        fn cell_center_round_trip(input: GeometryInput) -> bool {
            let GeometryInput { geometry, cell_x, cell_y } = input;
            let (x, y) = geometry.to_pixel_center(cell_x, cell_y).unwrap();
            geometry.to_cell(x, y) == Ok((cell_x, cell_y))
        }

        fn cells_stay_on_the_board(input: GeometryInput, fx: u16, fy: u16) -> bool {
            let geometry = input.geometry;
            let x = geometry.board_pixel_extent() * (fx as f32 / u16::MAX as f32);
            let y = geometry.board_pixel_extent() * (fy as f32 / u16::MAX as f32);
            match geometry.to_cell(x, y) {
                Ok((cx, cy)) => cx < geometry.cell_count() && cy < geometry.cell_count(),
                Err(_) => false,
            }
        }

        fn legacy_board_coordinates_never_saturate(x: u16, y: u16, board_size: u8) -> bool {
            let board_size = board_size as i32 + 1;
            match to_board_coordinates(x as f32, y as f32, board_size) {
                Ok((cx, cy)) => cx != i32::MAX && cy != i32::MAX,
                Err(CoordinateError::DegenerateCellSize { screen_x }) => screen_x == 0.0 && y != 0,
                Err(_) => false,
            }
        }

        fn legacy_screen_coordinates_scale_by_board_size(cell_x: i16, cell_y: i16, board_size: u8) -> bool {
            let board_size = board_size as i32 + 1;
            to_screen_coordinates(cell_x as i32, cell_y as i32, board_size)
                == Ok((cell_x as f32 * board_size as f32, cell_y as f32 * board_size as f32))
        }
    }
}
