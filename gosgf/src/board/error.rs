/// The error type for converting between pixel and board coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoordinateError {
    NonPositiveBoardSize { board_size: i32 },
    NonFiniteCoordinate { x: f32, y: f32 },
    DegenerateCellSize { screen_x: f32 },
    ZeroCellCount,
    InvalidPixelExtent { extent: f32 },
    OutOfBounds { x: f32, y: f32, extent: f32 },
    CellOutOfBounds { cell_x: u32, cell_y: u32, cell_count: u32 },
}

impl std::error::Error for CoordinateError {}

impl std::fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateError::NonPositiveBoardSize { board_size } =>
                write!(f, "Board size must be positive, but was {}", board_size),
            CoordinateError::NonFiniteCoordinate { x, y } =>
                write!(f, "Pixel coordinates ({}, {}) are not finite numbers", x, y),
            CoordinateError::DegenerateCellSize { screen_x } =>
                write!(f, "Horizontal pixel position {} does not give a positive cell size", screen_x),
            CoordinateError::ZeroCellCount =>
                write!(f, "A board needs at least one cell per side"),
            CoordinateError::InvalidPixelExtent { extent } =>
                write!(f, "Board pixel extent must be a positive finite number, but was {}", extent),
            CoordinateError::OutOfBounds { x, y, extent } =>
                write!(f, "Pixel ({}, {}) lies outside of the board, which spans [0, {}] on both axes", x, y, extent),
            CoordinateError::CellOutOfBounds { cell_x, cell_y, cell_count } =>
                write!(f, "Cell ({}, {}) does not exist on a board with {} cells per side", cell_x, cell_y, cell_count),
        }
    }
}
