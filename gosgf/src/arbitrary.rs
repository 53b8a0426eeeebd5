use crate::{BoardGeometry, BoardSnapshot, Move, Stone};

/// A valid board geometry plus a cell that exists on it.
#[derive(Clone, Debug)]
pub struct GeometryInput {
    pub geometry: BoardGeometry,
    pub cell_x: u32,
    pub cell_y: u32,
}

impl quickcheck::Arbitrary for GeometryInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Between 1 and 25 cells, spread over 1 to 2000 pixels
        let cell_count = (u8::arbitrary(g) % 25) as u32 + 1;
        let extent = (u16::arbitrary(g) % 2000) as f32 + 1.0;
        let geometry = BoardGeometry::new(extent, cell_count).unwrap();
        let cell_x = u32::arbitrary(g) % cell_count;
        let cell_y = u32::arbitrary(g) % cell_count;
        GeometryInput {
            geometry,
            cell_x,
            cell_y,
        }
    }
}

impl quickcheck::Arbitrary for Stone {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Stone::Empty, Stone::Black, Stone::White])
            .unwrap()
    }
}

impl quickcheck::Arbitrary for BoardSnapshot {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = *g.choose(&[1, 5, 9, 13, 19]).unwrap();
        let mut snapshot = BoardSnapshot::empty(size, "black", "white");
        for y in 0..size {
            for x in 0..size {
                let stone = Stone::arbitrary(g);
                snapshot.board_state[y][x] = stone;
                if stone != Stone::Empty {
                    snapshot.moves.push(Move {
                        x: x as i32,
                        y: y as i32,
                    });
                }
            }
        }
        snapshot
    }
}
