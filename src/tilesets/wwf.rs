use super::TileInfo;

/// Words With Friends tile distribution: (letter, count, points)
pub const TILESET: &[TileInfo] = &[
    ('*', 2, 0),
    ('A', 9, 1),
    ('B', 2, 4),
    ('C', 2, 4),
    ('D', 5, 2),
    ('E', 13, 1),
    ('F', 2, 4),
    ('G', 3, 3),
    ('H', 4, 3),
    ('I', 8, 1),
    ('J', 1, 10),
    ('K', 1, 5),
    ('L', 4, 2),
    ('M', 2, 4),
    ('N', 5, 2),
    ('O', 8, 1),
    ('P', 2, 4),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 5, 1),
    ('T', 7, 1),
    ('U', 4, 2),
    ('V', 2, 5),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 3),
    ('Z', 1, 10),
];
