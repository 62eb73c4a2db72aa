pub mod d100_overview;
