pub mod select_tournament;
