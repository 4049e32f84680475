use crate::core::GameState;

/// Ordering cost used by the uniform-cost search: moves taken so far plus one per
/// lava cell on the board. Boards drowning in lava sort later. This does not bound
/// the true remaining cost, so the search it drives is cost-ordered, not optimal.
pub fn search_penalty(game: &GameState, path_len: usize) -> usize {
    path_len + game.lava_cell_count()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::map_loader::parse_level;

    #[test]
    fn penalty_counts_path_and_lava() {
        let game = parse_level("######\n#PLL.#\n#..L.#\n######\n").unwrap();
        assert_eq!(search_penalty(&game, 0), 3);
        assert_eq!(search_penalty(&game, 4), 7);
    }

    #[test]
    fn penalty_without_lava_is_path_length() {
        let game = parse_level("#####\n#PW.#\n#####\n").unwrap();
        assert_eq!(search_penalty(&game, 5), 5);
    }
}
