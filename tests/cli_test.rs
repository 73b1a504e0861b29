#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use tictactoe::cli::{prompt_players, run_session};
    use tictactoe::{GameController, MoveOutcome, PlayerSpec};

    fn players() -> (PlayerSpec, PlayerSpec) {
        (PlayerSpec::new("Alice", "X"), PlayerSpec::new("Bob", "O"))
    }

    fn run(script: &str) -> (Vec<MoveOutcome>, String, GameController) {
        let (p1, p2) = players();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut controller = GameController::new();
        let finished = run_session(&mut input, &mut output, &mut controller, &p1, &p2).unwrap();
        (finished, String::from_utf8(output).unwrap(), controller)
    }

    #[test]
    fn test_scripted_win_then_exit() {
        let (finished, out, controller) = run("1\n2\n5\n4\n9\nn\n");
        assert_eq!(
            finished,
            vec![MoveOutcome::Winner { name: "Alice".to_string() }]
        );
        assert!(out.contains("Alice's (X) turn"));
        assert!(out.contains("Alice wins!"));
        assert!(out.contains("Game Ended"));
        assert!(!controller.is_active());
    }

    #[test]
    fn test_bad_input_and_occupied_cell_are_reported() {
        let (finished, out, _) = run("abc\n0\n1\n1\nq\n");
        assert!(finished.is_empty());
        assert!(out.contains("Invalid cell 'abc'"));
        assert!(out.contains("Cell 0 out of range"));
        assert!(out.contains("Invalid move! Cell already occupied."));
        assert!(out.contains("Bob's (O) turn"));
    }

    #[test]
    fn test_play_again_restarts_with_same_players() {
        // game 1: Alice wins the top row; game 2: tie
        let script = "1\n4\n2\n5\n3\ny\n1\n5\n3\n2\n8\n7\n4\n6\n9\nn\n";
        let (finished, _, _) = run(script);
        assert_eq!(
            finished,
            vec![
                MoveOutcome::Winner { name: "Alice".to_string() },
                MoveOutcome::Tie
            ]
        );
    }

    #[test]
    fn test_eof_ends_session() {
        let (finished, out, controller) = run("5\n");
        assert!(finished.is_empty());
        assert!(out.ends_with("Game Ended\n"));
        assert!(controller.board().iter().flatten().all(Option::is_none));
    }

    #[test]
    fn test_prompt_players_defaults_and_retry() {
        // first attempt duplicates the token, second takes the defaults
        let mut input = Cursor::new(b"Alice\nX\nBob\nX\nAlice\n\nBob\n\n".to_vec());
        let mut output = Vec::new();
        let (p1, p2) = prompt_players(&mut input, &mut output, [(None, None), (None, None)])
            .unwrap()
            .unwrap();
        assert_eq!(p1, PlayerSpec::new("Alice", "X"));
        assert_eq!(p2, PlayerSpec::new("Bob", "O"));
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Players must have different tokens"));
    }

    #[test]
    fn test_prompt_players_second_token_follows_first() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let given = [
            (Some("Ann".to_string()), Some("O".to_string())),
            (Some("Ben".to_string()), None),
        ];
        let (_, p2) = prompt_players(&mut input, &mut output, given).unwrap().unwrap();
        assert_eq!(p2.token.as_str(), "X");
    }

    #[test]
    fn test_prompt_players_duplicate_flag_tokens_fail_without_looping() {
        // only names are asked for; the clashing tokens can never change
        let mut input = Cursor::new(b"Ann\nBen\nAnn\nBen\nAnn\nBen\n".to_vec());
        let mut output = Vec::new();
        let given = [(None, Some("X".to_string())), (None, Some("X".to_string()))];
        assert!(prompt_players(&mut input, &mut output, given).is_err());
        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches("Players must have different tokens").count(), 1);
    }

    #[test]
    fn test_prompt_players_empty_flag_name_fails() {
        let mut input = Cursor::new(b"X\nBen\nO\n".to_vec());
        let mut output = Vec::new();
        let given = [(Some(String::new()), None), (None, None)];
        let err = prompt_players(&mut input, &mut output, given).unwrap_err();
        assert_eq!(err.to_string(), "Player 1 needs a name");
    }

    #[test]
    fn test_prompt_players_reasks_prompted_token_clash() {
        // seat 1's token comes from a flag, seat 2 typed the same one and is asked again
        let mut input = Cursor::new(b"Ben\nX\nBen\nO\n".to_vec());
        let mut output = Vec::new();
        let given = [(Some("Ann".to_string()), Some("X".to_string())), (None, None)];
        let (p1, p2) = prompt_players(&mut input, &mut output, given).unwrap().unwrap();
        assert_eq!(p1, PlayerSpec::new("Ann", "X"));
        assert_eq!(p2, PlayerSpec::new("Ben", "O"));
    }

    #[test]
    fn test_prompt_players_invalid_flags_fail() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let given = [
            (Some("Ann".to_string()), Some("X".to_string())),
            (Some("Ben".to_string()), Some("X".to_string())),
        ];
        assert!(prompt_players(&mut input, &mut output, given).is_err());
    }
}
