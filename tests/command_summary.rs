use clap::Parser;
use spne::{
    Error,
    cli::commands::{
        solve::{self, SolveArgs},
        tree::{self, TreeArgs},
    },
};

fn solve_args<I, T>(args: I) -> SolveArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    SolveArgs::parse_from(args)
}

fn tree_args<I, T>(args: I) -> TreeArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TreeArgs::parse_from(args)
}

#[test]
fn solve_prints_equilibrium_for_forced_win() {
    let args = solve_args([
        "spne-solve",
        "xx.oo....",
        "x",
        "--gt",
        "2",
        "--no-color",
        "--no-progress",
    ]);

    solve::execute(args).expect("solving an open board should succeed");
}

#[test]
fn solve_json_with_verification_succeeds() {
    let args = solve_args([
        "spne-solve",
        "xx.o.....",
        "o",
        "-g",
        "longest",
        "--json",
        "--verify",
        "--no-progress",
    ]);

    solve::execute(args).expect("verified JSON solve should succeed");
}

#[test]
fn solve_accepts_full_board() {
    let args = solve_args(["spne-solve", "xxoooxxox", "x", "--verify", "--no-progress"]);
    solve::execute(args).expect("a drawn full board solves to itself");
}

#[test]
fn solve_rejects_already_won_board() {
    let args = solve_args(["spne-solve", "xxxoo....", "o", "--no-progress"]);

    let err = solve::execute(args).unwrap_err();
    assert_eq!(err.to_string(), "cannot build a game tree from this board");
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::AlreadyWon { winner: 'x', .. })
    ));
}

#[test]
fn solve_rejects_malformed_board() {
    let args = solve_args(["spne-solve", "xx.oq....", "x", "--no-progress"]);

    let err = solve::execute(args).unwrap_err();
    assert!(err.to_string().contains("invalid starting state"));
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InvalidCellCharacter { character: 'q', .. })
    ));
}

#[test]
fn tree_reports_statistics() {
    let args = tree_args(["spne-tree", "xo.......", "x", "-g", "shortest", "--no-progress"]);
    tree::execute(args).expect("tree statistics for an open board should succeed");
}

#[test]
fn tree_rejects_already_won_board() {
    let args = tree_args(["spne-tree", "ooo.xx.x.", "x", "--no-progress"]);

    let err = tree::execute(args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::AlreadyWon { winner: 'o', .. })
    ));
}
